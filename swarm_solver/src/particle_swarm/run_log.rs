use crate::prelude::*;

/// Everything a completed run knows about its result.
#[derive(Debug, Clone, PartialEq)]
pub struct PsoRunLog {
    pub objective_name: String,
    pub best: ScoredParticle,
    /// Best value among the initial random sample, before any sweep.
    pub initial_best_value: f64,
    /// Global-best value after each sweep; `cost_history[k]` belongs to
    /// iteration `k + 1`.
    pub cost_history: Vec<f64>,
    pub iterations_completed: usize,
    pub evaluations: usize,
    pub vmax: f64,
}

impl PsoRunLog {
    pub fn best_particle(&self) -> Particle {
        self.best.particle
    }

    pub fn best_value(&self) -> f64 {
        self.best.value
    }

    pub fn improvement(&self) -> f64 {
        self.initial_best_value - self.best.value
    }
}
