use std::time::Duration;

use crate::objective::Domain;

/// Parameters for one [`ParticleSwarm`](super::ParticleSwarm).
#[derive(Clone, Debug, PartialEq)]
pub struct PsoConfig {
    /// Swarm size. Zero is accepted and makes `run` return no particle.
    pub num_particles: usize,
    /// Number of update sweeps after initialization. Zero returns the best of
    /// the initial random sample.
    pub num_iterations: usize,

    /// Inertia weight `w` applied to the previous velocity.
    pub inertia: f64,
    /// Cognitive coefficient `c1` (pull toward the particle's own best).
    pub cognitive: f64,
    /// Social coefficient `c2` (pull toward the swarm's best).
    pub social: f64,

    /// Per-axis velocity cap. `None` derives it from the domain as the wider
    /// of the two ranges. Also bounds the initial velocity sampling.
    pub vmax: Option<f64>,

    /// Pause after each observed iteration. Unobserved runs never pause.
    pub observer_pause: Duration,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            num_particles: 30,
            num_iterations: 100,
            inertia: 0.5,
            cognitive: 0.5,
            social: 0.5,
            vmax: None,
            observer_pause: Duration::from_millis(100),
        }
    }
}

impl PsoConfig {
    pub fn new(
        num_particles: usize,
        num_iterations: usize,
        inertia: f64,
        cognitive: f64,
        social: f64,
    ) -> Self {
        Self {
            num_particles,
            num_iterations,
            inertia,
            cognitive,
            social,
            ..Default::default()
        }
    }

    pub fn with_num_particles(mut self, num_particles: usize) -> Self {
        self.num_particles = num_particles;
        self
    }

    pub fn with_num_iterations(mut self, num_iterations: usize) -> Self {
        self.num_iterations = num_iterations;
        self
    }

    pub fn with_coefficients(mut self, inertia: f64, cognitive: f64, social: f64) -> Self {
        self.inertia = inertia;
        self.cognitive = cognitive;
        self.social = social;
        self
    }

    /// Explicit velocity cap; negative values are clamped to zero.
    pub fn with_vmax(mut self, vmax: f64) -> Self {
        // f64::max ignores a NaN operand, so NaN also lands on 0.0
        self.vmax = Some(vmax.max(0.0));
        self
    }

    pub fn with_observer_pause(mut self, pause: Duration) -> Self {
        self.observer_pause = pause;
        self
    }

    /// The cap actually applied for a run over `domain`. An infinite explicit
    /// cap falls back to the domain-derived one so velocities stay finite.
    pub fn effective_vmax(&self, domain: &Domain) -> f64 {
        match self.vmax.map(|vmax| vmax.max(0.0)) {
            Some(vmax) if vmax.is_finite() => vmax,
            _ => domain.default_vmax(),
        }
    }
}
