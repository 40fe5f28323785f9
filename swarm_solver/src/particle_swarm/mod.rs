use rand::{SeedableRng, rngs::StdRng};
use rand_core::RngCore;

use crate::prelude::*;

pub mod config;
pub mod observer;
pub mod particle;
pub mod run_log;
pub mod swarm_state;

use swarm_state::{Motion, SwarmState};

#[cfg(test)]
mod tests;

/// Particle swarm minimizer over a rectangular 2D domain.
///
/// Type parameters:
/// - `O`: the objective being minimized.
/// - `R`: the random stream. It is owned by the optimizer and keeps running
///   across consecutive `run` calls, so repeated runs are independent draws.
///   Nothing else carries over between runs; every run reseeds its swarm.
pub struct ParticleSwarm<O, R = StdRng>
where
    O: Objective,
    R: RngCore,
{
    config: PsoConfig,
    objective: O,
    rng: R,
}

impl<O: Objective> ParticleSwarm<O, StdRng> {
    /// Optimizer with an OS-seeded random stream.
    pub fn new(config: PsoConfig, objective: O) -> Self {
        Self::with_rng(config, objective, StdRng::from_os_rng())
    }

    /// Optimizer with a deterministic random stream.
    pub fn with_seed(config: PsoConfig, objective: O, seed: u64) -> Self {
        Self::with_rng(config, objective, StdRng::seed_from_u64(seed))
    }
}

impl<O, R> ParticleSwarm<O, R>
where
    O: Objective,
    R: RngCore,
{
    pub fn with_rng(config: PsoConfig, objective: O, rng: R) -> Self {
        Self {
            config,
            objective,
            rng,
        }
    }

    pub fn config(&self) -> &PsoConfig {
        &self.config
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Runs the search and returns the best particle found, or `None` for an
    /// empty swarm.
    pub fn run(
        &mut self,
        observer: Option<&mut dyn IterationObserver>,
    ) -> Result<Option<Particle>, PsoError> {
        Ok(self.solve(observer)?.map(|log| log.best_particle()))
    }

    /// Runs the search and returns the full run log.
    ///
    /// With an observer attached, each completed sweep is delivered as an
    /// [`IterationSnapshot`] and followed by `config.observer_pause`. An
    /// observer error stops the run immediately.
    pub fn solve(
        &mut self,
        mut observer: Option<&mut dyn IterationObserver>,
    ) -> Result<Option<PsoRunLog>, PsoError> {
        let domain = self.objective.domain()?;
        let motion = Motion::new(&self.config, domain);
        let objective_name = tynm::type_name::<O>();

        self.print_pre_optimization_summary(&objective_name, &motion);

        let Some(mut swarm) = SwarmState::initialize(
            &self.objective,
            &motion,
            self.config.num_particles,
            &mut self.rng,
        ) else {
            tracing::info!("empty swarm, nothing to optimize");
            return Ok(None);
        };

        let initial_best_value = swarm.global_best().value;
        let mut evaluations = swarm.len();
        let mut cost_history = Vec::with_capacity(self.config.num_iterations);

        for iteration in 1..=self.config.num_iterations {
            evaluations += swarm.sweep(&self.objective, &motion, &mut self.rng);

            let best = swarm.global_best();
            cost_history.push(best.value);
            tracing::debug!(
                "{}",
                ProgressLine {
                    iteration,
                    best: best.particle,
                    value: best.value,
                }
            );

            if let Some(observer) = observer.as_mut() {
                observer
                    .on_iteration(swarm.snapshot(iteration))
                    .map_err(|source| PsoError::Observer { iteration, source })?;

                if !self.config.observer_pause.is_zero() {
                    std::thread::sleep(self.config.observer_pause);
                }
            }
        }

        let log = PsoRunLog {
            objective_name,
            best: swarm.global_best(),
            initial_best_value,
            iterations_completed: cost_history.len(),
            cost_history,
            evaluations,
            vmax: motion.vmax,
        };

        self.print_post_optimization_summary(&log);
        Ok(Some(log))
    }

    fn print_pre_optimization_summary(&self, objective_name: &str, motion: &Motion) {
        tracing::info!(
            objective = objective_name,
            particles = self.config.num_particles,
            iterations = self.config.num_iterations,
            w = self.config.inertia,
            c1 = self.config.cognitive,
            c2 = self.config.social,
            vmax = motion.vmax,
            "pre optimization: x in [{}, {}], y in [{}, {}]",
            motion.domain.x_min,
            motion.domain.x_max,
            motion.domain.y_min,
            motion.domain.y_max,
        );
    }

    fn print_post_optimization_summary(&self, log: &PsoRunLog) {
        tracing::info!(
            objective = %log.objective_name,
            iterations = log.iterations_completed,
            evaluations = log.evaluations,
            "post optimization: best {} -> {:.6e} (initial {:.6e})",
            log.best.particle,
            log.best.value,
            log.initial_best_value,
        );
    }
}
