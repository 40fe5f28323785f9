use std::panic::{AssertUnwindSafe, catch_unwind};

use rand::Rng;
use rand_core::RngCore;

use crate::prelude::*;

/// Non-finite evaluations count as worst-possible so the search carries on.
pub fn sanitize_value(value: f64) -> f64 {
    if value.is_finite() { value } else { f64::INFINITY }
}

/// Evaluates `p` once. A panicking objective scores `+inf` like a non-finite
/// result; the swarm state is only touched after this returns.
pub fn evaluate_guarded<O>(objective: &O, p: &Particle) -> f64
where
    O: Objective + ?Sized,
{
    match catch_unwind(AssertUnwindSafe(|| objective.evaluate_particle(p))) {
        Ok(value) => sanitize_value(value),
        Err(_) => {
            tracing::debug!(particle = %p, "objective panicked, scoring as +inf");
            f64::INFINITY
        }
    }
}

/// Coefficients and limits of the velocity/position recurrence for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub inertia: f64,
    pub cognitive: f64,
    pub social: f64,
    pub vmax: f64,
    pub domain: Domain,
}

impl Motion {
    pub fn new(config: &PsoConfig, domain: Domain) -> Self {
        Self {
            inertia: config.inertia,
            cognitive: config.cognitive,
            social: config.social,
            vmax: config.effective_vmax(&domain),
            domain,
        }
    }

    fn clamp_velocity(&self, v: f64) -> f64 {
        v.clamp(-self.vmax, self.vmax)
    }

    /// Moves `p` one step given its own best, the swarm best, and the random
    /// draws `r1`/`r2` (shared by both axes).
    ///
    /// Velocity is clamped to `[-vmax, vmax]` first; the position proposal is
    /// then truncated to the domain boundary.
    pub fn step(&self, p: &Particle, local: &Particle, global: &Particle, r1: f64, r2: f64) -> Particle {
        let vx = self.clamp_velocity(
            self.inertia * p.vx
                + self.cognitive * r1 * (local.x - p.x)
                + self.social * r2 * (global.x - p.x),
        );
        let vy = self.clamp_velocity(
            self.inertia * p.vy
                + self.cognitive * r1 * (local.y - p.y)
                + self.social * r2 * (global.y - p.y),
        );

        Particle::new(
            self.domain.clamp_x(p.x + vx),
            self.domain.clamp_y(p.y + vy),
            vx,
            vy,
        )
    }

    /// Uniform position in the domain, uniform velocity in `[-vmax, vmax]` per axis.
    pub fn random_particle<R: RngCore>(&self, rng: &mut R) -> Particle {
        // clamped because `min + r * (max - min)` can round past `max`
        let x = self
            .domain
            .clamp_x(self.domain.x_min + rng.random::<f64>() * self.domain.x_range());
        let y = self
            .domain
            .clamp_y(self.domain.y_min + rng.random::<f64>() * self.domain.y_range());
        let vx = (rng.random::<f64>() * 2.0 - 1.0) * self.vmax;
        let vy = (rng.random::<f64>() * 2.0 - 1.0) * self.vmax;
        Particle::new(x, y, vx, vy)
    }
}

/// Swarm slots, their local bests, and the global best for a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct SwarmState {
    particles: Vec<Particle>,
    local_best: Vec<ScoredParticle>,
    global_best: ScoredParticle,
}

impl SwarmState {
    /// Samples `num_particles` particles and seeds every best from the
    /// initial evaluations. The global best is folded left to right, so ties
    /// keep the earliest particle. Returns `None` for an empty swarm.
    pub fn initialize<O, R>(
        objective: &O,
        motion: &Motion,
        num_particles: usize,
        rng: &mut R,
    ) -> Option<Self>
    where
        O: Objective + ?Sized,
        R: RngCore,
    {
        let particles: Vec<Particle> = (0..num_particles)
            .map(|_| motion.random_particle(&mut *rng))
            .collect();
        Self::from_particles(objective, particles)
    }

    /// Builds a swarm from explicit starting particles, evaluating each once.
    pub fn from_particles<O>(objective: &O, particles: Vec<Particle>) -> Option<Self>
    where
        O: Objective + ?Sized,
    {
        let local_best: Vec<ScoredParticle> = particles
            .iter()
            .map(|p| ScoredParticle::new(*p, evaluate_guarded(objective, p)))
            .collect();

        let (first, rest) = local_best.split_first()?;
        let global_best = rest.iter().fold(*first, |best, &candidate| best.min_strict(candidate));

        Some(Self {
            particles,
            local_best,
            global_best,
        })
    }

    /// One sequential sweep over all slots in index order. Returns the number
    /// of objective evaluations performed.
    ///
    /// A global-best improvement made by slot `i` is already visible to slot
    /// `i + 1` within the same sweep.
    pub fn sweep<O, R>(&mut self, objective: &O, motion: &Motion, rng: &mut R) -> usize
    where
        O: Objective + ?Sized,
        R: RngCore,
    {
        let mut evaluations = 0;
        for (slot, local_best) in self.particles.iter_mut().zip(self.local_best.iter_mut()) {
            let r1: f64 = rng.random();
            let r2: f64 = rng.random();

            let moved = motion.step(slot, &local_best.particle, &self.global_best.particle, r1, r2);
            *slot = moved;

            let scored = ScoredParticle::new(moved, evaluate_guarded(objective, &moved));
            evaluations += 1;

            *local_best = local_best.min_strict(scored);
            self.global_best = self.global_best.min_strict(scored);
        }
        evaluations
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn local_best(&self) -> &[ScoredParticle] {
        &self.local_best
    }

    pub fn global_best(&self) -> ScoredParticle {
        self.global_best
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn snapshot(&self, iteration: usize) -> IterationSnapshot {
        IterationSnapshot {
            iteration,
            particles: self.particles.clone(),
            global_best: self.global_best.particle,
            global_best_value: self.global_best.value,
        }
    }
}
