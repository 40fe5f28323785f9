use derive_more::Display;

/// A candidate solution: position `(x, y)` and velocity `(vx, vy)`.
///
/// Particles are plain values. The optimizer never edits one in place; each
/// move builds a new `Particle` and replaces the swarm slot with it.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
#[display("({x}, {y})")]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Particle {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self { x, y, vx, vy }
    }

    /// A particle at rest.
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.vx, self.vy)
    }
}

/// A particle paired with the objective value it was evaluated to.
///
/// Used for both the per-slot local best and the swarm's global best; `value`
/// is always the (sanitized) evaluation of `particle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredParticle {
    pub particle: Particle,
    pub value: f64,
}

impl ScoredParticle {
    pub fn new(particle: Particle, value: f64) -> Self {
        Self { particle, value }
    }

    /// Strict improvement only; ties keep the incumbent.
    pub fn improves_on(&self, incumbent: &ScoredParticle) -> bool {
        self.value < incumbent.value
    }

    /// Returns `candidate` if it strictly improves on `self`, otherwise `self`.
    pub fn min_strict(self, candidate: ScoredParticle) -> ScoredParticle {
        if candidate.improves_on(&self) {
            candidate
        } else {
            self
        }
    }
}
