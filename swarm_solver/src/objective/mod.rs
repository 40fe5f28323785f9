use derive_more::Display;

use crate::prelude::*;

pub mod benchmarks;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Axis {
    #[display("x")]
    X,
    #[display("y")]
    Y,
}

/// A function of two real variables to be minimized, together with the
/// rectangle it is searched over.
///
/// The optimizer only ever calls `evaluate` and reads the four bounds; it
/// never inspects the function itself. Bounds must be finite and satisfy
/// `x_min <= x_max` and `y_min <= y_max`, otherwise [`Objective::domain`]
/// reports [`PsoError::InvalidDomain`].
///
/// `evaluate` may return NaN or an infinity, or panic; the swarm scores all
/// three as `+inf` and keeps going. Panics are caught with `catch_unwind`;
/// under `panic = "abort"` they still terminate the process.
pub trait Objective {
    fn evaluate(&self, x: f64, y: f64) -> f64;

    fn x_min(&self) -> f64;
    fn x_max(&self) -> f64;
    fn y_min(&self) -> f64;
    fn y_max(&self) -> f64;

    fn evaluate_particle(&self, p: &Particle) -> f64 {
        self.evaluate(p.x, p.y)
    }

    /// Reads and validates the bounds.
    fn domain(&self) -> Result<Domain, PsoError> {
        Domain::new(self.x_min(), self.x_max(), self.y_min(), self.y_max())
    }
}

impl<T: Objective + ?Sized> Objective for &T {
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        (**self).evaluate(x, y)
    }
    fn x_min(&self) -> f64 {
        (**self).x_min()
    }
    fn x_max(&self) -> f64 {
        (**self).x_max()
    }
    fn y_min(&self) -> f64 {
        (**self).y_min()
    }
    fn y_max(&self) -> f64 {
        (**self).y_max()
    }
}

impl<T: Objective + ?Sized> Objective for Box<T> {
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        (**self).evaluate(x, y)
    }
    fn x_min(&self) -> f64 {
        (**self).x_min()
    }
    fn x_max(&self) -> f64 {
        (**self).x_max()
    }
    fn y_min(&self) -> f64 {
        (**self).y_min()
    }
    fn y_max(&self) -> f64 {
        (**self).y_max()
    }
}

/// Validated search rectangle `[x_min, x_max] × [y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Domain {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, PsoError> {
        Self::check_axis(Axis::X, x_min, x_max)?;
        Self::check_axis(Axis::Y, y_min, y_max)?;
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Bounds must be ordered and the range `max - min` finite; infinite or
    /// overflowing ranges would make the derived velocity cap non-finite.
    fn check_axis(axis: Axis, min: f64, max: f64) -> Result<(), PsoError> {
        // negated `<=` also rejects NaN bounds
        if !(min <= max) || !(max - min).is_finite() {
            return Err(PsoError::InvalidDomain { axis, min, max });
        }
        Ok(())
    }

    /// Same bounds on both axes.
    pub fn square(min: f64, max: f64) -> Result<Self, PsoError> {
        Self::new(min, max, min, max)
    }

    pub fn x_range(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_range(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Velocity cap used when none is configured: the wider of the two ranges.
    pub fn default_vmax(&self) -> f64 {
        self.x_range().max(self.y_range())
    }

    pub fn clamp_x(&self, x: f64) -> f64 {
        x.clamp(self.x_min, self.x_max)
    }

    pub fn clamp_y(&self, y: f64) -> f64 {
        y.clamp(self.y_min, self.y_max)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}

/// Adapts a closure and an explicit domain into an [`Objective`].
#[derive(Clone)]
pub struct FnObjective<F>
where
    F: Fn(f64, f64) -> f64,
{
    f: F,
    domain: Domain,
}

impl<F> FnObjective<F>
where
    F: Fn(f64, f64) -> f64,
{
    pub fn new(domain: Domain, f: F) -> Self {
        Self { f, domain }
    }
}

impl<F> Objective for FnObjective<F>
where
    F: Fn(f64, f64) -> f64,
{
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        (self.f)(x, y)
    }
    fn x_min(&self) -> f64 {
        self.domain.x_min
    }
    fn x_max(&self) -> f64 {
        self.domain.x_max
    }
    fn y_min(&self) -> f64 {
        self.domain.y_min
    }
    fn y_max(&self) -> f64 {
        self.domain.y_max
    }
}
