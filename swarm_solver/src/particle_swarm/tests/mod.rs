use std::cell::Cell;
use std::time::Duration;

use rand_core::RngCore;

use crate::prelude::*;

mod invariants;

/// Every `random::<f64>()` draw from this stream is `0.5`.
pub struct HalfRng;

impl RngCore for HalfRng {
    fn next_u32(&mut self) -> u32 {
        1 << 31
    }
    fn next_u64(&mut self) -> u64 {
        1 << 63
    }
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0x80);
    }
}

/// Counts how often it is evaluated.
pub struct CountingSphere {
    pub calls: Cell<usize>,
}

impl CountingSphere {
    pub fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }
}

impl Objective for CountingSphere {
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        self.calls.set(self.calls.get() + 1);
        x * x + y * y
    }
    fn x_min(&self) -> f64 {
        -5.12
    }
    fn x_max(&self) -> f64 {
        5.12
    }
    fn y_min(&self) -> f64 {
        -5.12
    }
    fn y_max(&self) -> f64 {
        5.12
    }
}

/// Config with no observer pause so observed tests stay fast.
pub fn quick_config(num_particles: usize, num_iterations: usize) -> PsoConfig {
    PsoConfig::default()
        .with_num_particles(num_particles)
        .with_num_iterations(num_iterations)
        .with_observer_pause(Duration::ZERO)
}

pub fn sphere() -> FnObjective<impl Fn(f64, f64) -> f64 + Clone> {
    FnObjective::new(Domain::square(-5.12, 5.12).unwrap(), |x, y| x * x + y * y)
}
