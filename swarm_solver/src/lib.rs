pub mod error;
pub mod objective;
pub mod particle_swarm;

pub mod prelude {
    pub use crate::{
        assert_approx_eq,
        error::*,
        objective::{
            Axis, Domain, FnObjective, Objective,
            benchmarks::{self, Benchmark},
        },
        particle_swarm::{
            ParticleSwarm,
            config::PsoConfig,
            observer::*,
            particle::{Particle, ScoredParticle},
            run_log::PsoRunLog,
        },
    };

    pub use rand;
}

#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {{
        let eps = 1.0e-9;
        let (a, b) = (&$a, &$b);
        assert!(
            (*a - *b).abs() < eps,
            "assertion failed: `(left !== right)` \
             (left: `{:?}`, right: `{:?}`, expect diff: `{:?}`, real diff: `{:?}`)",
            *a,
            *b,
            eps,
            (*a - *b).abs()
        );
    }};
    ($a:expr, $b:expr, $eps:expr) => {{
        let (a, b) = (&$a, &$b);
        let eps = $eps;
        assert!(
            (*a - *b).abs() < eps,
            "assertion failed: `(left !== right)` \
             (left: `{:?}`, right: `{:?}`, expect diff: `{:?}`, real diff: `{:?}`)",
            *a,
            *b,
            eps,
            (*a - *b).abs()
        );
    }};
}
