//! Standard two-variable test functions, each with the domain it is usually
//! searched over.

use std::{
    f64::consts::{E, PI},
    str::FromStr,
};

use derive_more::Display;

use crate::prelude::*;

macro_rules! square_domain {
    ($name:ident, $min:expr, $max:expr) => {
        impl $name {
            pub const DOMAIN: (f64, f64, f64, f64) = ($min, $max, $min, $max);
        }
    };
}

macro_rules! impl_objective {
    ($name:ident, |$x:ident, $y:ident| $body:expr) => {
        impl Objective for $name {
            fn evaluate(&self, $x: f64, $y: f64) -> f64 {
                $body
            }
            fn x_min(&self) -> f64 {
                Self::DOMAIN.0
            }
            fn x_max(&self) -> f64 {
                Self::DOMAIN.1
            }
            fn y_min(&self) -> f64 {
                Self::DOMAIN.2
            }
            fn y_max(&self) -> f64 {
                Self::DOMAIN.3
            }
        }
    };
}

/// `(x-3.14)^2 + (y-2.72)^2 + sin(3x+1.41) + sin(4y-1.73)` on `[0, 5]^2`.
/// Minimum near `(3.182, 3.131)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftedSinusoid;
square_domain!(ShiftedSinusoid, 0.0, 5.0);
impl_objective!(ShiftedSinusoid, |x, y| (x - 3.14).powi(2)
    + (y - 2.72).powi(2)
    + (3.0 * x + 1.41).sin()
    + (4.0 * y - 1.73).sin());

/// `x^2 + y^2`, minimum 0 at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere;
square_domain!(Sphere, -5.12, 5.12);
impl_objective!(Sphere, |x, y| x * x + y * y);

/// `(1-x)^2 + 100(y-x^2)^2`, minimum 0 at `(1, 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rosenbrock;
square_domain!(Rosenbrock, -5.0, 5.0);
impl_objective!(Rosenbrock, |x, y| (1.0 - x).powi(2) + 100.0 * (y - x * x).powi(2));

/// Highly multimodal; minimum 0 at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rastrigin;
square_domain!(Rastrigin, -5.12, 5.12);
impl_objective!(Rastrigin, |x, y| {
    let a = 10.0;
    2.0 * a + (x * x - a * (2.0 * PI * x).cos()) + (y * y - a * (2.0 * PI * y).cos())
});

/// Nearly flat outer region with a deep hole; minimum 0 at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ackley;
square_domain!(Ackley, -5.0, 5.0);
impl_objective!(Ackley, |x, y| {
    let mean_sq = 0.5 * (x * x + y * y);
    let mean_cos = 0.5 * ((2.0 * PI * x).cos() + (2.0 * PI * y).cos());
    -20.0 * (-0.2 * mean_sq.sqrt()).exp() - mean_cos.exp() + E + 20.0
});

/// Four minima of value 0, e.g. `(3, 2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Himmelblau;
square_domain!(Himmelblau, -5.0, 5.0);
impl_objective!(Himmelblau, |x, y| (x * x + y - 11.0).powi(2) + (x + y * y - 7.0).powi(2));

/// Minimum 0 at `(3, 0.5)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Beale;
square_domain!(Beale, -4.5, 4.5);
impl_objective!(Beale, |x, y| (1.5 - x + x * y).powi(2)
    + (2.25 - x + x * y * y).powi(2)
    + (2.625 - x + x * y * y * y).powi(2));

/// Minimum 0 at `(1, 3)`. Searched over a deliberately wide box.
#[derive(Debug, Clone, Copy, Default)]
pub struct Booth;
square_domain!(Booth, -100.0, 100.0);
impl_objective!(Booth, |x, y| (x + 2.0 * y - 7.0).powi(2) + (2.0 * x + y - 5.0).powi(2));

/// Minimum 0 at `(-10, 1)`, at the bottom of a narrow curved ridge.
#[derive(Debug, Clone, Copy, Default)]
pub struct BukinN6;
impl BukinN6 {
    pub const DOMAIN: (f64, f64, f64, f64) = (-15.0, -5.0, -3.0, 3.0);
}
impl_objective!(BukinN6, |x, y| 100.0 * (y - 0.01 * x * x).abs().sqrt()
    + 0.01 * (x + 10.0).abs());

/// Two global minima of about -1.0316 at `(±0.0898, ∓0.7126)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SixHumpCamel;
impl SixHumpCamel {
    pub const DOMAIN: (f64, f64, f64, f64) = (-3.0, 3.0, -2.0, 2.0);
}
impl_objective!(SixHumpCamel, |x, y| (4.0 - 2.1 * x * x + x.powi(4) / 3.0) * x * x
    + x * y
    + (-4.0 + 4.0 * y * y) * y * y);

/// Names the catalog entries, e.g. for command-line selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Benchmark {
    #[display("shifted-sinusoid")]
    ShiftedSinusoid,
    #[display("sphere")]
    Sphere,
    #[display("rosenbrock")]
    Rosenbrock,
    #[display("rastrigin")]
    Rastrigin,
    #[display("ackley")]
    Ackley,
    #[display("himmelblau")]
    Himmelblau,
    #[display("beale")]
    Beale,
    #[display("booth")]
    Booth,
    #[display("bukin-n6")]
    BukinN6,
    #[display("six-hump-camel")]
    SixHumpCamel,
}

impl Benchmark {
    pub const ALL: [Benchmark; 10] = [
        Benchmark::ShiftedSinusoid,
        Benchmark::Sphere,
        Benchmark::Rosenbrock,
        Benchmark::Rastrigin,
        Benchmark::Ackley,
        Benchmark::Himmelblau,
        Benchmark::Beale,
        Benchmark::Booth,
        Benchmark::BukinN6,
        Benchmark::SixHumpCamel,
    ];

    pub fn objective(self) -> Box<dyn Objective> {
        match self {
            Benchmark::ShiftedSinusoid => Box::new(ShiftedSinusoid),
            Benchmark::Sphere => Box::new(Sphere),
            Benchmark::Rosenbrock => Box::new(Rosenbrock),
            Benchmark::Rastrigin => Box::new(Rastrigin),
            Benchmark::Ackley => Box::new(Ackley),
            Benchmark::Himmelblau => Box::new(Himmelblau),
            Benchmark::Beale => Box::new(Beale),
            Benchmark::Booth => Box::new(Booth),
            Benchmark::BukinN6 => Box::new(BukinN6),
            Benchmark::SixHumpCamel => Box::new(SixHumpCamel),
        }
    }

    /// A known global minimizer `(x, y)` and its value.
    pub fn known_minimum(self) -> ((f64, f64), f64) {
        match self {
            Benchmark::ShiftedSinusoid => {
                let p = (3.182, 3.131);
                (p, ShiftedSinusoid.evaluate(p.0, p.1))
            }
            Benchmark::Sphere => ((0.0, 0.0), 0.0),
            Benchmark::Rosenbrock => ((1.0, 1.0), 0.0),
            Benchmark::Rastrigin => ((0.0, 0.0), 0.0),
            Benchmark::Ackley => ((0.0, 0.0), 0.0),
            Benchmark::Himmelblau => ((3.0, 2.0), 0.0),
            Benchmark::Beale => ((3.0, 0.5), 0.0),
            Benchmark::Booth => ((1.0, 3.0), 0.0),
            Benchmark::BukinN6 => ((-10.0, 1.0), 0.0),
            Benchmark::SixHumpCamel => ((0.0898, -0.7126), -1.0316),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown benchmark `{0}`")]
pub struct UnknownBenchmark(pub String);

impl FromStr for Benchmark {
    type Err = UnknownBenchmark;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Benchmark::ALL
            .into_iter()
            .find(|b| b.to_string() == wanted)
            .ok_or_else(|| UnknownBenchmark(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Benchmark::Sphere, 1e-12; "sphere")]
    #[test_case(Benchmark::Rosenbrock, 1e-12; "rosenbrock")]
    #[test_case(Benchmark::Rastrigin, 1e-12; "rastrigin")]
    #[test_case(Benchmark::Ackley, 1e-12; "ackley")]
    #[test_case(Benchmark::Himmelblau, 1e-12; "himmelblau")]
    #[test_case(Benchmark::Beale, 1e-12; "beale")]
    #[test_case(Benchmark::Booth, 1e-12; "booth")]
    #[test_case(Benchmark::BukinN6, 1e-12; "bukin n6")]
    #[test_case(Benchmark::SixHumpCamel, 1e-4; "six hump camel")]
    fn test_known_minimum_value(benchmark: Benchmark, eps: f64) {
        let ((x, y), value) = benchmark.known_minimum();
        assert_approx_eq!(benchmark.objective().evaluate(x, y), value, eps);
    }

    #[test]
    fn test_every_domain_is_valid_and_holds_its_minimum() {
        for benchmark in Benchmark::ALL {
            let objective = benchmark.objective();
            let domain = objective.domain().unwrap();
            let ((x, y), _) = benchmark.known_minimum();
            assert!(domain.contains(x, y), "{benchmark}: ({x}, {y}) outside {domain:?}");
        }
    }

    #[test]
    fn test_names_round_trip() {
        for benchmark in Benchmark::ALL {
            assert_eq!(benchmark.to_string().parse::<Benchmark>().unwrap(), benchmark);
        }
        assert_eq!("Bukin_N6".parse::<Benchmark>().unwrap(), Benchmark::BukinN6);
        assert!("griewank".parse::<Benchmark>().is_err());
    }

    #[test]
    fn test_shifted_sinusoid_minimum_beats_nearby_points() {
        let ((x, y), best) = Benchmark::ShiftedSinusoid.known_minimum();
        for (dx, dy) in [(0.05, 0.0), (-0.05, 0.0), (0.0, 0.05), (0.0, -0.05)] {
            assert!(ShiftedSinusoid.evaluate(x + dx, y + dy) > best);
        }
    }

    #[test]
    fn test_swarm_finds_himmelblau_minimum() {
        let config = PsoConfig::new(40, 150, 0.729, 1.49445, 1.49445);
        let mut pso = ParticleSwarm::with_seed(config, Himmelblau, 2024);
        let best = pso.run(None).unwrap().unwrap();
        assert!(Himmelblau.evaluate(best.x, best.y) < 1e-6);
    }
}
