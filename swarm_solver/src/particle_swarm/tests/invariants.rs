use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use super::*;
use crate::particle_swarm::swarm_state::{Motion, SwarmState, sanitize_value};

fn rastrigin_on(domain: Domain) -> FnObjective<impl Fn(f64, f64) -> f64> {
    FnObjective::new(domain, |x, y| {
        20.0 + (x * x - 10.0 * (2.0 * std::f64::consts::PI * x).cos())
            + (y * y - 10.0 * (2.0 * std::f64::consts::PI * y).cos())
    })
}

fn domain_strategy() -> impl Strategy<Value = Domain> {
    (-50.0_f64..50.0, 0.0_f64..20.0, -50.0_f64..50.0, 0.0_f64..20.0)
        .prop_map(|(x0, dx, y0, dy)| Domain::new(x0, x0 + dx, y0, y0 + dy).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every particle stays inside the domain and under the
    /// velocity cap after every sweep.
    #[test]
    fn prop_positions_and_velocities_stay_clamped(
        seed in any::<u64>(),
        domain in domain_strategy(),
        num_particles in 1_usize..25,
        inertia in -1.0_f64..1.5,
        cognitive in 0.0_f64..2.5,
        social in 0.0_f64..2.5,
        vmax in prop::option::of(0.0_f64..10.0),
    ) {
        let objective = rastrigin_on(domain);
        let mut config = PsoConfig::default().with_coefficients(inertia, cognitive, social);
        config.vmax = vmax;
        let motion = Motion::new(&config, domain);

        let mut rng = StdRng::seed_from_u64(seed);
        let mut swarm = SwarmState::initialize(&objective, &motion, num_particles, &mut rng).unwrap();

        for _ in 0..30 {
            swarm.sweep(&objective, &motion, &mut rng);
            for p in swarm.particles() {
                prop_assert!(domain.contains(p.x, p.y), "{:?} outside {:?}", p, domain);
                prop_assert!(p.vx.abs() <= motion.vmax, "vx={} vmax={}", p.vx, motion.vmax);
                prop_assert!(p.vy.abs() <= motion.vmax, "vy={} vmax={}", p.vy, motion.vmax);
            }
        }
    }

    /// Property: stored best values are exactly the evaluations of the stored
    /// best particles, and the global best is no worse than any local best.
    #[test]
    fn prop_best_tracking_matches_evaluations(
        seed in any::<u64>(),
        num_particles in 1_usize..20,
        sweeps in 0_usize..40,
    ) {
        let objective = rastrigin_on(Domain::square(-5.12, 5.12).unwrap());
        let motion = Motion::new(&PsoConfig::default(), objective.domain().unwrap());
        let mut rng = StdRng::seed_from_u64(seed);
        let mut swarm = SwarmState::initialize(&objective, &motion, num_particles, &mut rng).unwrap();

        for _ in 0..sweeps {
            swarm.sweep(&objective, &motion, &mut rng);

            let global = swarm.global_best();
            prop_assert_eq!(global.value, sanitize_value(objective.evaluate_particle(&global.particle)));
            for local in swarm.local_best() {
                prop_assert_eq!(local.value, sanitize_value(objective.evaluate_particle(&local.particle)));
                prop_assert!(global.value <= local.value);
            }
        }
    }

    /// Property: the global best value never gets worse from one iteration to
    /// the next, and is never worse than the initial sample's best.
    #[test]
    fn prop_global_best_is_non_increasing(
        seed in any::<u64>(),
        num_particles in 1_usize..20,
        num_iterations in 0_usize..60,
    ) {
        let objective = rastrigin_on(Domain::square(-5.12, 5.12).unwrap());
        let mut pso = ParticleSwarm::with_seed(quick_config(num_particles, num_iterations), objective, seed);
        let log = pso.solve(None).unwrap().unwrap();

        prop_assert_eq!(log.cost_history.len(), num_iterations);
        let mut previous = log.initial_best_value;
        for &value in &log.cost_history {
            prop_assert!(value <= previous, "{} > {}", value, previous);
            previous = value;
        }
        prop_assert_eq!(previous, log.best_value());
    }
}
