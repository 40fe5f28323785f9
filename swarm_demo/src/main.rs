use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use swarm_solver::prelude::*;

/// Minimize one of the catalog benchmark functions with a particle swarm.
#[derive(Parser, Debug)]
#[command(name = "swarm_demo")]
#[command(version)]
struct Cli {
    /// Benchmark function to minimize (see --list)
    #[arg(short, long, default_value = "shifted-sinusoid")]
    function: Benchmark,

    /// Swarm size
    #[arg(short = 'n', long, default_value_t = 10)]
    particles: usize,

    /// Number of update sweeps
    #[arg(short, long, default_value_t = 100)]
    iterations: usize,

    /// Inertia weight
    #[arg(short = 'w', long, default_value_t = 0.5)]
    inertia: f64,

    /// Cognitive coefficient
    #[arg(long, default_value_t = 0.5)]
    c1: f64,

    /// Social coefficient
    #[arg(long, default_value_t = 0.5)]
    c2: f64,

    /// Per-axis velocity cap; derived from the domain when omitted
    #[arg(long)]
    vmax: Option<f64>,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the per-iteration progress table to stdout
    #[arg(short, long, default_value_t = false)]
    trace: bool,

    /// Pause after each traced iteration, in milliseconds
    #[arg(long, default_value_t = 100)]
    pause_ms: u64,

    /// List the available benchmark functions and exit
    #[arg(long, default_value_t = false)]
    list: bool,
}

impl Cli {
    fn pso_config(&self) -> PsoConfig {
        let config = PsoConfig::new(self.particles, self.iterations, self.inertia, self.c1, self.c2)
            .with_observer_pause(Duration::from_millis(self.pause_ms));
        match self.vmax {
            Some(vmax) => config.with_vmax(vmax),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.list {
        for benchmark in Benchmark::ALL {
            let domain = benchmark.objective().domain()?;
            let name = benchmark.to_string();
            println!(
                "{name:<18} x in [{}, {}], y in [{}, {}]",
                domain.x_min, domain.x_max, domain.y_min, domain.y_max
            );
        }
        return Ok(());
    }

    info!(function = %cli.function, "starting particle swarm");

    let config = cli.pso_config();
    let objective = cli.function.objective();
    let mut pso = match cli.seed {
        Some(seed) => ParticleSwarm::with_seed(config, objective, seed),
        None => ParticleSwarm::new(config, objective),
    };

    let log = {
        let mut progress = ProgressLog::new(std::io::stdout().lock());
        let observer: Option<&mut dyn IterationObserver> =
            if cli.trace { Some(&mut progress) } else { None };
        pso.solve(observer)?
    };

    let Some(log) = log else {
        println!(
            "\nEmpty swarm ({} particles): no solution to report",
            pso.config().num_particles
        );
        return Ok(());
    };

    let best = log.best_particle();
    println!(
        "\nBest solution: {best} -> {}",
        pso.objective().evaluate(best.x, best.y)
    );
    println!(
        "Improvement over the initial sample: {:.6e} in {} evaluations",
        log.improvement(),
        log.evaluations
    );

    let ((x, y), value) = cli.function.known_minimum();
    println!("Known minimum: ({x}, {y}) -> {value}");

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
