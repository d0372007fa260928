use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vectorverse::{Config, IntegrationMethod, Scenario, Simulation};

/// Runs a sandbox scenario headless and reports how energy evolves.
#[derive(Parser, Debug)]
#[command(name = "sandbox_runner", version)]
struct Args {
    /// Scenario to load: sandbox, projectile-motion, elastic-collisions,
    /// harmonic-motion or inclined-plane.
    #[arg(short, long, default_value = "sandbox")]
    scenario: Scenario,

    /// Wall-clock seconds to simulate.
    #[arg(short = 't', long, default_value_t = 5.0)]
    seconds: f64,

    /// Frames per second fed to the driver.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// TOML configuration file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the seed used for body colours.
    #[arg(long)]
    seed: Option<u64>,

    /// Overrides the integration method.
    #[arg(short, long)]
    integrator: Option<IntegrationMethod>,

    /// Log an energy line every this many frames.
    #[arg(long, default_value_t = 30)]
    report_every: usize,
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(seed) = args.seed {
        config.simulation.seed = seed;
    }
    if let Some(method) = args.integrator {
        config.engine.integration_method = method;
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.fps > 0.0, "fps must be positive");
    anyhow::ensure!(args.seconds >= 0.0, "seconds cannot be negative");

    let config = load_config(&args)?;
    let mut sim = Simulation::new(config).context("building simulation")?;
    sim.load_scenario(args.scenario);

    info!(
        scenario = %args.scenario,
        bodies = sim.engine().len(),
        method = %sim.engine().integration_method(),
        "starting run"
    );

    let frame_dt = 1.0 / args.fps;
    let frames = (args.seconds * args.fps).round() as usize;
    let mut steps = 0;
    for frame in 0..frames {
        steps += sim.advance(frame_dt);
        if args.report_every > 0 && frame % args.report_every == 0 {
            if let Some(sample) = sim.history().latest() {
                info!(
                    frame,
                    time = format_args!("{:.3}", sample.time),
                    kinetic = format_args!("{:.1}", sample.kinetic),
                    potential = format_args!("{:.1}", sample.potential),
                    total = format_args!("{:.1}", sample.total),
                    "energy"
                );
            }
        }
    }

    let engine = sim.engine();
    info!(
        frames,
        steps,
        elapsed = format_args!("{:.3}", sim.elapsed()),
        total_energy = format_args!("{:.1}", engine.total_energy()),
        peak_energy = format_args!("{:.1}", sim.history().max_total()),
        "run finished"
    );
    for (handle, body) in engine.iter() {
        info!(
            %handle,
            x = format_args!("{:.2}", body.position.x),
            y = format_args!("{:.2}", body.position.y),
            vx = format_args!("{:.2}", body.velocity.x),
            vy = format_args!("{:.2}", body.velocity.y),
            "final state"
        );
    }
    Ok(())
}
