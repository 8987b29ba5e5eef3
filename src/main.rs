//! # Dangle
//!
//! Headless driver for the dangle simulation. Runs the chain for a number of
//! simulated seconds at a fixed frame rate, logs progress through `tracing`,
//! and prints where every sphere ended up.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dangle::{
    run_frames, DangleConfig, FrameSnapshot, HeadlessClock, Simulation, TracingObserver,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dangle", about = "Simulate a dangling chain without a window")]
struct Args {
    /// Simulated seconds to run.
    #[arg(long, default_value_t = 10.0)]
    seconds: f64,

    /// Rendered frames per second; frame deltas are 1/fps.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// JSON file overriding any subset of the configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Relaxation sweeps per substep.
    #[arg(long)]
    iterations: Option<usize>,

    /// Cap on substeps per frame.
    #[arg(long)]
    max_substeps: Option<usize>,

    /// Log the tail position every N frames (0 disables).
    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// Print the final frame as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn load_config(args: &Args) -> Result<DangleConfig<f32>> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => DangleConfig::new(),
    };
    if let Some(iterations) = args.iterations {
        config.constraint_iterations = iterations;
    }
    if args.max_substeps.is_some() {
        config.max_substeps_per_frame = args.max_substeps;
    }
    Ok(config)
}

fn print_table(frame: &FrameSnapshot<f32>) {
    println!("{:>4} {:>10} {:>10} {:>10}", "idx", "x", "y", "z");
    for (i, s) in frame.particles.iter().enumerate() {
        println!("{i:>4} {:>10.4} {:>10.4} {:>10.4}", s.center.x, s.center.y, s.center.z);
    }
    let o = frame.obstacle.center;
    println!(" obs {:>10.4} {:>10.4} {:>10.4}", o.x, o.y, o.z);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.fps > 0.0, "--fps must be positive");
    anyhow::ensure!(args.seconds >= 0.0, "--seconds must not be negative");

    let config = load_config(&args)?;
    let mut sim = Simulation::new(config).context("invalid configuration")?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let frames = (args.seconds * args.fps).round() as usize;
    #[allow(clippy::cast_possible_truncation)]
    let delta = (1.0 / args.fps) as f32;
    let mut clock = HeadlessClock::fixed_rate(delta, frames);

    tracing::info!(frames, delta, "starting headless run");

    let mut observer = TracingObserver::new();
    let mut presented = 0u64;
    let mut last = sim.snapshot();
    let mut sink = |frame: &FrameSnapshot<f32>| {
        presented += 1;
        if args.report_every > 0 && presented % args.report_every == 0 {
            if let Some(tail) = frame.particles.last() {
                tracing::info!(
                    frame = presented,
                    x = tail.center.x,
                    y = tail.center.y,
                    z = tail.center.z,
                    "tail position"
                );
            }
        }
        last = frame.clone();
    };

    let summary = run_frames(&mut sim, &mut clock, &mut sink, &mut observer)?;

    tracing::info!(
        frames = summary.frames,
        substeps = summary.substeps,
        contacts = observer.contacts,
        degenerate = observer.degenerate,
        dropped = observer.dropped,
        "run finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&last)?);
    } else {
        print_table(&last);
    }

    Ok(())
}
