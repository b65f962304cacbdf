use std::path::PathBuf;

use clap::Parser;

mod run;

/// Box-domain pressure projection demo: injects an inflow jet, projects the
/// velocity field every frame, and reports the residual divergence.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Grid width, in cells.
    #[arg(long, default_value_t = 96)]
    width: usize,
    /// Grid height, in cells.
    #[arg(long, default_value_t = 64)]
    height: usize,
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: usize,
    /// Simulated frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Extra relaxation sweeps per step.
    #[arg(long, default_value_t = 100)]
    sub_steps: usize,
    /// Fluid density, in kg/m³.
    #[arg(long, default_value_t = 1000.0)]
    density: f32,
    /// Cell size, in meters.
    #[arg(long, default_value_t = 0.1)]
    spacing: f32,
    /// Successive over-relaxation factor.
    #[arg(long, default_value_t = 1.9)]
    over_relaxation: f32,
    /// Skip carving the circular obstacle into the channel.
    #[arg(long)]
    no_obstacle: bool,
    /// Directory to write field snapshots into.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run::run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
