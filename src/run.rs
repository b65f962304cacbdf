use std::error::Error;

use glam::Vec2;
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use stillwater_fluids::projection::d2::{ProjectionFluid2D, ProjectionFluid2DParams};
use stillwater_fluids::sim::Simulator;
use stillwater_io::encode::FluidDataEncoder;

use crate::Args;

pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    if args.width < 4 || args.height < 4 {
        return Err(Box::from("grid must be at least 4x4"));
    }

    let fluid = ProjectionFluid2D::new(args.density, args.width, args.height, args.spacing)?;
    let params = ProjectionFluid2DParams {
        sub_steps: args.sub_steps,
        over_relaxation: args.over_relaxation,
    };
    let mut sim = Simulator::new(fluid, params);

    if !args.no_obstacle {
        carve_circle(&mut sim.fluid);
    }

    let mut encoder = match &args.output {
        Some(path) => {
            let mut encoder = FluidDataEncoder::new(path.clone(), args.frames as u64)?;
            encoder.encode_metadata(args.width as u32, args.height as u32, args.spacing)?;
            Some(encoder)
        }
        None => None,
    };

    let dt = 1.0 / args.fps as f32;

    let bar_template =
        "Projecting {spinner:.green} [{elapsed}] [{bar:50.white/white}] {pos}/{len} ({eta})";
    let style = ProgressStyle::with_template(bar_template)?
        .progress_chars("=> ")
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    let progress = ProgressBar::new(args.frames as u64).with_style(style);

    for _frame in (0..args.frames).progress_with(progress) {
        inject_jet(&mut sim.fluid, 2.0);
        sim.step(dt)?;

        if let Some(encoder) = encoder.as_mut() {
            encoder.encode_frame(&sim.fluid)?;
        }
    }

    println!("residual divergence: {:.3e}", sim.fluid.max_divergence());

    Ok(())
}

/// Marks a circular blob of cells in the middle of the channel as solid.
fn carve_circle(fluid: &mut ProjectionFluid2D) {
    let size = fluid.size();
    let center = Vec2::new(size.x as f32 / 2.0, size.y as f32 / 2.0);
    let radius = size.y as f32 / 6.0;

    for y in 1..size.y as usize - 1 {
        for x in 1..size.x as usize - 1 {
            let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;

            if d.length_squared() < radius * radius {
                fluid.set_solid(x, y, 0.0);
            }
        }
    }
}

/// Drives a band of faces on the left wall of the channel with a fixed
/// inflow velocity.
fn inject_jet(fluid: &mut ProjectionFluid2D, speed: f32) {
    let size = fluid.size();
    let h = size.y as usize;

    for y in h / 3..2 * h / 3 {
        let face = fluid.topology().face_neighbors(fluid.topology().idx(1, y)).left;
        fluid.uv_mut()[face] = speed;
    }
}
