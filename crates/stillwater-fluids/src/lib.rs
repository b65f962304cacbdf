use thiserror::Error;

pub mod projection;
pub mod sim;

/// A fluid that can be advanced by one discrete time step.
pub trait Fluid {
    type Params;

    fn step(&mut self, dt: f32, params: &Self::Params) -> Result<(), ProjectionError>;
}

#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("time delta must be positive, got {dt}")]
    InvalidTimeDelta { dt: f32 },
}
