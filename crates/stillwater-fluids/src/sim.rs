use crate::{Fluid, ProjectionError};

/// Owns a fluid and its solver parameters, and drives discrete time steps.
pub struct Simulator<F: Fluid> {
    /// The fluid being stepped.
    pub fluid: F,
    /// The parameters for this simulator's fluid.
    params: F::Params,
}

impl<F: Fluid> Simulator<F> {
    #[inline(always)]
    pub fn new(fluid: F, params: F::Params) -> Self {
        Self { fluid, params }
    }

    #[inline(always)]
    pub fn params(&self) -> &F::Params {
        &self.params
    }

    #[inline(always)]
    pub fn params_mut(&mut self) -> &mut F::Params {
        &mut self.params
    }

    /// Advances the fluid by `dt`. Fails before any state is touched if
    /// `dt` is not positive.
    pub fn step(&mut self, dt: f32) -> Result<(), ProjectionError> {
        self.fluid.step(dt, &self.params)
    }
}
