use glam::{UVec2, Vec2};
use ndarray::Array1;

use crate::{Fluid, ProjectionError};

use super::{mask::CollisionMask, topology::GridTopology, velocity::VelocityField};

/// A 2D grid fluid driven toward incompressibility by successive
/// over-relaxation of its face velocities.
#[derive(Debug, Clone)]
pub struct ProjectionFluid2D {
    topology: GridTopology,
    mask: CollisionMask,
    velocity: VelocityField,
    /// Cell-centered pressure estimate, derived on the final sweep of each
    /// solve.
    pressure: Array1<f32>,
    /// The density of the fluid, in kg/m³.
    density: f32,
    /// Cell size.
    spacing: f32,
}

impl ProjectionFluid2D {
    pub fn new(
        density: f32,
        width: usize,
        height: usize,
        spacing: f32,
    ) -> Result<ProjectionFluid2D, ProjectionError> {
        let topology = GridTopology::new(width, height)?;

        let mut mask = CollisionMask::new(width, height);
        mask.enclose();

        let velocity = VelocityField::new(topology.face_count());
        let pressure = Array1::zeros(topology.cell_count());

        Ok(ProjectionFluid2D {
            topology,
            mask,
            velocity,
            pressure,
            density,
            spacing,
        })
    }

    #[inline]
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.topology.width() as u32, self.topology.height() as u32)
    }

    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    #[inline]
    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    #[inline]
    pub fn mask(&self) -> &CollisionMask {
        &self.mask
    }

    #[inline]
    pub fn pressure(&self) -> &Array1<f32> {
        &self.pressure
    }

    #[inline]
    pub fn uv(&self) -> &Array1<f32> {
        self.velocity.uv()
    }

    #[inline]
    pub fn uv_mut(&mut self) -> &mut Array1<f32> {
        self.velocity.uv_mut()
    }

    pub fn set_solid(&mut self, x: usize, y: usize, s: f32) {
        self.mask.set(x, y, s);
    }

    /// Local divergence at a cell: positive for net outflow through its
    /// right and bottom faces.
    pub fn cell_divergence(&self, x: usize, y: usize) -> f32 {
        let f = self.topology.face_neighbors(self.topology.idx(x, y));
        let uv = self.velocity.uv();
        -uv[f.up] + uv[f.down] + uv[f.left] - uv[f.right]
    }

    /// Largest divergence magnitude over all fluid cells.
    pub fn max_divergence(&self) -> f32 {
        let uv = self.velocity.uv();
        let mut max = 0.0f32;

        for cell in 0..self.topology.cell_count() {
            if !self.mask.is_fluid(cell) {
                continue;
            }

            let f = self.topology.face_neighbors(cell);
            let div = -uv[f.up] + uv[f.down] + uv[f.left] - uv[f.right];
            max = max.max(div.abs());
        }

        max
    }

    /// Weighted-average velocity at an arbitrary point.
    ///
    /// Extension point for advection schemes; the projection sweep never
    /// calls it. TODO: bilinear interpolation from the four nearest packed
    /// face velocities.
    pub fn sample(&self, _x: f32, _y: f32) -> Vec2 {
        todo!()
    }

    fn solve_incompressibility(&mut self, sub_steps: usize, dt: f32, over_relaxation: f32) {
        self.pressure.fill(0.0);

        let cp = self.density * self.spacing / dt;

        for sweep in 0..=sub_steps {
            let derive_pressure = sweep == sub_steps;

            for cell in 0..self.topology.cell_count() {
                if !self.mask.is_fluid(cell) {
                    continue;
                }

                let n = self.topology.cell_neighbors(cell);
                let s_left = self.mask.open(n.left);
                let s_right = self.mask.open(n.right);
                let s_up = self.mask.open(n.up);
                let s_down = self.mask.open(n.down);
                let s = s_left + s_right + s_up + s_down;

                // A fluid cell walled in on all four sides cannot be
                // projected; leave it untouched.
                if s == 0.0 {
                    continue;
                }

                let f = self.topology.face_neighbors(cell);
                let uv = self.velocity.uv_mut();

                let div = -uv[f.up] + uv[f.down] + uv[f.left] - uv[f.right];
                let corr = (-div / s) * over_relaxation;

                if derive_pressure {
                    self.pressure[cell] = corr * cp;
                }

                uv[f.left] += s_left * corr;
                uv[f.right] -= s_right * corr;
                uv[f.up] -= s_up * corr;
                uv[f.down] += s_down * corr;
            }
        }
    }
}

pub struct ProjectionFluid2DParams {
    /// Extra relaxation sweeps per step. The solver always runs
    /// `sub_steps + 1` sweeps and derives pressure on the last one, so a
    /// zero sub-step fluid still projects once.
    pub sub_steps: usize,
    pub over_relaxation: f32,
}

impl Default for ProjectionFluid2DParams {
    fn default() -> Self {
        Self {
            sub_steps: 100,
            over_relaxation: 1.9,
        }
    }
}

impl Fluid for ProjectionFluid2D {
    type Params = ProjectionFluid2DParams;

    fn step(&mut self, dt: f32, params: &Self::Params) -> Result<(), ProjectionError> {
        if dt <= 0.0 {
            return Err(ProjectionError::InvalidTimeDelta { dt });
        }

        self.solve_incompressibility(params.sub_steps, dt, params.over_relaxation);

        Ok(())
    }
}
