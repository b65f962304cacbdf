use ndarray::Array1;

/// Cell-centered solid/fluid classification. `0.0` for completely solid and
/// `1.0` for not solid; solid cells act as impermeable walls and never
/// participate in projection.
#[derive(Debug, Clone)]
pub struct CollisionMask {
    width: usize,
    height: usize,
    cells: Array1<f32>,
}

impl CollisionMask {
    /// An all-fluid mask.
    pub fn new(width: usize, height: usize) -> CollisionMask {
        CollisionMask {
            width,
            height,
            cells: Array1::from_elem(width * height, 1.0),
        }
    }

    /// Forces the outermost ring of cells to solid. Idempotent.
    pub fn enclose(&mut self) {
        let w = self.width;
        let h = self.height;

        for x in 0..w {
            self.cells[x] = 0.0;
            self.cells[(h - 1) * w + x] = 0.0;
        }

        for y in 0..h {
            self.cells[y * w] = 0.0;
            self.cells[y * w + (w - 1)] = 0.0;
        }
    }

    pub fn set(&mut self, x: usize, y: usize, s: f32) {
        self.cells[y * self.width + x] = s;
    }

    #[inline]
    pub fn is_fluid(&self, i: usize) -> bool {
        self.cells[i] != 0.0
    }

    /// Open flag of a cell neighbor; a missing grid neighbor behaves as
    /// solid.
    #[inline]
    pub fn open(&self, neighbor: Option<usize>) -> f32 {
        neighbor.map_or(0.0, |i| self.cells[i])
    }

    #[inline]
    pub fn cells(&self) -> &Array1<f32> {
        &self.cells
    }
}
