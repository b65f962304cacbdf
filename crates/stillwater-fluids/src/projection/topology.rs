use crate::ProjectionError;

/// Cell-centered neighbor indices of a cell. `None` marks a neighbor that
/// falls outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellNeighbors {
    pub left: Option<usize>,
    pub right: Option<usize>,
    pub up: Option<usize>,
    pub down: Option<usize>,
}

/// Indices into the packed face-velocity array of the four faces bounding a
/// cell: the two horizontal-face velocities on its vertical boundaries and
/// the vertical-face velocities on its top and bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceNeighbors {
    pub left: usize,
    pub right: usize,
    pub up: usize,
    pub down: usize,
}

/// Fixed neighbor-index tables for a `width` x `height` grid, computed once
/// at construction.
///
/// Cells are indexed row-major, `i = y * width + x`. The packed face array
/// is laid out in row blocks of `2 * width + 1` entries: row `y`'s block
/// holds its `width` top vertical-face velocities followed by `width + 1`
/// horizontal-face velocities, with one trailing partial block for the
/// bottom boundary's vertical faces.
#[derive(Debug, Clone)]
pub struct GridTopology {
    width: usize,
    height: usize,
    cells: Vec<CellNeighbors>,
    faces: Vec<FaceNeighbors>,
}

impl GridTopology {
    pub fn new(width: usize, height: usize) -> Result<GridTopology, ProjectionError> {
        if width == 0 || height == 0 {
            return Err(ProjectionError::InvalidDimension { width, height });
        }

        let row = 2 * width + 1;
        let n = width * height;

        let mut cells = Vec::with_capacity(n);
        let mut faces = Vec::with_capacity(n);

        for i in 0..n {
            let x = i % width;
            let y = i / width;

            cells.push(CellNeighbors {
                left: (x > 0).then(|| i - 1),
                right: (x < width - 1).then(|| i + 1),
                up: (y > 0).then(|| i - width),
                down: (y < height - 1).then(|| i + width),
            });

            let up = row * y + x;
            let left = row * y + x + width + 1;

            faces.push(FaceNeighbors {
                left,
                right: left + 1,
                up,
                down: up + row,
            });
        }

        Ok(GridTopology {
            width,
            height,
            cells,
            faces,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Length of the packed face-velocity array: one full row block per grid
    /// row plus the bottom boundary's vertical faces. Every table entry in
    /// `faces` is a valid index below this bound.
    #[inline]
    pub fn face_count(&self) -> usize {
        (2 * self.width + 1) * self.height + self.width
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn cell_neighbors(&self, i: usize) -> CellNeighbors {
        self.cells[i]
    }

    #[inline]
    pub fn face_neighbors(&self, i: usize) -> FaceNeighbors {
        self.faces[i]
    }
}
