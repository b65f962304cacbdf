use ndarray::Array1;

/// Staggered face-velocity storage.
///
/// Both horizontal and vertical face components live in the single packed
/// `uv` array, addressed through [`FaceNeighbors`](super::topology::FaceNeighbors)
/// indices. The same-shaped `uv_star` buffer is reserved for a
/// double-buffered update mode; the in-place relaxation sweep never touches
/// it.
#[derive(Debug, Clone)]
pub struct VelocityField {
    uv: Array1<f32>,
    pub uv_star: Array1<f32>,
}

impl VelocityField {
    pub fn new(face_count: usize) -> VelocityField {
        VelocityField {
            uv: Array1::zeros(face_count),
            uv_star: Array1::zeros(face_count),
        }
    }

    #[inline]
    pub fn uv(&self) -> &Array1<f32> {
        &self.uv
    }

    #[inline]
    pub fn uv_mut(&mut self) -> &mut Array1<f32> {
        &mut self.uv
    }
}
