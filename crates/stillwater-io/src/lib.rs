use std::io::Write;

use encode::{EncodingError, FluidFrameEncoder};
use stillwater_fluids::projection::d2::ProjectionFluid2D;

pub mod as_bytes;
pub mod decode;
pub mod encode;

/// Writes a fluid's field state as the sections of one snapshot frame.
pub trait EncodeFields {
    fn encode_state<W: Write>(&self, encoder: &mut FluidFrameEncoder<W>) -> Result<(), EncodingError>;
}

impl EncodeFields for ProjectionFluid2D {
    fn encode_state<W: std::io::Write>(&self, encoder: &mut FluidFrameEncoder<W>) -> Result<(), EncodingError> {
        encoder.encode_section(self.pressure().len(), self.pressure().iter().copied())?;
        encoder.encode_section(self.uv().len(), self.uv().iter().copied())?;
        encoder.encode_section(self.mask().cells().len(), self.mask().cells().iter().copied())?;

        Ok(())
    }
}
