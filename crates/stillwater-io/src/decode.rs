use std::{fs::File, io::{BufReader, Read}, path::PathBuf};

use thiserror::Error;

use crate::as_bytes::AsBytes;

pub struct FluidDataDecoder {
    /// The path to the directory in which the snapshot data resides.
    path: PathBuf,
    num_frames: u64,
    current_frame: u64,
}

impl FluidDataDecoder {
    pub fn new(path: PathBuf) -> FluidDataDecoder {
        Self {
            path,
            num_frames: 0,
            current_frame: 0,
        }
    }

    fn read_array<const N: usize, R: Read>(reader: &mut R) -> Result<[u8; N], DecodingError> {
        let mut bytes = [0; N];
        reader.read_exact(&mut bytes)?;

        Ok(bytes)
    }

    fn read_section<R: Read>(reader: &mut R) -> Result<Vec<f32>, DecodingError> {
        let len = u64::from_ne_bytes(Self::read_array(reader)?) as usize;

        let mut bytes = vec![0u8; 4 * len];
        reader.read_exact(&mut bytes)?;

        Ok(bytes
            .chunks_exact(4)
            .map(|b| f32::from_bytes(b.try_into().unwrap()))
            .collect())
    }

    fn frame_path(&self, frame: u64) -> PathBuf {
        let max_digits = self.num_frames.saturating_sub(1).checked_ilog10().unwrap_or(0) + 1;
        let zeros = max_digits - (frame.checked_ilog10().unwrap_or(0) + 1);

        self.path.join(format!("{}{frame}.dat", "0".repeat(zeros as usize)))
    }

    pub fn decode_metadata(&mut self) -> Result<FluidMetadata, DecodingError> {
        let path = self.path.join("_meta");
        let mut reader = BufReader::new(File::open(path)?);

        let width = u32::from_ne_bytes(Self::read_array(&mut reader)?);
        let height = u32::from_ne_bytes(Self::read_array(&mut reader)?);
        let spacing = f32::from_bytes(Self::read_array(&mut reader)?);
        let num_frames = u64::from_ne_bytes(Self::read_array(&mut reader)?);

        self.num_frames = num_frames;

        Ok(FluidMetadata {
            width,
            height,
            spacing,
            num_frames,
        })
    }

    pub fn decode_frame(&mut self) -> Result<Option<FieldFrame>, DecodingError> {
        if self.current_frame >= self.num_frames {
            return Ok(None);
        }

        let path = self.frame_path(self.current_frame);
        let mut reader = BufReader::new(File::open(path)?);

        let pressure = Self::read_section(&mut reader)?;
        let uv = Self::read_section(&mut reader)?;
        let mask = Self::read_section(&mut reader)?;

        self.current_frame += 1;

        Ok(Some(FieldFrame { pressure, uv, mask }))
    }

    pub fn reset(&mut self) {
        self.current_frame = 0;
    }
}

pub struct FluidMetadata {
    pub width: u32,
    pub height: u32,
    pub spacing: f32,
    pub num_frames: u64,
}

/// One decoded snapshot: the cell-centered pressure and collision fields and
/// the packed face velocities.
pub struct FieldFrame {
    pub pressure: Vec<f32>,
    pub uv: Vec<f32>,
    pub mask: Vec<f32>,
}

#[derive(Debug, Error)]
pub enum DecodingError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
