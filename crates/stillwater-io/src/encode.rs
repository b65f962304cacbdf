use std::{fs::File, io::{BufWriter, Write}, path::PathBuf};

use thiserror::Error;

use crate::{as_bytes::AsBytes, EncodeFields};

pub struct FluidDataEncoder {
    /// The path to the directory into which the snapshot data will be placed.
    path: PathBuf,
    num_frames: u64,
    current_frame: u64,
}

impl FluidDataEncoder {
    pub fn new(path: PathBuf, num_frames: u64) -> Result<FluidDataEncoder, EncodingError> {
        std::fs::create_dir_all(&path)?;

        Ok(Self {
            path,
            num_frames,
            current_frame: 0,
        })
    }

    fn frame_path(&self, frame: u64) -> PathBuf {
        let max_digits = self.num_frames.saturating_sub(1).checked_ilog10().unwrap_or(0) + 1;
        let zeros = max_digits - (frame.checked_ilog10().unwrap_or(0) + 1);

        self.path.join(format!("{}{frame}.dat", "0".repeat(zeros as usize)))
    }

    pub fn encode_metadata(&mut self, width: u32, height: u32, spacing: f32) -> Result<(), EncodingError> {
        let path = self.path.join("_meta");
        let mut writer = File::create(path)?;

        writer.write_all(&width.to_ne_bytes())?;
        writer.write_all(&height.to_ne_bytes())?;
        writer.write_all(&spacing.to_ne_bytes())?;
        writer.write_all(&self.num_frames.to_ne_bytes())?;

        Ok(())
    }

    pub fn encode_frame<S: EncodeFields>(&mut self, state: &S) -> Result<(), EncodingError> {
        let path = self.frame_path(self.current_frame);
        let writer = BufWriter::new(File::create(path)?);

        state.encode_state(&mut FluidFrameEncoder { writer })?;

        self.current_frame += 1;

        Ok(())
    }
}

pub struct FluidFrameEncoder<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> FluidFrameEncoder<W> {
    pub fn encode_section<const N: usize, T, I>(&mut self, len: usize, values: I) -> Result<(), EncodingError>
    where
        I: Iterator<Item = T>,
        T: AsBytes<N>,
    {
        self.writer.write_all(&(len as u64).to_ne_bytes())?;

        let bytes: Vec<_> = values.flat_map(|v| v.to_bytes()).collect();
        self.writer.write_all(&bytes)?;

        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
