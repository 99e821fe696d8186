//! Field-to-color rendering.
//!
//! Each cell value is scaled by 255 and by one palette factor per channel,
//! clamped to the byte range, then truncated.

use rand::Rng;
use rayon::prelude::*;

use crate::automaton::Field;
use crate::error::EngineError;

/// Number of color channels per pixel.
pub const CHANNELS: usize = 3;

/// Per-channel scale factors, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    channels: [f64; CHANNELS],
}

impl Palette {
    /// Validated palette.
    pub fn new(red: f64, green: f64, blue: f64) -> Result<Self, EngineError> {
        let palette = Self::from_channels([red, green, blue]);
        palette.validate()?;
        Ok(palette)
    }

    /// Unvalidated palette; see [`Palette::validate`].
    pub const fn from_channels(channels: [f64; CHANNELS]) -> Self {
        Palette { channels }
    }

    /// Three independent uniform draws from [0, 1).
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Palette {
            channels: [rng.gen(), rng.gen(), rng.gen()],
        }
    }

    /// Full-intensity grayscale.
    pub const fn white() -> Self {
        Palette {
            channels: [1.0; CHANNELS],
        }
    }

    pub fn channels(&self) -> [f64; CHANNELS] {
        self.channels
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        for (channel, &value) in self.channels.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::InvalidPalette { channel, value });
            }
        }
        Ok(())
    }
}

/// Interleaved RGB bytes, row-major, same extent as the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(rows: usize, cols: usize) -> Self {
        FrameBuffer {
            rows,
            cols,
            data: vec![0; rows * cols * CHANNELS],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Raw bytes, `[(r * cols + c) * 3 + channel]`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// RGB triple for one pixel. Panics if out of range.
    pub fn pixel(&self, row: usize, col: usize) -> [u8; CHANNELS] {
        let base = (row * self.cols + col) * CHANNELS;
        [self.data[base], self.data[base + 1], self.data[base + 2]]
    }
}

/// Clamp a scaled channel value into a byte. NaN maps to 0.
#[inline]
pub fn clamp_to_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0) as u8
}

/// Render `field` into a new frame buffer.
pub fn render(field: &Field, palette: &Palette) -> FrameBuffer {
    let mut frame = FrameBuffer::new(field.rows(), field.cols());
    render_into(field, palette, &mut frame);
    frame
}

/// Render `field` into `frame`, overwriting every byte. The frame is resized if its
/// extent differs from the field.
pub fn render_into(field: &Field, palette: &Palette, frame: &mut FrameBuffer) {
    let rows = field.rows();
    let cols = field.cols();
    if frame.rows != rows || frame.cols != cols {
        *frame = FrameBuffer::new(rows, cols);
    }

    let scale = palette.channels.map(|p| 255.0 * p);
    frame
        .data
        .par_chunks_mut(cols * CHANNELS)
        .zip(field.cells().par_chunks(cols))
        .for_each(|(out_row, cells)| {
            for (pixel, &value) in out_row.chunks_exact_mut(CHANNELS).zip(cells) {
                for (byte, &s) in pixel.iter_mut().zip(&scale) {
                    *byte = clamp_to_byte(value * s);
                }
            }
        });
}
