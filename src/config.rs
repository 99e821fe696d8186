//! Engine construction parameters.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::error::EngineError;
use crate::render::{Palette, CHANNELS};

/// Largest cell count whose `f64` buffer can still be allocated.
pub const MAX_CELLS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Static configuration for a [`SimulationEngine`](crate::engine::SimulationEngine).
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Number of field rows.
    pub rows: usize,
    /// Number of field columns.
    pub cols: usize,
    /// Fixed palette; drawn from the engine RNG when absent.
    pub palette: Option<Palette>,
    /// Optional RNG seed for reproducible fields and palettes.
    pub seed: Option<u64>,
    /// Worker threads for the convolution and render passes; 0 lets rayon decide.
    pub num_threads: usize,
    /// Steps executed by each `tick()`.
    pub iterations_per_tick: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: 1000,
            cols: 1000,
            palette: None,
            seed: None,
            num_threads: 0,
            iterations_per_tick: 1,
        }
    }
}

impl EngineConfig {
    /// Config for a `rows` x `cols` grid with every other setting at its default.
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Check extents and, when given, the palette.
    ///
    /// Both extents must be positive, and the field and its RGB frame must fit
    /// in memory without overflowing `usize`.
    pub fn validate(&self) -> Result<(), EngineError> {
        let invalid = EngineError::InvalidDimensions {
            rows: self.rows,
            cols: self.cols,
        };
        if self.rows == 0 || self.cols == 0 {
            return Err(invalid);
        }
        let cells = match self.rows.checked_mul(self.cols) {
            Some(cells) if cells <= MAX_CELLS => cells,
            _ => return Err(invalid),
        };
        if cells.checked_mul(CHANNELS).is_none() {
            return Err(invalid);
        }
        if let Some(palette) = &self.palette {
            palette.validate()?;
        }
        Ok(())
    }

    /// Returns the configured RNG, generating a seed from entropy if absent.
    pub(crate) fn seeded_rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => {
                let seed: u64 = rand::random();
                SmallRng::seed_from_u64(seed)
            }
        }
    }
}
