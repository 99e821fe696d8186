//! 3x3 convolution kernels.

/// Immutable 3x3 coefficient matrix, indexed `[dy + 1][dx + 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    weights: [[f64; 3]; 3],
}

impl Kernel {
    pub const fn new(weights: [[f64; 3]; 3]) -> Self {
        Kernel { weights }
    }

    /// Coefficient for the neighbor at offset `(dy, dx)`, each in `-1..=1`.
    #[inline]
    pub fn at(&self, dy: isize, dx: isize) -> f64 {
        self.weights[(dy + 1) as usize][(dx + 1) as usize]
    }

    pub fn weights(&self) -> &[[f64; 3]; 3] {
        &self.weights
    }

    /// True when every coefficient is a whole number.
    pub fn is_integral(&self) -> bool {
        self.weights
            .iter()
            .flatten()
            .all(|w| w.is_finite() && w.fract() == 0.0)
    }
}
