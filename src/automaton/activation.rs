//! Activation functions mapping a convolution score to a cell's next value.

/// Cell is fully active.
pub const ALIVE: f64 = 1.0;
/// Cell is inactive.
pub const DEAD: f64 = 0.0;

/// `1 - 2^(-0.6 x²)`. Zero at the origin, saturating towards 1.
#[inline]
pub fn inverted_gaussian(x: f64) -> f64 {
    1.0 - (-0.6 * x * x).exp2()
}

/// Game of Life transition on a score from the `[[1,1,1],[1,9,1],[1,1,1]]` kernel.
///
/// A dead cell scores its live neighbor count; a live cell scores 9 plus that count.
/// So 3 is a birth and 11 or 12 is a survival. Exact comparison is only sound when the
/// kernel weights are integers and cells are exactly 0 or 1.
#[inline]
pub fn game_of_life(x: f64) -> f64 {
    if x == 3.0 || x == 11.0 || x == 12.0 {
        ALIVE
    } else {
        DEAD
    }
}

#[inline]
pub fn identity(x: f64) -> f64 {
    x
}

/// `2^(-(x - b)²)`, peaking at 1 when `x == b`.
#[inline]
pub fn gaussian(x: f64, b: f64) -> f64 {
    let d = x - b;
    (-d * d).exp2()
}

#[inline]
pub fn pathways(x: f64) -> f64 {
    gaussian(x, 3.5)
}

#[inline]
pub fn waves(x: f64) -> f64 {
    (1.2 * x).abs()
}

/// `1 - 1 / (0.89 x² + 1)`. The denominator is at least 1.
#[inline]
pub fn slime_mould(x: f64) -> f64 {
    1.0 - 1.0 / (0.89 * x * x + 1.0)
}

/// Activation selected by a rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    InvertedGaussian,
    GameOfLife,
    Identity,
    Pathways,
    Waves,
    SlimeMould,
}

impl Activation {
    /// Apply the activation to one score.
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Activation::InvertedGaussian => inverted_gaussian(x),
            Activation::GameOfLife => game_of_life(x),
            Activation::Identity => identity(x),
            Activation::Pathways => pathways(x),
            Activation::Waves => waves(x),
            Activation::SlimeMould => slime_mould(x),
        }
    }

    /// Whether the activation compares scores for exact equality.
    pub fn requires_integral_scores(self) -> bool {
        matches!(self, Activation::GameOfLife)
    }

    pub fn name(self) -> &'static str {
        match self {
            Activation::InvertedGaussian => "inverted_gaussian",
            Activation::GameOfLife => "game_of_life",
            Activation::Identity => "identity",
            Activation::Pathways => "pathways",
            Activation::Waves => "waves",
            Activation::SlimeMould => "slime_mould",
        }
    }
}
