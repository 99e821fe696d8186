//! Small seed patterns that can be stamped onto a field.

/// Predefined patterns, mostly useful with the Game of Life rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Period-2 oscillator, vertical phase.
    Blinker,
    /// Period-2 oscillator.
    Toad,
    /// Still life.
    Block,
    /// Diagonal spaceship.
    Glider,
}

impl Pattern {
    /// `(row, col)` offsets of the live cells relative to the anchor.
    pub fn cells(self) -> &'static [(isize, isize)] {
        match self {
            Pattern::Blinker => &[(-1, 0), (0, 0), (1, 0)],
            Pattern::Toad => &[(0, 0), (0, 1), (0, 2), (1, -1), (1, 0), (1, 1)],
            Pattern::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Pattern::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Blinker => "blinker",
            Pattern::Toad => "toad",
            Pattern::Block => "block",
            Pattern::Glider => "glider",
        }
    }

    /// Look up a pattern by its lowercase name.
    pub fn from_name(name: &str) -> Option<Pattern> {
        [Pattern::Blinker, Pattern::Toad, Pattern::Block, Pattern::Glider]
            .into_iter()
            .find(|p| p.name() == name)
    }
}
