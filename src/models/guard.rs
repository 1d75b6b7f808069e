use super::bar::{Bar, Color};
use std::fmt;

/// Which end of the symbol a guard bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Start of the symbol
    Left,
    /// End of the symbol
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Payload half of an EAN-13 symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    /// Six digits between the left and center guards
    Left,
    /// Six digits between the center and right guards
    Right,
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Half::Left => f.write_str("first"),
            Half::Right => f.write_str("second"),
        }
    }
}

/// Three consecutive bars colored black, white, black
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guard {
    /// Bars in left-to-right order
    pub bars: [Bar; 3],
}

impl Guard {
    /// Color pattern every guard must follow
    pub const PATTERN: [Color; 3] = [Color::Black, Color::White, Color::Black];

    /// Create a guard from its three bars
    pub fn new(bars: [Bar; 3]) -> Self {
        Self { bars }
    }

    /// First pixel of the guard
    pub fn start(&self) -> usize {
        self.bars[0].start
    }

    /// One past the last pixel of the guard
    pub fn end(&self) -> usize {
        self.bars[2].end
    }

    /// Mean bar width, i.e. the module width this guard implies
    pub fn module_width(&self) -> f64 {
        self.bars.iter().map(Bar::len).sum::<usize>() as f64 / 3.0
    }
}

/// Left and right guards located on a scanline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guards {
    /// Guard at the start of the symbol
    pub left: Guard,
    /// Guard at the end of the symbol
    pub right: Guard,
}

impl Guards {
    /// Pixel span `[start, end)` from the left guard to the right guard
    pub fn span(&self) -> (usize, usize) {
        (self.left.start(), self.right.end())
    }
}
