use std::fmt;

/// Color of a single scanline sample or bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    /// Background / space
    White = 0,
    /// Ink / bar
    Black = 1,
}

impl Color {
    /// Module bit for symbol tables (white = 0, black = 1)
    pub fn bit(self) -> u8 {
        self as u8
    }

    /// Color for a module bit
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 { Color::White } else { Color::Black }
    }

    /// The other color
    pub fn inverse(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// A contiguous run of one color over the half-open pixel interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    /// First pixel of the run
    pub start: usize,
    /// One past the last pixel of the run
    pub end: usize,
    /// Run color
    pub color: Color,
}

impl Bar {
    /// Create a new bar
    pub fn new(start: usize, end: usize, color: Color) -> Self {
        Self { start, end, color }
    }

    /// Width in pixels
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a zero-width bar (never produced by segmentation)
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Width expressed in modules of `module_width` pixels, unrounded
    pub fn modules(&self, module_width: f64) -> f64 {
        self.len() as f64 / module_width
    }

    /// Same bar moved right by `offset` pixels
    pub fn shifted(&self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset, self.color)
    }
}
