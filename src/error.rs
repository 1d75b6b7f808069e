//! Error types for the scan pipeline
//!
//! Every failure is terminal for the current decode run. The variants carry
//! enough context (side, group index, expected vs. actual) to diagnose a bad
//! scan without re-running it.

use crate::decoder::tables::{ParitySchedule, Table};
use crate::models::{Color, Half, Side};
use thiserror::Error;

/// Errors produced while reading a barcode
#[derive(Debug, Error)]
pub enum ScanError {
    /// The image has zero width or zero height
    #[error("image is empty")]
    EmptyImage,

    /// A raw pixel buffer is shorter than its stated dimensions
    #[error("pixel buffer too small: got={got} bytes, want={expected}")]
    BufferSize {
        /// Bytes needed for the stated dimensions
        expected: usize,
        /// Bytes supplied
        got: usize,
    },

    /// An explicit scan row lies outside the image
    #[error("scan row {row} is out of bounds (height: {height})")]
    RowOutOfBounds {
        /// Requested row
        row: u32,
        /// Image height
        height: u32,
    },

    /// Bar segmentation was handed an empty sequence
    #[error("cannot segment an empty scanline")]
    EmptyScanline,

    /// A guard run could not be located from one end of the scanline
    #[error("{side} guard not found: missing {color} run")]
    MalformedGuard {
        /// Guard being searched for
        side: Side,
        /// Color of the run that was not found
        color: Color,
    },

    /// The guarded region holds fewer bars than a full symbol needs
    #[error("too few bars between guards: got={got}, want>={expected}")]
    TooFewBars {
        /// Bars in a complete symbol
        expected: usize,
        /// Bars found between the guards
        got: usize,
    },

    /// A fixed color region (guard or separator) does not match
    #[error("invalid {region} bar[{index}] color: got={got}, want={expected}")]
    SeparatorMismatch {
        /// Name of the region being checked
        region: &'static str,
        /// Bar index within the region
        index: usize,
        /// Required color
        expected: Color,
        /// Color found
        got: Color,
    },

    /// A digit group did not normalize to exactly 7 modules
    #[error("could not decode {half} sequence: invalid digitization of group {group}: got={got}, want=7")]
    Digitization {
        /// Half the group belongs to
        half: Half,
        /// Group index within the half
        group: usize,
        /// Rounded module total
        got: i64,
    },

    /// A normalized pattern has no entry in the selected table
    #[error("invalid codec/value: pattern {pattern} not found in table {table}")]
    UnrecognizedPattern {
        /// Table that was searched
        table: Table,
        /// Pattern as `0`/`1` characters
        pattern: String,
    },

    /// A parity schedule does not correspond to any system digit
    #[error("parity schedule {schedule} does not encode a system digit")]
    UnknownParity {
        /// Offending schedule
        schedule: ParitySchedule,
    },

    /// The check digit does not match the payload
    #[error("checksum mismatch: got={got}, want={expected}")]
    Checksum {
        /// Check digit computed from the payload
        expected: u8,
        /// Check digit read from the barcode
        got: u8,
    },

    /// Loading or decoding the source image failed
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ScanError>;
