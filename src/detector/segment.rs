//! Bar segmentation: run-length encoding of a binary sequence

use crate::error::{Result, ScanError};
use crate::models::{Bar, Color};

/// Split samples into contiguous single-color bars
///
/// Bars cover the input with no gaps or overlaps; offsets are relative to
/// the start of `samples`.
pub fn segment(samples: &[Color]) -> Result<Vec<Bar>> {
    let (&first, rest) = samples.split_first().ok_or(ScanError::EmptyScanline)?;

    let mut bars = Vec::new();
    let mut current = Bar::new(0, 0, first);
    for (i, &color) in rest.iter().enumerate() {
        if color != current.color {
            current.end = i + 1;
            bars.push(current);
            current = Bar::new(i + 1, 0, color);
        }
    }
    current.end = samples.len();
    bars.push(current);

    Ok(bars)
}
