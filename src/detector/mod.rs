//! Barcode detection modules
//!
//! Turns one image row into bars and locates the guards that bound the
//! payload:
//! - Scanline extraction (grayscale + threshold)
//! - Bar segmentation (run-length encoding)
//! - Guard location (left and right `black, white, black` runs)

/// Guard location from both ends of a scanline
pub mod guard;
/// Scanline extraction from an image row
pub mod scanline;
/// Run-length segmentation into bars
pub mod segment;
