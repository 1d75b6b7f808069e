//! Utility functions for image processing
//!
//! This module provides helper functions for scanline extraction:
//! - Grayscale conversion (RGB to luminance)
//! - Binarization (fixed and Otsu thresholds)

/// Row thresholding
pub mod binarization;
/// RGB to luma conversion
pub mod grayscale;
