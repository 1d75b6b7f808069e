//! RustISBN - EAN-13/ISBN barcode reading from a single scanline
//!
//! The reader samples one image row (the vertical midpoint by default),
//! thresholds it into bars and spaces, locates the left and right guards,
//! normalizes every 4-bar digit group to seven modules and looks the
//! resulting patterns up in the EAN-13 symbol tables.
//!
//! ```no_run
//! let img = image::open("book.png").unwrap();
//! let barcode = rust_isbn::scan_image(&img).unwrap();
//! println!("{}", barcode);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Scan configuration and environment overrides
pub mod config;
/// Symbol tables, symbol lookup and digitization
pub mod decoder;
/// Scanline extraction, bar segmentation and guard location
pub mod detector;
/// Error types
pub mod error;
/// Core data structures (Bar, Guard, Barcode)
pub mod models;
/// One decode run and its diagnostic report
pub mod pipeline;
/// Image loading, overlays and synthetic barcodes
pub mod tools;
/// Utility functions (grayscale, binarization)
pub mod utils;

pub use config::{Parity, ScanConfig, Threshold};
pub use decoder::tables::{ParitySchedule, Table};
pub use detector::scanline::Scanline;
pub use error::{Result, ScanError};
pub use models::{Bar, Barcode, Color, Guard, Guards};
pub use pipeline::{ScanReport, decode_scanline};

use image::DynamicImage;
use log::debug;
use rayon::prelude::*;

/// Read a barcode from an RGB image
///
/// # Arguments
/// * `image` - Raw RGB bytes (3 bytes per pixel)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
pub fn scan(image: &[u8], width: usize, height: usize) -> Result<Barcode> {
    Scanner::new().scan(image, width, height)
}

/// Read a barcode from a decoded image
pub fn scan_image(image: &DynamicImage) -> Result<Barcode> {
    Scanner::new().scan_image(image)
}

/// Read barcodes from many images in parallel
///
/// Each image gets its own independent decode run.
pub fn scan_batch(images: &[DynamicImage]) -> Vec<Result<Barcode>> {
    let scanner = Scanner::new();
    images
        .par_iter()
        .map(|img| scanner.scan_image(img))
        .collect()
}

/// Barcode reader with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    /// Create a scanner configured from the environment
    pub fn new() -> Self {
        Self {
            config: ScanConfig::from_env(),
        }
    }

    /// Create a scanner with an explicit configuration
    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Read a barcode from raw RGB bytes
    pub fn scan(&self, image: &[u8], width: usize, height: usize) -> Result<Barcode> {
        let line = Scanline::from_rgb(
            image,
            width,
            height,
            self.config.row,
            self.config.threshold,
        )?;
        self.decode(line).into_result()
    }

    /// Read a barcode from a decoded image
    pub fn scan_image(&self, image: &DynamicImage) -> Result<Barcode> {
        self.inspect(image)?.into_result()
    }

    /// Decode an image and keep the scanline and guards for diagnostics
    ///
    /// Fails only if no scanline can be taken from the image; decode
    /// failures are reported in [`ScanReport::result`].
    pub fn inspect(&self, image: &DynamicImage) -> Result<ScanReport> {
        let line = Scanline::from_image(image, self.config.row, self.config.threshold)?;
        Ok(self.decode(line))
    }

    /// Decode an already extracted scanline
    pub fn decode(&self, scanline: Scanline) -> ScanReport {
        debug!(
            "scanning row {} ({} samples)",
            scanline.row(),
            scanline.len()
        );
        pipeline::run(scanline, &self.config)
    }
}
