//! Scan configuration
//!
//! Defaults can be overridden through environment variables:
//! `ISBN_THRESHOLD` (0-255 or `otsu`), `ISBN_SCAN_ROW`, `ISBN_PARITY`
//! (`auto` or six `L`/`G` letters) and `ISBN_VERIFY_CHECKSUM` (0/1).

use crate::decoder::tables::ParitySchedule;
use std::sync::OnceLock;

/// Default binarization threshold; samples above it are white
pub const DEFAULT_THRESHOLD: u8 = 128;

/// How grayscale samples on the scan row are binarized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// Fixed cut-off
    Fixed(u8),
    /// Otsu threshold computed over the scan row
    Otsu,
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::Fixed(DEFAULT_THRESHOLD)
    }
}

impl Threshold {
    /// Parse a number or `otsu`
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("otsu") {
            return Some(Threshold::Otsu);
        }
        s.parse::<u8>().ok().map(Threshold::Fixed)
    }
}

/// How the left-half symbol tables are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Use a fixed schedule; its system digit leads the barcode
    Fixed(ParitySchedule),
    /// Try `L` then `G` per digit and derive the system digit from the result
    Detect,
}

impl Default for Parity {
    fn default() -> Self {
        Parity::Fixed(ParitySchedule::ISBN)
    }
}

/// Settings for one decode run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanConfig {
    /// Row binarization policy
    pub threshold: Threshold,
    /// Explicit scan row; `None` scans the vertical midpoint
    pub row: Option<u32>,
    /// Left-half table selection
    pub parity: Parity,
    /// Reject barcodes whose check digit does not match
    pub verify_checksum: bool,
}

impl ScanConfig {
    /// Configuration built from the environment, computed once per process
    pub fn from_env() -> Self {
        static ENV_CONFIG: OnceLock<ScanConfig> = OnceLock::new();
        ENV_CONFIG
            .get_or_init(|| ScanConfig {
                threshold: parse_env("ISBN_THRESHOLD", Threshold::parse)
                    .unwrap_or_default(),
                row: parse_env("ISBN_SCAN_ROW", |v| v.trim().parse::<u32>().ok()),
                parity: parse_env("ISBN_PARITY", parse_parity).unwrap_or_default(),
                verify_checksum: parse_env_bool_u8("ISBN_VERIFY_CHECKSUM", false),
            })
            .clone()
    }

    /// Set the binarization threshold
    pub fn threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Scan an explicit row instead of the midpoint
    pub fn row(mut self, row: u32) -> Self {
        self.row = Some(row);
        self
    }

    /// Set the parity policy
    pub fn parity(mut self, parity: Parity) -> Self {
        self.parity = parity;
        self
    }

    /// Enable or disable check digit validation
    pub fn verify_checksum(mut self, verify: bool) -> Self {
        self.verify_checksum = verify;
        self
    }
}

/// Parse `auto` or a six letter schedule
pub fn parse_parity(s: &str) -> Option<Parity> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("auto") {
        return Some(Parity::Detect);
    }
    ParitySchedule::parse(s).ok().map(Parity::Fixed)
}

fn parse_env<T>(name: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    std::env::var(name).ok().and_then(|v| parse(&v))
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}
