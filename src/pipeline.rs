//! One decode run: guards, bars, digits
//!
//! Every run owns its scanline, bars, guards and barcode; nothing is shared
//! between runs.

use crate::config::ScanConfig;
use crate::decoder::digitizer::digitize;
use crate::detector::guard::locate_guards;
use crate::detector::scanline::Scanline;
use crate::detector::segment::segment;
use crate::error::{Result, ScanError};
use crate::models::{Bar, Barcode, Color, Guards};
use log::debug;

/// Everything a decode run produced, for callers that render diagnostics
#[derive(Debug)]
pub struct ScanReport {
    /// Binarized row that was decoded
    pub scanline: Scanline,
    /// Guards, if they could be located
    pub guards: Option<Guards>,
    /// Bars between the outer guard edges, in scanline coordinates
    pub bars: Vec<Bar>,
    /// Decoded barcode or the stage that failed
    pub result: Result<Barcode>,
}

impl ScanReport {
    /// Image row that was scanned
    pub fn row(&self) -> u32 {
        self.scanline.row()
    }

    /// Drop the diagnostics and keep the outcome
    pub fn into_result(self) -> Result<Barcode> {
        self.result
    }
}

/// Decode a scanline, keeping intermediate results
pub fn run(scanline: Scanline, config: &ScanConfig) -> ScanReport {
    let mut guards = None;
    let mut bars = Vec::new();
    let result = decode_into(scanline.samples(), config, &mut guards, &mut bars);

    match &result {
        Ok(barcode) => debug!("row {}: decoded {}", scanline.row(), barcode),
        Err(err) => debug!("row {}: {}", scanline.row(), err),
    }

    ScanReport {
        scanline,
        guards,
        bars,
        result,
    }
}

/// Decode binary samples into a barcode
pub fn decode_scanline(samples: &[Color], config: &ScanConfig) -> Result<Barcode> {
    decode_into(samples, config, &mut None, &mut Vec::new())
}

fn decode_into(
    samples: &[Color],
    config: &ScanConfig,
    guards: &mut Option<Guards>,
    bars: &mut Vec<Bar>,
) -> Result<Barcode> {
    let found = locate_guards(samples)?;
    *guards = Some(found);

    let (start, end) = found.span();
    debug!("guards span pixels {}..{}", start, end);

    *bars = segment(&samples[start..end])?
        .into_iter()
        .map(|bar| bar.shifted(start))
        .collect();
    debug!("segmented {} bars", bars.len());

    let barcode = digitize(bars, &config.parity)?;

    if config.verify_checksum {
        if let (Some(expected), Some(got)) = (barcode.expected_check_digit(), barcode.check_digit()) {
            if expected != got {
                return Err(ScanError::Checksum { expected, got });
            }
        }
    }

    Ok(barcode)
}
