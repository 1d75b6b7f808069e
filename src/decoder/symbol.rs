//! Symbol decoder: 7-module color pattern to digit

use super::tables::{DIGITS_PER_HALF, MODULES_PER_DIGIT, ParitySchedule, Table};
use crate::error::{Result, ScanError};
use crate::models::Color;

/// Pack a 7-module pattern into its table code, MSB first
///
/// Returns `None` if the pattern is not exactly seven modules long.
pub fn pattern_code(pattern: &[Color]) -> Option<u8> {
    if pattern.len() != MODULES_PER_DIGIT {
        return None;
    }
    Some(pattern.iter().fold(0u8, |acc, c| (acc << 1) | c.bit()))
}

/// Render a pattern as `0`/`1` characters (white = 0)
pub fn pattern_string(pattern: &[Color]) -> String {
    pattern
        .iter()
        .map(|c| if c.bit() == 0 { '0' } else { '1' })
        .collect()
}

/// Look up a pattern in one table
pub fn decode_symbol(pattern: &[Color], table: Table) -> Result<u8> {
    pattern_code(pattern)
        .and_then(|code| table.lookup(code))
        .ok_or_else(|| ScanError::UnrecognizedPattern {
            table,
            pattern: pattern_string(pattern),
        })
}

/// Decode the digit at `position` (0..12) of the payload
///
/// Left-half positions use the table the schedule assigns; right-half
/// positions always use [`Table::R`].
pub fn decode_digit(pattern: &[Color], position: usize, schedule: &ParitySchedule) -> Result<u8> {
    decode_symbol(pattern, table_for(position, schedule))
}

/// Decode a left-half pattern without a schedule, reporting the table it matched
///
/// `L` is tried first, then `G`; a miss reports `G`, the last table tried.
pub fn detect_symbol(pattern: &[Color]) -> Result<(u8, Table)> {
    for table in [Table::L, Table::G] {
        if let Ok(digit) = decode_symbol(pattern, table) {
            return Ok((digit, table));
        }
    }
    Err(ScanError::UnrecognizedPattern {
        table: Table::G,
        pattern: pattern_string(pattern),
    })
}

fn table_for(position: usize, schedule: &ParitySchedule) -> Table {
    if position < DIGITS_PER_HALF {
        schedule.table(position)
    } else {
        Table::R
    }
}
