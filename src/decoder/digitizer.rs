//! Digit group digitizer
//!
//! Layout of the bar list between the outer guard edges (59 bars):
//!
//! ```text
//! [b w b] [6 x (w b w b)] [w b w b w] [6 x (b w b w)] [b w b]
//!  guard     left half       center      right half    guard
//! ```
//!
//! The module width of each half is the mean width of the three guard bars
//! that precede it; every group must round to exactly seven modules.

use super::symbol::{decode_digit, decode_symbol, detect_symbol, pattern_string};
use super::tables::{DIGITS_PER_HALF, MODULES_PER_DIGIT, ParitySchedule, Table};
use crate::config::Parity;
use crate::error::{Result, ScanError};
use crate::models::{Bar, Barcode, Color, Half};
use log::{debug, trace};

/// Bars in a complete symbol, guards included
pub const SYMBOL_BARS: usize = 59;

/// Bars encoding one digit
pub const BARS_PER_DIGIT: usize = 4;

const LEFT_OPEN: [Color; 4] = [Color::Black, Color::White, Color::Black, Color::White];
const CENTER: [Color; 5] = [
    Color::White,
    Color::Black,
    Color::White,
    Color::Black,
    Color::White,
];
const RIGHT_CLOSE: [Color; 4] = [Color::White, Color::Black, Color::White, Color::Black];

const HALF_BARS: usize = DIGITS_PER_HALF * BARS_PER_DIGIT;
const LEFT_START: usize = 3;
const CENTER_START: usize = LEFT_START + HALF_BARS;
const RIGHT_START: usize = CENTER_START + CENTER.len();

/// Decode the bars of one symbol into a 13-digit barcode
pub fn digitize(bars: &[Bar], parity: &Parity) -> Result<Barcode> {
    if bars.len() < SYMBOL_BARS {
        return Err(ScanError::TooFewBars {
            expected: SYMBOL_BARS,
            got: bars.len(),
        });
    }

    validate(&bars[..LEFT_OPEN.len()], &LEFT_OPEN, "left guard")?;

    let mut payload = Vec::with_capacity(Barcode::LEN);
    let mut observed = [Table::L; DIGITS_PER_HALF];

    let module = module_width(&bars[..3]);
    debug!("left half module width: {:.3}px", module);
    let left = &bars[LEFT_START..CENTER_START];
    for (group, sub) in left.chunks_exact(BARS_PER_DIGIT).enumerate() {
        let pattern = normalize_group(sub, module, Half::Left, group)?;
        let (digit, table) = match parity {
            Parity::Fixed(schedule) => {
                (decode_digit(&pattern, group, schedule)?, schedule.table(group))
            }
            Parity::Detect => detect_symbol(&pattern)?,
        };
        trace!("left group {}: {} -> {} ({})", group, pattern_string(&pattern), digit, table);
        observed[group] = table;
        payload.push(digit);
    }

    validate(&bars[CENTER_START..RIGHT_START], &CENTER, "center guard")?;

    let module = module_width(&bars[CENTER_START + 1..CENTER_START + 4]);
    debug!("right half module width: {:.3}px", module);
    let right = &bars[RIGHT_START..RIGHT_START + HALF_BARS];
    for (group, sub) in right.chunks_exact(BARS_PER_DIGIT).enumerate() {
        let pattern = normalize_group(sub, module, Half::Right, group)?;
        let digit = decode_symbol(&pattern, Table::R)?;
        trace!("right group {}: {} -> {}", group, pattern_string(&pattern), digit);
        payload.push(digit);
    }

    validate(&bars[bars.len() - RIGHT_CLOSE.len()..], &RIGHT_CLOSE, "right guard")?;

    let schedule = ParitySchedule::new(observed)?;
    let mut digits = Vec::with_capacity(Barcode::LEN);
    // new() only accepts schedules with a system digit
    digits.extend(schedule.system_digit());
    digits.extend(payload);
    Ok(Barcode::new(digits))
}

/// Mean width of a run of bars, in pixels
pub fn module_width(bars: &[Bar]) -> f64 {
    bars.iter().map(Bar::len).sum::<usize>() as f64 / bars.len() as f64
}

/// Expand a 4-bar group into its module pattern
///
/// Fails if the group does not round to exactly seven modules in total.
pub fn normalize_group(bars: &[Bar], module: f64, half: Half, group: usize) -> Result<Vec<Color>> {
    let total: usize = bars.iter().map(Bar::len).sum();
    let modules = (total as f64 / module).round() as i64;
    if modules != MODULES_PER_DIGIT as i64 {
        return Err(ScanError::Digitization {
            half,
            group,
            got: modules,
        });
    }

    let mut pattern = Vec::with_capacity(MODULES_PER_DIGIT);
    for bar in bars {
        let n = bar.modules(module).round() as usize;
        pattern.extend(std::iter::repeat_n(bar.color, n));
    }
    Ok(pattern)
}

fn validate(bars: &[Bar], colors: &[Color], region: &'static str) -> Result<()> {
    for (index, (bar, &expected)) in bars.iter().zip(colors).enumerate() {
        if bar.color != expected {
            return Err(ScanError::SeparatorMismatch {
                region,
                index,
                expected,
                got: bar.color,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::synth::encode_modules;

    /// Bars for a module sequence at `unit` pixels per module
    fn bars_from_modules(modules: &[Color], unit: usize) -> Vec<Bar> {
        let mut bars: Vec<Bar> = Vec::new();
        for (i, &color) in modules.iter().enumerate() {
            let (start, end) = (i * unit, (i + 1) * unit);
            match bars.last_mut() {
                Some(last) if last.color == color => last.end = end,
                _ => bars.push(Bar::new(start, end, color)),
            }
        }
        bars
    }

    fn group(widths: [usize; 4], first: Color) -> Vec<Bar> {
        let mut pos = 0;
        let mut color = first;
        widths
            .iter()
            .map(|&w| {
                let bar = Bar::new(pos, pos + w, color);
                pos += w;
                color = color.inverse();
                bar
            })
            .collect()
    }

    const REFERENCE: [u8; 13] = [9, 7, 8, 0, 1, 3, 4, 1, 9, 0, 4, 4, 0];

    #[test]
    fn test_digitize_reference() {
        let bars = bars_from_modules(&encode_modules(&REFERENCE).unwrap(), 3);
        assert_eq!(bars.len(), SYMBOL_BARS);
        let bc = digitize(&bars, &Parity::default()).unwrap();
        assert_eq!(bc.digits(), &REFERENCE);
    }

    #[test]
    fn test_digitize_detect_parity() {
        let digits = [5, 9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5, 7];
        let bars = bars_from_modules(&encode_modules(&digits).unwrap(), 2);
        let bc = digitize(&bars, &Parity::Detect).unwrap();
        assert_eq!(bc.digits(), &digits);
    }

    #[test]
    fn test_fixed_parity_rejects_other_schedule() {
        // System digit 5 uses LGGLLG; position 4 is L there but G for ISBN
        let digits = [5, 9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5, 7];
        let bars = bars_from_modules(&encode_modules(&digits).unwrap(), 2);
        let err = digitize(&bars, &Parity::default()).unwrap_err();
        assert!(matches!(err, ScanError::UnrecognizedPattern { .. }));
    }

    #[test]
    fn test_normalize_exact_group() {
        // L-coded 0 is 3,2,1,1 modules starting with white
        let bars = group([9, 6, 3, 3], Color::White);
        let pattern = normalize_group(&bars, 3.0, Half::Left, 0).unwrap();
        assert_eq!(decode_symbol(&pattern, Table::L).unwrap(), 0);
    }

    #[test]
    fn test_normalize_rejects_six_and_eight() {
        let six = group([6, 6, 3, 3], Color::White);
        match normalize_group(&six, 3.0, Half::Left, 2) {
            Err(ScanError::Digitization { half, group, got }) => {
                assert_eq!(half, Half::Left);
                assert_eq!(group, 2);
                assert_eq!(got, 6);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let eight = group([9, 6, 6, 3], Color::Black);
        assert!(matches!(
            normalize_group(&eight, 3.0, Half::Right, 5),
            Err(ScanError::Digitization { half: Half::Right, group: 5, got: 8 })
        ));
    }

    #[test]
    fn test_normalize_tolerates_noise() {
        // 3.4 + 1.9 + 1.2 + 0.8 modules at 10px per module
        let bars = group([34, 19, 12, 8], Color::White);
        let pattern = normalize_group(&bars, 10.0, Half::Left, 0).unwrap();
        assert_eq!(pattern.len(), 7);
    }

    #[test]
    fn test_too_few_bars() {
        let bars = group([1, 1, 1, 1], Color::Black);
        assert!(matches!(
            digitize(&bars, &Parity::default()),
            Err(ScanError::TooFewBars { expected: 59, got: 4 })
        ));
    }

    #[test]
    fn test_bad_left_guard() {
        let mut bars = bars_from_modules(&encode_modules(&REFERENCE).unwrap(), 3);
        bars[1].color = Color::Black;
        assert!(matches!(
            digitize(&bars, &Parity::default()),
            Err(ScanError::SeparatorMismatch { region: "left guard", index: 1, .. })
        ));
    }

    #[test]
    fn test_bad_center_guard() {
        let mut bars = bars_from_modules(&encode_modules(&REFERENCE).unwrap(), 3);
        bars[CENTER_START + 2].color = Color::Black;
        assert!(matches!(
            digitize(&bars, &Parity::default()),
            Err(ScanError::SeparatorMismatch { region: "center guard", index: 2, .. })
        ));
    }

    #[test]
    fn test_module_width() {
        let bars = group([2, 3, 4, 100], Color::Black);
        assert!((module_width(&bars[..3]) - 3.0).abs() < 1e-9);
    }
}
