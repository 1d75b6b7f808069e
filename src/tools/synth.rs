//! Synthetic EAN-13 generation for tests, benches and the `synth` command

use crate::decoder::tables::{ParitySchedule, Table};
use crate::models::{Barcode, Color};
use image::{Rgb, RgbImage};

const GUARD: [u8; 3] = [1, 0, 1];
const CENTER: [u8; 5] = [0, 1, 0, 1, 0];

/// The 95 modules of an EAN-13 symbol, quiet zones excluded
///
/// Returns `None` if any digit is above 9.
pub fn encode_modules(digits: &[u8; 13]) -> Option<Vec<Color>> {
    let schedule = ParitySchedule::for_system_digit(digits[0])?;
    let mut bits: Vec<u8> = Vec::with_capacity(95);

    bits.extend(GUARD);
    for (i, &d) in digits[1..7].iter().enumerate() {
        push_code(&mut bits, schedule.table(i).encode(d)?);
    }
    bits.extend(CENTER);
    for &d in &digits[7..] {
        push_code(&mut bits, Table::R.encode(d)?);
    }
    bits.extend(GUARD);

    Some(bits.into_iter().map(Color::from_bit).collect())
}

fn push_code(bits: &mut Vec<u8>, code: u8) {
    bits.extend((0..7).rev().map(|i| (code >> i) & 1));
}

/// Grayscale row (0 = black, 255 = white) with `quiet` white pixels on each side
pub fn synthesize_row(digits: &[u8; 13], module: usize, quiet: usize) -> Option<Vec<u8>> {
    let modules = encode_modules(digits)?;
    let mut row = vec![255u8; quiet];
    for color in modules {
        let v = match color {
            Color::Black => 0,
            Color::White => 255,
        };
        row.extend(std::iter::repeat_n(v, module));
    }
    row.extend(std::iter::repeat_n(255u8, quiet));
    Some(row)
}

/// RGB image with every row set to the same synthetic barcode row
pub fn synthesize_image(
    digits: &[u8; 13],
    module: usize,
    quiet: usize,
    height: u32,
) -> Option<RgbImage> {
    let row = synthesize_row(digits, module, quiet)?;
    let width = row.len() as u32;
    Some(RgbImage::from_fn(width, height, |x, _| {
        let v = row[x as usize];
        Rgb([v, v, v])
    }))
}

/// Parse a 13 digit string; a 12 digit string gets its check digit appended
pub fn parse_digits(s: &str) -> Option<[u8; 13]> {
    let parsed: Vec<u8> = s
        .trim()
        .chars()
        .filter(|c| *c != '-' && *c != ' ')
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect::<Option<_>>()?;

    let mut digits = [0u8; 13];
    match parsed.len() {
        13 => digits.copy_from_slice(&parsed),
        12 => {
            digits[..12].copy_from_slice(&parsed);
            let mut with_check = parsed;
            with_check.push(0);
            digits[12] = Barcode::new(with_check).expected_check_digit()?;
        }
        _ => return None,
    }
    Some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_modules() {
        let modules = encode_modules(&[9, 7, 8, 0, 1, 3, 4, 1, 9, 0, 4, 4, 0]).unwrap();
        assert_eq!(modules.len(), 95);
        assert_eq!(&modules[..3], &[Color::Black, Color::White, Color::Black]);
        assert_eq!(&modules[92..], &[Color::Black, Color::White, Color::Black]);
        assert_eq!(modules[45], Color::White);
        assert_eq!(modules[46], Color::Black);
    }

    #[test]
    fn test_encode_rejects_bad_digit() {
        assert!(encode_modules(&[9, 7, 8, 0, 1, 3, 4, 1, 9, 0, 4, 4, 12]).is_none());
    }

    #[test]
    fn test_synthesize_row() {
        let row = synthesize_row(&[0; 13], 2, 5).unwrap();
        assert_eq!(row.len(), 95 * 2 + 10);
        assert_eq!(&row[..5], &[255; 5]);
        assert_eq!(&row[5..7], &[0, 0]);
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(
            parse_digits("978-0-13-419044-0"),
            Some([9, 7, 8, 0, 1, 3, 4, 1, 9, 0, 4, 4, 0])
        );
        assert_eq!(
            parse_digits("978013419044"),
            Some([9, 7, 8, 0, 1, 3, 4, 1, 9, 0, 4, 4, 0])
        );
        assert_eq!(parse_digits("97801341904"), None);
        assert_eq!(parse_digits("97801341904x0"), None);
    }
}
