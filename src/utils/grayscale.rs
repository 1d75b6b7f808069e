//! Grayscale conversion for scanline sampling
//! Y = 0.299*R + 0.587*G + 0.114*B
//! Uses fast integer arithmetic: Y = (77*R + 150*G + 29*B + 128) >> 8

use rayon::prelude::*;

/// Coefficients for grayscale conversion; they sum to 256 so gray stays gray
const COEF_R: i32 = 77;
const COEF_G: i32 = 150;
const COEF_B: i32 = 29;

/// Luminance of a single RGB pixel
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let lum = (COEF_R * r as i32 + COEF_G * g as i32 + COEF_B * b as i32 + 128) >> 8;
    lum.min(255) as u8
}

/// Convert one row of an RGB buffer to grayscale
///
/// # Arguments
/// * `rgb` - Raw RGB bytes (3 bytes per pixel)
/// * `width` - Image width in pixels
/// * `y` - Row to convert
pub fn rgb_row_to_grayscale(rgb: &[u8], width: usize, y: usize) -> Vec<u8> {
    let row_start = y * width * 3;
    rgb[row_start..row_start + width * 3]
        .chunks_exact(3)
        .map(|px| luma(px[0], px[1], px[2]))
        .collect()
}

/// Convert an RGB image to grayscale, processing rows in parallel
pub fn rgb_to_grayscale_parallel(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut gray = vec![0u8; width * height];
    if width == 0 {
        return gray;
    }

    gray.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let row_start = y * width * 3;
        for (x, out) in row.iter_mut().enumerate() {
            let idx = row_start + x * 3;
            *out = luma(rgb[idx], rgb[idx + 1], rgb[idx + 2]);
        }
    });

    gray
}
