//! Helpers for the CLI, tests and benches: image loading, dataset
//! iteration, diagnostic overlays and synthetic barcodes.

pub mod synth;

use crate::error::Result;
use crate::models::{Bar, Color};
use crate::pipeline::ScanReport;
use crate::utils::grayscale::rgb_to_grayscale_parallel;
use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

const RED: Rgb<u8> = Rgb([255, 0, 0]);
const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

/// Half height of each overlay band, in pixels
const BAND: i64 = 10;

/// Open an image file
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    Ok(image::open(path)?)
}

/// Load an image as RGB bytes along with its dimensions.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, usize, usize)> {
    let rgb = load_image(path)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok((rgb.into_raw(), width as usize, height as usize))
}

/// Full grayscale rendering of an RGB image
pub fn grayscale_image(src: &RgbImage) -> GrayImage {
    let (width, height) = src.dimensions();
    let gray = rgb_to_grayscale_parallel(src.as_raw(), width as usize, height as usize);
    GrayImage::from_raw(width, height, gray).unwrap_or_else(|| GrayImage::new(width, height))
}

/// Summary statistics for a scanline.
#[derive(Debug, Clone, Copy)]
pub struct ScanlineStats {
    /// Count of black samples.
    pub black_pixels: usize,
    /// Total samples in the row.
    pub total_pixels: usize,
    /// Number of color runs.
    pub runs: usize,
}

/// Compute black/run stats for binary samples.
pub fn scanline_stats(samples: &[Color]) -> ScanlineStats {
    let black = samples.iter().filter(|&&c| c == Color::Black).count();
    let runs = if samples.is_empty() {
        0
    } else {
        1 + samples.windows(2).filter(|w| w[0] != w[1]).count()
    };
    ScanlineStats {
        black_pixels: black,
        total_pixels: samples.len(),
        runs,
    }
}

/// Copy of `src` annotated with the scanned row and the located guards
///
/// The scanline is drawn as a band around the scan row (red for white
/// samples, blue for black); guard bars are painted green above it.
pub fn render_overlay(src: &RgbImage, report: &ScanReport) -> RgbImage {
    let mut out = src.clone();
    let row = report.row() as i64;

    for (x, color) in report.scanline.samples().iter().enumerate() {
        let px = match color {
            Color::White => RED,
            Color::Black => BLUE,
        };
        for y in row - BAND..row + BAND {
            put(&mut out, x as i64, y, px);
        }
    }

    if let Some(guards) = report.guards {
        for guard in [guards.left, guards.right] {
            for (i, bar) in guard.bars.iter().enumerate() {
                patch(&mut out, row - 20 * (i as i64 + 1), bar);
            }
        }
    }

    out
}

fn patch(img: &mut RgbImage, y: i64, bar: &Bar) {
    for j in y - BAND..y + BAND {
        for i in bar.start..bar.end {
            put(img, i as i64, j, GREEN);
        }
    }
}

fn put(img: &mut RgbImage, x: i64, y: i64, px: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, px);
    }
}

/// Recursively collect image files under `root`, sorted, optionally limited
pub fn collect_images<P: AsRef<Path>>(root: P, limit: Option<usize>) -> Vec<PathBuf> {
    let mut stack = vec![root.as_ref().to_path_buf()];
    let mut images = Vec::new();

    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
                continue;
            }
            if let Some(ext) = path.extension() {
                let ext = ext.to_string_lossy().to_lowercase();
                if ext == "png" || ext == "jpg" || ext == "jpeg" || ext == "gif" || ext == "bmp" {
                    images.push(path);
                }
            }
        }
    }

    images.sort();
    if let Some(limit) = limit {
        images.truncate(limit);
    }
    images
}
