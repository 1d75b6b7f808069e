//! Scanline extraction: one image row, converted to luma and thresholded

use crate::config::Threshold;
use crate::error::{Result, ScanError};
use crate::models::Color;
use crate::utils::binarization::{otsu_threshold, threshold_row};
use crate::utils::grayscale::{luma, rgb_row_to_grayscale};
use image::{GenericImageView, Pixel};

/// Binary samples of a single image row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanline {
    row: u32,
    samples: Vec<Color>,
}

impl Scanline {
    /// Wrap already binarized samples
    pub fn new(row: u32, samples: Vec<Color>) -> Self {
        Self { row, samples }
    }

    /// Binarize a grayscale row
    pub fn from_gray_row(row: u32, gray: &[u8], threshold: Threshold) -> Self {
        let cut = match threshold {
            Threshold::Fixed(t) => t,
            Threshold::Otsu => otsu_threshold(gray),
        };
        Self::new(row, threshold_row(gray, cut))
    }

    /// Sample a raw RGB buffer (3 bytes per pixel)
    ///
    /// `row: None` samples the vertical midpoint.
    pub fn from_rgb(
        rgb: &[u8],
        width: usize,
        height: usize,
        row: Option<u32>,
        threshold: Threshold,
    ) -> Result<Self> {
        let y = scan_row(width as u32, height as u32, row)?;
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .unwrap_or(usize::MAX);
        if rgb.len() < expected {
            return Err(ScanError::BufferSize {
                expected,
                got: rgb.len(),
            });
        }
        let gray = rgb_row_to_grayscale(rgb, width, y as usize);
        Ok(Self::from_gray_row(y, &gray, threshold))
    }

    /// Sample any 8-bit image
    pub fn from_image<I>(img: &I, row: Option<u32>, threshold: Threshold) -> Result<Self>
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>,
    {
        let (width, height) = img.dimensions();
        let y = scan_row(width, height, row)?;
        let gray: Vec<u8> = (0..width)
            .map(|x| {
                let [r, g, b] = img.get_pixel(x, y).to_rgb().0;
                luma(r, g, b)
            })
            .collect();
        Ok(Self::from_gray_row(y, &gray, threshold))
    }

    /// Image row the samples were taken from
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Samples, one per pixel column
    pub fn samples(&self) -> &[Color] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the row has no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Row to scan: the explicit override, or the vertical midpoint
pub fn scan_row(width: u32, height: u32, row: Option<u32>) -> Result<u32> {
    if width == 0 || height == 0 {
        return Err(ScanError::EmptyImage);
    }
    match row {
        Some(y) if y >= height => Err(ScanError::RowOutOfBounds { row: y, height }),
        Some(y) => Ok(y),
        None => Ok(height / 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_scan_row() {
        assert_eq!(scan_row(10, 9, None).unwrap(), 4);
        assert_eq!(scan_row(10, 9, Some(8)).unwrap(), 8);
        assert!(matches!(
            scan_row(10, 9, Some(9)),
            Err(ScanError::RowOutOfBounds { row: 9, height: 9 })
        ));
        assert!(matches!(scan_row(0, 9, None), Err(ScanError::EmptyImage)));
    }

    #[test]
    fn test_from_image_samples_midpoint() {
        // Only the middle row carries dark pixels
        let img = GrayImage::from_fn(4, 3, |x, y| {
            if y == 1 && x % 2 == 0 { Luma([0]) } else { Luma([255]) }
        });
        let line = Scanline::from_image(&img, None, Threshold::default()).unwrap();
        assert_eq!(line.row(), 1);
        assert_eq!(
            line.samples(),
            &[Color::Black, Color::White, Color::Black, Color::White]
        );
    }

    #[test]
    fn test_from_rgb() {
        // 3x1 RGB: black, white, mid gray
        let rgb = vec![0, 0, 0, 255, 255, 255, 128, 128, 128];
        let line = Scanline::from_rgb(&rgb, 3, 1, None, Threshold::default()).unwrap();
        assert_eq!(line.len(), 3);
        assert_eq!(line.samples(), &[Color::Black, Color::White, Color::Black]);
    }

    #[test]
    fn test_from_rgb_short_buffer() {
        let rgb = vec![0u8; 5];
        assert!(matches!(
            Scanline::from_rgb(&rgb, 3, 1, None, Threshold::default()),
            Err(ScanError::BufferSize { expected: 9, got: 5 })
        ));
    }

    #[test]
    fn test_threshold_boundary() {
        let above = GrayImage::from_pixel(3, 1, Luma([129]));
        let line = Scanline::from_image(&above, None, Threshold::default()).unwrap();
        assert_eq!(line.samples(), &[Color::White; 3]);

        let at = GrayImage::from_pixel(3, 1, Luma([128]));
        let line = Scanline::from_image(&at, None, Threshold::default()).unwrap();
        assert_eq!(line.samples(), &[Color::Black; 3]);

        let rgb = [129u8; 9];
        let line = Scanline::from_rgb(&rgb, 3, 1, None, Threshold::default()).unwrap();
        assert_eq!(line.samples(), &[Color::White; 3]);
    }

    #[test]
    fn test_from_rgb_huge_dimensions() {
        let rgb = vec![0u8; 9];
        assert!(matches!(
            Scanline::from_rgb(&rgb, usize::MAX / 2, 3, None, Threshold::default()),
            Err(ScanError::BufferSize { expected: usize::MAX, got: 9 })
        ));
    }

    #[test]
    fn test_otsu_row() {
        let gray = [40u8, 40, 90, 90, 40, 90];
        let line = Scanline::from_gray_row(0, &gray, Threshold::Otsu);
        assert_eq!(line.samples()[0], Color::Black);
        assert_eq!(line.samples()[2], Color::White);
    }
}
