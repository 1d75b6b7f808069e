//! Integration tests for end-to-end barcode reading
//!
//! These tests run whole images through the public API and check both the
//! decoded digits and the stage that fails on images without a barcode.

use image::{DynamicImage, Rgb, RgbImage};
use proptest::prelude::*;
use rust_isbn::tools::load_rgb;
use rust_isbn::tools::synth::synthesize_image;
use rust_isbn::{Parity, ScanConfig, ScanError, Scanner, scan_image};

const GOPL: [u8; 13] = [9, 7, 8, 0, 1, 3, 4, 1, 9, 0, 4, 4, 0];

fn scanner() -> Scanner {
    let _ = env_logger::builder().is_test(true).try_init();
    Scanner::with_config(ScanConfig::default())
}

/// Test decoding the reference ISBN scan
#[test]
fn test_decode_reference_image() {
    let img_path = "testdata/test-gopl.png";
    if !std::path::Path::new(img_path).exists() {
        eprintln!("Skipping test: {} not found", img_path);
        return;
    }

    let (rgb, width, height) = load_rgb(img_path).expect("Failed to load image");
    let barcode = scanner()
        .scan(&rgb, width, height)
        .expect("could not scan image");
    assert_eq!(barcode.digits(), &GOPL);
    assert!(barcode.checksum_is_valid());
}

#[test]
fn test_decode_synthetic_reference() {
    let img = synthesize_image(&GOPL, 3, 30, 90).unwrap();
    let barcode = scan_image(&DynamicImage::ImageRgb8(img)).unwrap();
    assert_eq!(barcode.digits(), &GOPL);
    assert_eq!(barcode.to_string(), "9780134190440");
    assert!(barcode.is_isbn());
    assert!(barcode.checksum_is_valid());
}

#[test]
fn test_decode_colored_noisy_print() {
    // Dark blue ink on a cream background, with intensity jitter that stays
    // on the right side of the threshold
    let clean = synthesize_image(&GOPL, 4, 40, 60).unwrap();
    let noisy = RgbImage::from_fn(clean.width(), clean.height(), |x, y| {
        let jitter = ((x * 31 + y * 17) % 40) as u8;
        if clean.get_pixel(x, y).0[0] == 0 {
            Rgb([10 + jitter, 20 + jitter, 90 + jitter])
        } else {
            Rgb([250 - jitter, 240 - jitter, 190 - jitter])
        }
    });

    let barcode = scanner()
        .scan_image(&DynamicImage::ImageRgb8(noisy))
        .unwrap();
    assert_eq!(barcode.digits(), &GOPL);
}

#[test]
fn test_all_white_fails_at_guards() {
    let img = RgbImage::from_pixel(200, 50, Rgb([255, 255, 255]));
    let err = scanner()
        .scan_image(&DynamicImage::ImageRgb8(img))
        .unwrap_err();
    assert!(matches!(err, ScanError::MalformedGuard { .. }), "{err}");
}

#[test]
fn test_all_black_fails_at_guards() {
    let img = RgbImage::from_pixel(200, 50, Rgb([0, 0, 0]));
    let err = scanner()
        .scan_image(&DynamicImage::ImageRgb8(img))
        .unwrap_err();
    assert!(matches!(err, ScanError::MalformedGuard { .. }), "{err}");
}

#[test]
fn test_truncated_barcode_fails_after_guards() {
    // Crop away the right half: guards are found but there are too few bars
    let full = synthesize_image(&GOPL, 2, 20, 20).unwrap();
    let cropped = image::imageops::crop_imm(&full, 0, 0, 20 + 50 * 2, 20).to_image();
    let err = scanner()
        .scan_image(&DynamicImage::ImageRgb8(cropped))
        .unwrap_err();
    assert!(matches!(err, ScanError::TooFewBars { .. }), "{err}");
}

#[test]
fn test_explicit_row() {
    // Barcode only in the top third; the midpoint is blank
    let code = synthesize_image(&GOPL, 2, 20, 10).unwrap();
    let mut img = RgbImage::from_pixel(code.width(), 30, Rgb([255, 255, 255]));
    image::imageops::replace(&mut img, &code, 0, 0);
    let img = DynamicImage::ImageRgb8(img);

    assert!(scanner().scan_image(&img).is_err());

    let at_top = Scanner::with_config(ScanConfig::default().row(5));
    assert_eq!(at_top.scan_image(&img).unwrap().digits(), &GOPL);

    let report = at_top.inspect(&img).unwrap();
    assert_eq!(report.row(), 5);
    assert_eq!(report.bars.len(), 59);

    let outside = Scanner::with_config(ScanConfig::default().row(30));
    assert!(matches!(
        outside.scan_image(&img),
        Err(ScanError::RowOutOfBounds { row: 30, height: 30 })
    ));
}

fn digits_strategy() -> impl Strategy<Value = [u8; 13]> {
    prop::array::uniform13(0u8..10)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn synthetic_roundtrip(digits in digits_strategy(), module in 1usize..5) {
        let img = synthesize_image(&digits, module, 10 * module, 8).unwrap();
        let cfg = ScanConfig::default().parity(Parity::Detect);
        let barcode = Scanner::with_config(cfg)
            .scan_image(&DynamicImage::ImageRgb8(img))
            .unwrap();
        prop_assert_eq!(barcode.digits(), &digits[..]);
    }
}
