use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::DynamicImage;
use rust_isbn::detector::segment::segment;
use rust_isbn::tools::synth::{synthesize_image, synthesize_row};
use rust_isbn::utils::binarization::threshold_row;
use rust_isbn::utils::grayscale::rgb_to_grayscale_parallel;
use rust_isbn::{ScanConfig, Scanner, decode_scanline};

const DIGITS: [u8; 13] = [9, 7, 8, 0, 1, 3, 4, 1, 9, 0, 4, 4, 0];

fn bench_segment(c: &mut Criterion) {
    let row = synthesize_row(&DIGITS, 4, 40).unwrap();
    let samples = threshold_row(&row, 128);
    c.bench_function("segment_460px", |b| {
        b.iter(|| segment(black_box(&samples)))
    });
}

fn bench_decode_scanline(c: &mut Criterion) {
    let row = synthesize_row(&DIGITS, 4, 40).unwrap();
    let samples = threshold_row(&row, 128);
    let config = ScanConfig::default();
    c.bench_function("decode_scanline_460px", |b| {
        b.iter(|| decode_scanline(black_box(&samples), black_box(&config)))
    });
}

fn bench_scan_image(c: &mut Criterion) {
    let img = DynamicImage::ImageRgb8(synthesize_image(&DIGITS, 4, 40, 300).unwrap());
    let scanner = Scanner::with_config(ScanConfig::default());
    c.bench_function("scan_image_460x300", |b| {
        b.iter(|| scanner.scan_image(black_box(&img)))
    });
}

fn bench_grayscale_parallel(c: &mut Criterion) {
    let img = synthesize_image(&DIGITS, 4, 40, 300).unwrap();
    let (w, h) = img.dimensions();
    let raw = img.into_raw();
    c.bench_function("rgb_to_grayscale_parallel_460x300", |b| {
        b.iter(|| rgb_to_grayscale_parallel(black_box(&raw), w as usize, h as usize))
    });
}

criterion_group!(
    benches,
    bench_segment,
    bench_decode_scanline,
    bench_scan_image,
    bench_grayscale_parallel
);
criterion_main!(benches);
