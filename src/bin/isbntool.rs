use clap::{Args, Parser, Subcommand};
use log::{error, info};
use rayon::prelude::*;
use rust_isbn::detector::segment::segment;
use rust_isbn::tools::synth::{parse_digits, synthesize_image};
use rust_isbn::tools::{
    collect_images, grayscale_image, load_image, render_overlay, scanline_stats,
};
use rust_isbn::{Parity, ScanConfig, ScanReport, Scanner, Threshold};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "isbntool", version, about = "RustISBN CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read the barcode in one or more images
    Scan {
        #[arg(required = true)]
        images: Vec<PathBuf>,
        /// Write an annotated copy of the image here
        #[arg(long)]
        debug_out: Option<PathBuf>,
        #[command(flatten)]
        opts: ScanOpts,
    },
    /// Print scanline stats, guards and bars for an image
    Inspect {
        #[arg(long)]
        image: PathBuf,
        /// Write the grayscale rendering of the image here
        #[arg(long)]
        gray_out: Option<PathBuf>,
        #[command(flatten)]
        opts: ScanOpts,
    },
    /// Compute the reading rate over a directory of images
    Batch {
        #[arg(long)]
        root: PathBuf,
        #[arg(long)]
        limit: Option<usize>,
        #[command(flatten)]
        opts: ScanOpts,
    },
    /// Render a synthetic EAN-13 image
    Synth {
        /// 12 or 13 digits; dashes are ignored
        #[arg(long)]
        digits: String,
        #[arg(long)]
        out: PathBuf,
        /// Pixels per module
        #[arg(long, default_value_t = 3)]
        module: usize,
        #[arg(long, default_value_t = 120)]
        height: u32,
    },
}

#[derive(Args)]
struct ScanOpts {
    /// Row to scan instead of the vertical midpoint
    #[arg(long)]
    row: Option<u32>,
    /// Binarization threshold (0-255) or "otsu"
    #[arg(long, value_parser = parse_threshold)]
    threshold: Option<Threshold>,
    /// Derive the left-half parity from the image instead of assuming ISBN
    #[arg(long)]
    detect_parity: bool,
    /// Reject barcodes with a wrong check digit
    #[arg(long)]
    verify_checksum: bool,
}

impl ScanOpts {
    fn scanner(&self) -> Scanner {
        let mut config = ScanConfig::from_env();
        if let Some(row) = self.row {
            config = config.row(row);
        }
        if let Some(threshold) = self.threshold {
            config = config.threshold(threshold);
        }
        if self.detect_parity {
            config = config.parity(Parity::Detect);
        }
        if self.verify_checksum {
            config = config.verify_checksum(true);
        }
        Scanner::with_config(config)
    }
}

fn parse_threshold(s: &str) -> Result<Threshold, String> {
    Threshold::parse(s).ok_or_else(|| format!("invalid threshold: {s}"))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let ok = match cli.command {
        Command::Scan {
            images,
            debug_out,
            opts,
        } => scan_cmd(&images, debug_out.as_deref(), &opts.scanner()),
        Command::Inspect {
            image,
            gray_out,
            opts,
        } => inspect_cmd(&image, gray_out.as_deref(), &opts.scanner()),
        Command::Batch { root, limit, opts } => batch_cmd(&root, limit, &opts.scanner()),
        Command::Synth {
            digits,
            out,
            module,
            height,
        } => synth_cmd(&digits, &out, module, height),
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn scan_cmd(images: &[PathBuf], debug_out: Option<&Path>, scanner: &Scanner) -> bool {
    let mut ok = true;
    for path in images {
        let img = match load_image(path) {
            Ok(img) => img,
            Err(err) => {
                error!("could not open {}: {}", path.display(), err);
                ok = false;
                continue;
            }
        };

        let report = match scanner.inspect(&img) {
            Ok(report) => report,
            Err(err) => {
                error!("could not scan {}: {}", path.display(), err);
                ok = false;
                continue;
            }
        };

        match &report.result {
            Ok(barcode) => println!("{}: {}", path.display(), barcode),
            Err(err) => {
                error!("could not decode barcode in {}: {}", path.display(), err);
                ok = false;
            }
        }

        if let Some(out) = debug_out {
            write_overlay(&img.to_rgb8(), &report, out);
        }
    }
    ok
}

fn write_overlay(src: &image::RgbImage, report: &ScanReport, out: &Path) {
    match render_overlay(src, report).save(out) {
        Ok(()) => info!("wrote debug overlay to {}", out.display()),
        Err(err) => error!("could not write {}: {}", out.display(), err),
    }
}

fn inspect_cmd(image: &Path, gray_out: Option<&Path>, scanner: &Scanner) -> bool {
    let img = match load_image(image) {
        Ok(img) => img,
        Err(err) => {
            error!("could not open {}: {}", image.display(), err);
            return false;
        }
    };

    println!("Image: {} ({}x{})", image.display(), img.width(), img.height());

    if let Some(out) = gray_out {
        match grayscale_image(&img.to_rgb8()).save(out) {
            Ok(()) => info!("wrote grayscale image to {}", out.display()),
            Err(err) => error!("could not write {}: {}", out.display(), err),
        }
    }

    let report = match scanner.inspect(&img) {
        Ok(report) => report,
        Err(err) => {
            error!("could not scan {}: {}", image.display(), err);
            return false;
        }
    };

    let samples = report.scanline.samples();
    let stats = scanline_stats(samples);
    println!(
        "Row {}: black_pixels={} total={} runs={}",
        report.row(),
        stats.black_pixels,
        stats.total_pixels,
        stats.runs
    );

    match &report.guards {
        Some(guards) => {
            for (name, guard) in [("left", guards.left), ("right", guards.right)] {
                let spans: Vec<String> = guard
                    .bars
                    .iter()
                    .map(|b| format!("{}..{}", b.start, b.end))
                    .collect();
                println!(
                    "  {} guard: [{}] module={:.2}px",
                    name,
                    spans.join(", "),
                    guard.module_width()
                );
            }
        }
        None => println!("  guards not found"),
    }

    if report.bars.is_empty() {
        if let Ok(bars) = segment(samples) {
            println!("  {} runs on the full row", bars.len());
        }
    } else {
        let widths: Vec<String> = report.bars.iter().map(|b| b.len().to_string()).collect();
        println!("  {} bars: {}", report.bars.len(), widths.join(" "));
    }

    match &report.result {
        Ok(barcode) => {
            println!("  barcode: {}", barcode);
            println!(
                "  checksum: {}",
                if barcode.checksum_is_valid() { "ok" } else { "mismatch" }
            );
            true
        }
        Err(err) => {
            println!("  error: {}", err);
            false
        }
    }
}

fn batch_cmd(root: &Path, limit: Option<usize>, scanner: &Scanner) -> bool {
    let images = collect_images(root, limit);
    if images.is_empty() {
        error!("no images found under {}", root.display());
        return false;
    }

    let start = Instant::now();
    let results: Vec<(PathBuf, Result<String, String>)> = images
        .into_par_iter()
        .map(|path| {
            let outcome = load_image(&path)
                .and_then(|img| scanner.scan_image(&img))
                .map(|bc| bc.to_string())
                .map_err(|err| err.to_string());
            (path, outcome)
        })
        .collect();
    let elapsed = start.elapsed();

    let mut decoded = 0;
    for (path, outcome) in &results {
        match outcome {
            Ok(barcode) => {
                decoded += 1;
                println!("{}: {}", path.display(), barcode);
            }
            Err(err) => println!("{}: FAILED ({})", path.display(), err),
        }
    }

    let rate = decoded as f64 / results.len() as f64 * 100.0;
    println!(
        "Reading rate: {}/{} = {:.2}% in {:.2?}",
        decoded,
        results.len(),
        rate,
        elapsed
    );
    true
}

fn synth_cmd(digits: &str, out: &Path, module: usize, height: u32) -> bool {
    let Some(parsed) = parse_digits(digits) else {
        error!("expected 12 or 13 digits, got {:?}", digits);
        return false;
    };
    let Some(img) = synthesize_image(&parsed, module.max(1), 10 * module.max(1), height) else {
        error!("could not encode {:?}", digits);
        return false;
    };
    match img.save(out) {
        Ok(()) => {
            info!("wrote {} to {}", digits, out.display());
            true
        }
        Err(err) => {
            error!("could not write {}: {}", out.display(), err);
            false
        }
    }
}
