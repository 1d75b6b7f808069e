//! Guard location by direct scans from both ends of the scanline

use crate::error::{Result, ScanError};
use crate::models::{Bar, Color, Guard, Guards, Side};

/// Locate the left and right `black, white, black` guards
pub fn locate_guards(samples: &[Color]) -> Result<Guards> {
    Ok(Guards {
        left: locate_left(samples)?,
        right: locate_right(samples)?,
    })
}

/// First black run, the white run after it, and the black run after that
pub fn locate_left(samples: &[Color]) -> Result<Guard> {
    let missing = |color| ScanError::MalformedGuard {
        side: Side::Left,
        color,
    };

    let b1 = find(samples, 0, Color::Black).ok_or(missing(Color::Black))?;
    let w1 = find(samples, b1, Color::White).ok_or(missing(Color::White))?;
    let b2 = find(samples, w1, Color::Black).ok_or(missing(Color::Black))?;
    // The closing run may touch the end of the row
    let end = find(samples, b2, Color::White).unwrap_or(samples.len());

    Ok(Guard::new([
        Bar::new(b1, w1, Color::Black),
        Bar::new(w1, b2, Color::White),
        Bar::new(b2, end, Color::Black),
    ]))
}

/// Last black run, the white run before it, and the black run before that
pub fn locate_right(samples: &[Color]) -> Result<Guard> {
    let missing = |color| ScanError::MalformedGuard {
        side: Side::Right,
        color,
    };

    let end = rfind(samples, samples.len(), Color::Black).ok_or(missing(Color::Black))?;
    let b2 = rfind(samples, end, Color::White).ok_or(missing(Color::White))?;
    let w1 = rfind(samples, b2, Color::Black).ok_or(missing(Color::Black))?;
    let b1 = rfind(samples, w1, Color::White).unwrap_or(0);

    Ok(Guard::new([
        Bar::new(b1, w1, Color::Black),
        Bar::new(w1, b2, Color::White),
        Bar::new(b2, end, Color::Black),
    ]))
}

/// Index of the first `color` sample at or after `from`
fn find(samples: &[Color], from: usize, color: Color) -> Option<usize> {
    samples[from..]
        .iter()
        .position(|&c| c == color)
        .map(|i| i + from)
}

/// One past the last `color` sample before `to`
fn rfind(samples: &[Color], to: usize, color: Color) -> Option<usize> {
    samples[..to].iter().rposition(|&c| c == color).map(|i| i + 1)
}
