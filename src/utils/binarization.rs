use crate::models::Color;

/// Threshold every sample of a grayscale row: values above `threshold` are
/// white, everything else is black
pub fn threshold_row(gray: &[u8], threshold: u8) -> Vec<Color> {
    gray.iter()
        .map(|&v| if v > threshold { Color::White } else { Color::Black })
        .collect()
}

/// Calculate Otsu's optimal threshold for a set of samples
pub fn otsu_threshold(gray: &[u8]) -> u8 {
    // Build histogram
    let mut histogram = [0u32; 256];
    for &pixel in gray {
        histogram[pixel as usize] += 1;
    }

    let total_pixels = gray.len() as f64;
    let mut max_variance = 0.0;
    let mut optimal_threshold = 128u8;

    for threshold in 0..=255u32 {
        let mut class1_pixels = 0u32;
        let mut class1_sum = 0u64;
        let mut class2_pixels = 0u32;
        let mut class2_sum = 0u64;

        for intensity in 0..=255u32 {
            let count = histogram[intensity as usize];
            if intensity <= threshold {
                class1_pixels += count;
                class1_sum += count as u64 * intensity as u64;
            } else {
                class2_pixels += count;
                class2_sum += count as u64 * intensity as u64;
            }
        }

        if class1_pixels == 0 || class2_pixels == 0 {
            continue;
        }

        let class1_mean = class1_sum as f64 / class1_pixels as f64;
        let class2_mean = class2_sum as f64 / class2_pixels as f64;

        let weight1 = class1_pixels as f64 / total_pixels;
        let weight2 = class2_pixels as f64 / total_pixels;

        let variance = weight1 * weight2 * (class1_mean - class2_mean).powi(2);

        if variance > max_variance {
            max_variance = variance;
            optimal_threshold = threshold as u8;
        }
    }

    optimal_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_row() {
        let row = threshold_row(&[100, 150, 128, 129, 0, 255], 128);
        assert_eq!(
            row,
            vec![
                Color::Black,
                Color::White,
                Color::Black,
                Color::White,
                Color::Black,
                Color::White
            ]
        );
    }

    #[test]
    fn test_otsu_threshold() {
        // Two-class row: dark and light samples
        let mut gray = vec![50u8; 50];
        gray.extend(vec![200u8; 50]);

        let t = otsu_threshold(&gray);
        assert!((50..200).contains(&t));
        let row = threshold_row(&gray, t);
        assert_eq!(row[0], Color::Black);
        assert_eq!(row[99], Color::White);
    }

    #[test]
    fn test_otsu_uniform_falls_back() {
        assert_eq!(otsu_threshold(&[128u8; 16]), 128);
    }
}
