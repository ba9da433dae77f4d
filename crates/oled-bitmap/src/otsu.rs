//! Automatic threshold selection with Otsu's method.
//!
//! Scans all 256 candidate thresholds over a grayscale histogram and picks
//! the one maximizing between-class variance. Ties resolve to the lowest
//! candidate, and a single-intensity image yields 0.

use image::GrayImage;

/// Compute the Otsu threshold for a grayscale image.
///
/// The returned value splits pixels into background (`<= threshold`) and
/// foreground (`> threshold`) so that the variance between the two classes
/// is maximal.
pub fn otsu_threshold(img: &GrayImage) -> u8 {
    let mut hist = [0u32; 256];
    for pixel in img.pixels() {
        hist[pixel.0[0] as usize] += 1;
    }

    let total = img.width() as u64 * img.height() as u64;
    let mut sum_total = 0u64;
    for (i, &count) in hist.iter().enumerate() {
        sum_total += (i as u64) * (count as u64);
    }

    let mut sum_b = 0u64;
    let mut w_b = 0u64;
    let mut max_var = 0f64;
    let mut threshold = 0u8;

    for (i, &count) in hist.iter().enumerate() {
        w_b += count as u64;
        if w_b == 0 {
            continue;
        }
        let w_f = total - w_b;
        if w_f == 0 {
            break;
        }
        sum_b += (i as u64) * (count as u64);
        let m_b = sum_b as f64 / w_b as f64;
        let m_f = (sum_total - sum_b) as f64 / w_f as f64;
        let var_between = (w_b as f64) * (w_f as f64) * (m_b - m_f).powi(2);
        if var_between > max_var {
            max_var = var_between;
            threshold = i as u8;
        }
    }

    threshold
}
