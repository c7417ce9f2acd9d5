//! Arithmetic mean color over a clamped pixel rectangle

use crate::io::configuration::FALLBACK_COLOR;
use image::{Rgb, RgbImage};

/// Mean color of the half-open pixel rectangle `[x0, x1) × [y0, y1)`
///
/// Each bound is clamped independently to the image dimensions before
/// sampling, so the function never reads outside the image and never panics,
/// whatever the input coordinates. Channel means use integer accumulation
/// with truncating division. A region that is empty after clamping (fully
/// out of bounds, inverted, or zero-area) yields the fixed fallback color.
pub fn average_color(image: &RgbImage, x0: i64, y0: i64, x1: i64, y1: i64) -> Rgb<u8> {
    let (width, height) = image.dimensions();
    let x0 = x0.clamp(0, i64::from(width));
    let x1 = x1.clamp(0, i64::from(width));
    let y0 = y0.clamp(0, i64::from(height));
    let y1 = y1.clamp(0, i64::from(height));

    if x0 >= x1 || y0 >= y1 {
        return FALLBACK_COLOR;
    }

    let mut red_sum: u64 = 0;
    let mut green_sum: u64 = 0;
    let mut blue_sum: u64 = 0;

    for y in y0..y1 {
        for x in x0..x1 {
            let Rgb([r, g, b]) = *image.get_pixel(x as u32, y as u32);
            red_sum += u64::from(r);
            green_sum += u64::from(g);
            blue_sum += u64::from(b);
        }
    }

    let count = ((x1 - x0) * (y1 - y0)) as u64;

    Rgb([
        (red_sum / count) as u8,
        (green_sum / count) as u8,
        (blue_sum / count) as u8,
    ])
}
