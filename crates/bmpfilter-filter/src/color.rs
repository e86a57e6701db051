//! Per-pixel color transforms
//!
//! - [`grayscale`]: each channel becomes the rounded mean of the three
//! - [`sepia`]: fixed 3x3 color matrix, saturated to `[0, 255]`
//!
//! Both depend only on the pixel itself, so they are applied in a single
//! pass over the buffer without a snapshot.

use bmpfilter_core::color::round_channel;
use bmpfilter_core::{Image, Rgb};
use log::debug;

/// Sepia color matrix. Row `i` produces output channel `i` (red, green,
/// blue) from the input `(red, green, blue)`.
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Gray value of one pixel: `round((r + g + b) / 3)`.
pub fn grayscale_pixel(pixel: Rgb) -> Rgb {
    let sum = pixel.red as u32 + pixel.green as u32 + pixel.blue as u32;
    Rgb::gray(round_channel(sum as f64 / 3.0))
}

/// Sepia tone of one pixel.
///
/// All three outputs are computed from the original channels.
pub fn sepia_pixel(pixel: Rgb) -> Rgb {
    let input = [pixel.red as f64, pixel.green as f64, pixel.blue as f64];
    let tone = |row: &[f64; 3]| {
        round_channel(row[0] * input[0] + row[1] * input[1] + row[2] * input[2])
    };
    Rgb::new(tone(&SEPIA[0]), tone(&SEPIA[1]), tone(&SEPIA[2]))
}

/// Convert an image to grayscale in place.
pub fn grayscale(image: &mut Image) {
    debug!("grayscale: {}x{}", image.width(), image.height());
    for pixel in image.pixels_mut() {
        *pixel = grayscale_pixel(*pixel);
    }
}

/// Apply the sepia tone in place.
pub fn sepia(image: &mut Image) {
    debug!("sepia: {}x{}", image.width(), image.height());
    for pixel in image.pixels_mut() {
        *pixel = sepia_pixel(*pixel);
    }
}
