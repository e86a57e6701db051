//! 3x3 box blur
//!
//! Each pixel becomes the unweighted average of itself and its in-bounds
//! neighbors. Out-of-bounds positions are dropped, so border pixels average
//! over fewer samples (6 along an edge, 4 in a corner) instead of being
//! darkened by phantom black pixels.

use crate::neighborhood::{BorderPolicy, window};
use bmpfilter_core::color::round_channel;
use bmpfilter_core::{Image, Rgb};
use log::debug;

/// Average the in-bounds 3x3 window of `src` around `(x, y)`.
fn window_mean(src: &Image, x: u32, y: u32) -> Rgb {
    let mut sum = [0u32; 3];
    let mut count = 0u32;

    for tap in window(src, x, y, BorderPolicy::Exclude) {
        sum[0] += tap.pixel.red as u32;
        sum[1] += tap.pixel.green as u32;
        sum[2] += tap.pixel.blue as u32;
        count += 1;
    }

    // The center is always in bounds
    let n = count as f64;
    Rgb::new(
        round_channel(sum[0] as f64 / n),
        round_channel(sum[1] as f64 / n),
        round_channel(sum[2] as f64 / n),
    )
}

/// Apply a 3x3 box blur in place.
///
/// All reads come from a snapshot of the input, so the result does not
/// depend on the order pixels are visited.
pub fn box_blur(image: &mut Image) {
    let w = image.width();
    let h = image.height();
    debug!("box_blur: {}x{}", w, h);

    if image.is_empty() {
        return;
    }

    let src = image.clone();
    for y in 0..h {
        for x in 0..w {
            image.set_pixel_unchecked(x, y, window_mean(&src, x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_uniform_unchanged() {
        let color = Rgb::new(12, 200, 99);
        for (w, h) in [(1, 1), (2, 2), (3, 5), (7, 4)] {
            let mut image = Image::filled(w, h, color).unwrap();
            box_blur(&mut image);
            assert!(image.pixels().iter().all(|&p| p == color), "{}x{}", w, h);
        }
    }

    #[test]
    fn test_blur_3x3_known_values() {
        // 10 20 30
        // 40 50 60
        // 70 80 90
        let pixels = (1..=9).map(|v| Rgb::gray(v * 10)).collect();
        let mut image = Image::from_pixels(3, 3, pixels).unwrap();
        box_blur(&mut image);

        // Corner (0,0): (10+20+40+50)/4 = 30
        assert_eq!(image.get_pixel(0, 0), Some(Rgb::gray(30)));
        // Edge (1,0): (10+20+30+40+50+60)/6 = 35
        assert_eq!(image.get_pixel(1, 0), Some(Rgb::gray(35)));
        // Center: 450/9 = 50
        assert_eq!(image.get_pixel(1, 1), Some(Rgb::gray(50)));
        // Corner (2,2): (50+60+80+90)/4 = 70
        assert_eq!(image.get_pixel(2, 2), Some(Rgb::gray(70)));
    }

    #[test]
    fn test_blur_rounds_to_nearest() {
        // Corner of a 2x2: (0 + 0 + 0 + 3) / 4 = 0.75 -> 1
        let mut image = Image::new(2, 2).unwrap();
        image.set_pixel(1, 1, Rgb::new(3, 2, 1)).unwrap();
        box_blur(&mut image);
        // 3/4 -> 1, 2/4 -> 1 (half away from zero), 1/4 -> 0
        assert_eq!(image.get_pixel(0, 0), Some(Rgb::new(1, 1, 0)));
    }

    #[test]
    fn test_blur_reads_snapshot() {
        // If the blur read its own output, the right pixel would see the
        // already-blurred left pixel instead of the original black.
        let pixels = vec![Rgb::WHITE, Rgb::BLACK];
        let mut image = Image::from_pixels(2, 1, pixels).unwrap();
        box_blur(&mut image);
        assert_eq!(image.get_pixel(0, 0), Some(Rgb::gray(128)));
        assert_eq!(image.get_pixel(1, 0), Some(Rgb::gray(128)));
    }

    #[test]
    fn test_blur_empty_is_noop() {
        let mut image = Image::new(0, 3).unwrap();
        box_blur(&mut image);
        assert!(image.is_empty());
    }
}
