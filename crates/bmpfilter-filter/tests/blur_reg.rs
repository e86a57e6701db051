//! Box blur regression test
//!
//! The 3x3 window only averages neighbors that exist, so border pixels
//! divide by 4 or 6 and interior pixels by 9.

use bmpfilter_core::Rgb;
use bmpfilter_filter::box_blur;
use bmpfilter_test::{RegParams, gradient_image, single_pixel_image, uniform_image};

#[test]
fn blur_reg() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rp = RegParams::new("blur");

    // --- Test 1: uniform images are fixed points, borders included ---
    for color in [Rgb::BLACK, Rgb::WHITE, Rgb::new(12, 200, 77)] {
        let src = uniform_image(6, 4, color);
        let mut blurred = src.clone();
        box_blur(&mut blurred);
        rp.compare_images(&src, &blurred);
    }

    // --- Test 2: a single white pixel spreads over its 3x3 neighborhood ---
    let mut image = single_pixel_image(5, 5, 2, 2, Rgb::WHITE);
    box_blur(&mut image);
    let spread = Rgb::gray(28); // round(255 / 9)
    for y in 0..5u32 {
        for x in 0..5u32 {
            let near = x.abs_diff(2) <= 1 && y.abs_diff(2) <= 1;
            let expected = if near { spread } else { Rgb::BLACK };
            rp.check(
                image.get_pixel(x, y) == Some(expected),
                &format!("blurred single pixel at ({}, {})", x, y),
            );
        }
    }

    // --- Test 3: 2x2 image, every window is the whole image ---
    let mut image = single_pixel_image(2, 2, 1, 1, Rgb::WHITE);
    box_blur(&mut image);
    rp.compare_images(&uniform_image(2, 2, Rgb::gray(64)), &image); // round(63.75)

    // --- Test 4: blur never leaves the input range ---
    let src = gradient_image(9, 7);
    let mut blurred = src.clone();
    box_blur(&mut blurred);
    let max_red = src.pixels().iter().map(|p| p.red).max().unwrap_or(0);
    let min_red = src.pixels().iter().map(|p| p.red).min().unwrap_or(0);
    let in_range = blurred
        .pixels()
        .iter()
        .all(|p| p.red >= min_red && p.red <= max_red);
    rp.check(in_range, "blurred red channel out of input range");

    assert!(rp.cleanup(), "blur regression test failed");
}
