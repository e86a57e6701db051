//! Color transform regression test
//!
//! Grayscale averaging and sepia toning over fixture images.

use bmpfilter_core::{Image, Rgb};
use bmpfilter_filter::{grayscale, grayscale_pixel, sepia, sepia_pixel};
use bmpfilter_test::{RegParams, gradient_image, uniform_image};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn grayscale_reg() {
    init();
    let mut rp = RegParams::new("grayscale");

    let src = gradient_image(7, 5);
    let mut gray = src.clone();
    grayscale(&mut gray);

    // --- Test 1: geometry is preserved ---
    rp.compare_values(7.0, gray.width() as f64, 0.0);
    rp.compare_values(5.0, gray.height() as f64, 0.0);

    // --- Test 2: every output pixel is gray and matches the per-pixel rule ---
    let all_gray = gray.pixels().iter().all(|p| p.is_gray());
    rp.check(all_gray, "grayscale output has a colored pixel");
    let per_pixel: Vec<Rgb> = src.pixels().iter().map(|&p| grayscale_pixel(p)).collect();
    rp.check(gray.pixels() == per_pixel.as_slice(), "grayscale differs from grayscale_pixel");

    // --- Test 3: idempotent ---
    let mut twice = gray.clone();
    grayscale(&mut twice);
    rp.compare_images(&gray, &twice);

    // --- Test 4: rounding of the channel mean ---
    let mut image = uniform_image(2, 2, Rgb::new(30, 60, 91));
    grayscale(&mut image);
    rp.compare_images(&uniform_image(2, 2, Rgb::gray(60)), &image);
    let mut image = uniform_image(1, 1, Rgb::new(0, 1, 1));
    grayscale(&mut image);
    rp.compare_values(1.0, image.get_pixel_unchecked(0, 0).red as f64, 0.0);

    assert!(rp.cleanup(), "grayscale regression test failed");
}

#[test]
fn sepia_reg() {
    init();
    let mut rp = RegParams::new("sepia");

    // --- Test 1: black stays black, white saturates red and green ---
    let mut black = uniform_image(3, 2, Rgb::BLACK);
    sepia(&mut black);
    rp.compare_images(&uniform_image(3, 2, Rgb::BLACK), &black);

    let mut white = uniform_image(3, 2, Rgb::WHITE);
    sepia(&mut white);
    rp.compare_images(&uniform_image(3, 2, Rgb::new(255, 255, 239)), &white);

    // --- Test 2: mid gray ---
    rp.check(
        sepia_pixel(Rgb::gray(100)) == Rgb::new(135, 120, 94),
        "sepia of gray 100",
    );

    // --- Test 3: whole-image pass equals the per-pixel rule ---
    let src = gradient_image(9, 4);
    let mut toned = src.clone();
    sepia(&mut toned);
    let expected = Image::from_pixels(
        9,
        4,
        src.pixels().iter().map(|&p| sepia_pixel(p)).collect(),
    )
    .expect("from_pixels");
    rp.compare_images(&expected, &toned);

    // --- Test 4: red >= green >= blue for every output pixel ---
    let ordered = toned
        .pixels()
        .iter()
        .all(|p| p.red >= p.green && p.green >= p.blue);
    rp.check(ordered, "sepia channel ordering");

    assert!(rp.cleanup(), "sepia regression test failed");
}
