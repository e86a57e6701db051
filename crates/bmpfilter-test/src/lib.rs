//! bmpfilter-test - Regression test support for bmpfilter
//!
//! Provides [`RegParams`], which records a sequence of checks and reports
//! every failure at the end, and a small set of deterministic fixture
//! images so tests do not depend on image files checked into the tree.
//!
//! # Usage
//!
//! ```ignore
//! use bmpfilter_test::{RegParams, gradient_image};
//!
//! let mut rp = RegParams::new("blur");
//! let image = gradient_image(8, 6);
//! rp.compare_values(8.0, image.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use bmpfilter_core::{Image, Rgb};
use bmpfilter_io::{Bitmap, read_bmp, write_bmp};
use std::fs;
use std::path::{Path, PathBuf};

/// A deterministic image where every channel varies with position.
///
/// Neighboring pixels differ in all three channels, so filters that mix
/// neighbors produce distinct output.
pub fn gradient_image(width: u32, height: u32) -> Image {
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                Rgb::new(
                    ((x * 37 + y * 11) % 256) as u8,
                    ((x * 13 + y * 41) % 256) as u8,
                    ((x * 7 + y * 3 + 100) % 256) as u8,
                )
            })
        })
        .collect();
    match Image::from_pixels(width, height, pixels) {
        Ok(image) => image,
        Err(e) => panic!("gradient_image {}x{}: {}", width, height, e),
    }
}

/// An image with every pixel set to `color`.
pub fn uniform_image(width: u32, height: u32, color: Rgb) -> Image {
    match Image::filled(width, height, color) {
        Ok(image) => image,
        Err(e) => panic!("uniform_image {}x{}: {}", width, height, e),
    }
}

/// Black image with one pixel of `color` at `(x, y)`.
pub fn single_pixel_image(width: u32, height: u32, x: u32, y: u32, color: Rgb) -> Image {
    let mut image = uniform_image(width, height, Rgb::BLACK);
    if let Err(e) = image.set_pixel(x, y, color) {
        panic!("single_pixel_image: {}", e);
    }
    image
}

/// Encode an image as BMP bytes with fresh headers.
pub fn encode_bmp(image: &Image) -> TestResult<Vec<u8>> {
    let bitmap = Bitmap::from_image(image.clone()).map_err(|e| TestError::ImageEncode {
        message: e.to_string(),
    })?;
    let mut buffer = Vec::new();
    write_bmp(&bitmap, &mut buffer).map_err(|e| TestError::ImageEncode {
        message: e.to_string(),
    })?;
    Ok(buffer)
}

/// Decode BMP bytes.
pub fn decode_bmp(data: &[u8]) -> TestResult<Bitmap> {
    read_bmp(data).map_err(|e| TestError::ImageDecode {
        message: e.to_string(),
    })
}

/// Write `image` as a BMP file named `name` inside `dir`.
pub fn write_test_bmp(dir: &Path, name: &str, image: &Image) -> TestResult<PathBuf> {
    let path = dir.join(name);
    let data = encode_bmp(image)?;
    fs::write(&path, data).map_err(|e| TestError::ImageWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(path)
}
