//! bmpfilter - Image filters for 24-bit bitmaps
//!
//! Reads an uncompressed 24-bit BMP file, applies one transform and writes
//! the result with the original headers.
//!
//! # Overview
//!
//! - [`filter`]: grayscale, sepia, reflect, box blur, Sobel edges
//! - [`io`]: BMP decoding and encoding
//! - [`cli`]: the `filter` command-line tool
//!
//! # Example
//!
//! ```
//! use bmpfilter::filter::FilterMode;
//! use bmpfilter::{Image, Rgb};
//!
//! let mut image = Image::filled(4, 4, Rgb::new(30, 60, 90)).unwrap();
//! FilterMode::Grayscale.apply(&mut image);
//! assert_eq!(image.get_pixel(0, 0), Some(Rgb::gray(60)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use bmpfilter_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use bmpfilter_filter as filter;
pub use bmpfilter_io as io;

pub mod cli;
