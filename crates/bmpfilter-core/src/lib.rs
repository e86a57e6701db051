//! bmpfilter Core - Basic data structures for the bitmap filters
//!
//! This crate provides the types every other bmpfilter crate builds on:
//!
//! - [`Image`] - A rectangular, row-major buffer of color triples
//! - [`Rgb`] - One 24-bit color triple
//! - [`color`] - Saturating clamp helpers shared by the pixel transforms

pub mod error;
pub mod image;
pub mod rgb;

pub use error::{Error, Result};
pub use image::Image;
pub use rgb::Rgb;

/// Channel clamping helpers.
///
/// All arithmetic on channel values is carried out in a wider type and
/// brought back to 8 bits through these functions, so results saturate
/// instead of wrapping.
pub mod color {
    /// Smallest channel value.
    pub const CHANNEL_MIN: i32 = 0;
    /// Largest channel value.
    pub const CHANNEL_MAX: i32 = 255;

    /// Map `value` to the nearest value in the inclusive range `[min, max]`.
    ///
    /// Values below `min` become `min`, values above `max` become `max`,
    /// in-range values are returned unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[inline]
    pub fn clamp(value: i32, min: i32, max: i32) -> i32 {
        assert!(min <= max, "clamp range is empty: [{min}, {max}]");
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    /// Saturate an integer to a channel value in `[0, 255]`.
    #[inline]
    pub fn clamp_channel(value: i32) -> u8 {
        clamp(value, CHANNEL_MIN, CHANNEL_MAX) as u8
    }

    /// Round a real channel value half away from zero and saturate it.
    ///
    /// NaN maps to 0.
    #[inline]
    pub fn round_channel(value: f64) -> u8 {
        let rounded = value.round();
        if rounded.is_nan() {
            return 0;
        }
        // Saturate before narrowing so huge magnitudes cannot overflow i32.
        let bounded = rounded.clamp(CHANNEL_MIN as f64, CHANNEL_MAX as f64);
        clamp_channel(bounded as i32)
    }

}
