//! Error types for bmpfilter-core
//!
//! Provides a unified error type for the image buffer operations that can
//! fail. Pixel transforms themselves are total and never produce one.

use thiserror::Error;

/// bmpfilter core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Image dimensions do not fit in memory
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinate outside the image
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Pixel buffer length does not match the dimensions
    #[error("buffer length mismatch: expected {expected} pixels, got {actual}")]
    BufferLength { expected: usize, actual: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
