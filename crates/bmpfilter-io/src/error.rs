//! I/O error types
//!
//! Provides a unified error type for bitmap reading and writing. Header
//! validation failures each get their own variant so callers can report
//! exactly which check a file failed.

use thiserror::Error;

/// Error type for bitmap I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, truncated data, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The type tag is not "BM"
    #[error("not a BMP file: type tag {0:#06x}")]
    NotBitmap(u16),

    /// Pixel data does not start right after the two headers
    #[error("unsupported pixel data offset: {0}")]
    UnsupportedOffset(u32),

    /// Info header is not a 40-byte BITMAPINFOHEADER
    #[error("unsupported BMP header size: {0}")]
    UnsupportedHeaderSize(u32),

    /// Only 24 bits per pixel is supported
    #[error("unsupported BMP bit depth: {0}")]
    UnsupportedBitDepth(u16),

    /// Only uncompressed (BI_RGB) pixel data is supported
    #[error("unsupported BMP compression: {0}")]
    Compressed(u32),

    /// The header is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// An error from the core library (e.g. dimensions overflow)
    #[error("core error: {0}")]
    Core(#[from] bmpfilter_core::Error),
}

impl IoError {
    /// True if the error describes the file's content rather than the
    /// ability to read or write it.
    ///
    /// Truncated pixel data counts as a format error.
    pub fn is_format_error(&self) -> bool {
        match self {
            IoError::Io(e) => e.kind() == std::io::ErrorKind::UnexpectedEof,
            _ => true,
        }
    }
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
