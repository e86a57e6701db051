//! bmpfilter-io - Bitmap file reading and writing
//!
//! Decodes 24-bit uncompressed BMP files into an [`Image`](bmpfilter_core::Image)
//! and encodes them back with the original headers:
//!
//! - [`read_bmp`] / [`write_bmp`] work on any `Read` / `Write`
//! - [`read_bmp_file`] / [`write_bmp_file`] open the file for you
//!
//! Only `BITMAPINFOHEADER` files with 24 bits per pixel, no compression and
//! pixel data at offset 54 are accepted; anything else is rejected with a
//! specific [`IoError`] before pixel data is read.

pub mod bmp;
mod error;
pub mod header;

pub use bmp::{Bitmap, read_bmp, write_bmp};
pub use error::{IoError, IoResult};
pub use header::{BitmapFileHeader, BitmapInfoHeader};

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Read a bitmap from a file path.
pub fn read_bmp_file<P: AsRef<Path>>(path: P) -> IoResult<Bitmap> {
    let file = File::open(path.as_ref()).map_err(IoError::Io)?;
    read_bmp(BufReader::new(file))
}

/// Write a bitmap to a file path, creating or truncating it.
pub fn write_bmp_file<P: AsRef<Path>>(bitmap: &Bitmap, path: P) -> IoResult<()> {
    let file = File::create(path.as_ref()).map_err(IoError::Io)?;
    let mut writer = BufWriter::new(file);
    write_bmp(bitmap, &mut writer)?;
    writer.flush().map_err(IoError::Io)?;
    Ok(())
}
