//! BMP image format support
//!
//! Reads and writes 24-bit uncompressed Windows bitmaps. Rows are kept in
//! the order they appear in the file; the headers read from a file are
//! written back unchanged.

use crate::header::{
    BitmapFileHeader, BitmapInfoHeader, FILE_HEADER_SIZE, INFO_HEADER_SIZE, headers_for,
    row_padding, validate_headers,
};
use crate::{IoError, IoResult};
use bmpfilter_core::{Image, Rgb};
use log::{debug, warn};
use std::io::{ErrorKind, Read, Write};

/// A decoded bitmap: the original headers plus the pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// File header as read (or as built by [`Bitmap::from_image`])
    pub file_header: BitmapFileHeader,
    /// Info header as read (or as built by [`Bitmap::from_image`])
    pub info_header: BitmapInfoHeader,
    /// Pixel rows in file order
    pub image: Image,
}

impl Bitmap {
    /// Wrap an image with freshly built headers.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidData`] if the image is too large for the
    /// header fields.
    pub fn from_image(image: Image) -> IoResult<Self> {
        let (file_header, info_header) = headers_for(image.width(), image.height())?;
        Ok(Self {
            file_header,
            info_header,
            image,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Read a BMP image
///
/// The headers are validated before any pixel data is read. Per-row
/// padding is skipped.
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<Bitmap> {
    let mut file_bytes = [0u8; FILE_HEADER_SIZE];
    reader.read_exact(&mut file_bytes).map_err(IoError::Io)?;
    let file_header = BitmapFileHeader::from_bytes(&file_bytes);

    let mut info_bytes = [0u8; INFO_HEADER_SIZE];
    reader.read_exact(&mut info_bytes).map_err(IoError::Io)?;
    let info_header = BitmapInfoHeader::from_bytes(&info_bytes);

    validate_headers(&file_header, &info_header)?;

    let width = info_header.width()?;
    let height = info_header.height();
    if info_header.is_top_down() {
        warn!("top-down bitmap; rows are kept in file order");
    }

    let too_wide = || IoError::InvalidData(format!("row too wide: {width} pixels"));
    let row_bytes = (width as usize).checked_mul(3).ok_or_else(too_wide)?;
    let row_len = row_bytes
        .checked_add(row_padding(width))
        .ok_or_else(too_wide)?;

    // Buffers grow with the data actually read, never with the header's
    // claims, so a lying header ends in UnexpectedEof instead of a huge
    // allocation.
    let mut row_buffer = Vec::new();
    let mut pixels = Vec::new();
    if row_len > 0 {
        for _ in 0..height {
            row_buffer.clear();
            reader
                .by_ref()
                .take(row_len as u64)
                .read_to_end(&mut row_buffer)
                .map_err(IoError::Io)?;
            if row_buffer.len() < row_len {
                return Err(IoError::Io(std::io::Error::new(
                    ErrorKind::UnexpectedEof,
                    format!("pixel row truncated: {} of {} bytes", row_buffer.len(), row_len),
                )));
            }
            pixels.extend(
                row_buffer[..row_bytes]
                    .chunks_exact(3)
                    .map(|bgr| Rgb::from_bgr([bgr[0], bgr[1], bgr[2]])),
            );
        }
    }

    let image = Image::from_pixels(width, height, pixels)?;
    debug!("read_bmp: decoded {}x{}", width, height);

    Ok(Bitmap {
        file_header,
        info_header,
        image,
    })
}

/// Write a BMP image
///
/// Both headers are written exactly as stored in `bitmap`, followed by the
/// pixel rows with zero padding.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if the info header's dimensions do not
/// match the image.
pub fn write_bmp<W: Write>(bitmap: &Bitmap, mut writer: W) -> IoResult<()> {
    let image = &bitmap.image;
    let width = bitmap.info_header.width()?;
    let height = bitmap.info_header.height();
    if width != image.width() || height != image.height() {
        return Err(IoError::InvalidData(format!(
            "header says {}x{} but image is {}x{}",
            width,
            height,
            image.width(),
            image.height()
        )));
    }

    writer
        .write_all(&bitmap.file_header.to_bytes())
        .map_err(IoError::Io)?;
    writer
        .write_all(&bitmap.info_header.to_bytes())
        .map_err(IoError::Io)?;

    let padding = row_padding(width);
    let mut row_buffer = Vec::with_capacity(width as usize * 3 + padding);
    for row in image.rows() {
        row_buffer.clear();
        for pixel in row {
            row_buffer.extend_from_slice(&pixel.to_bgr());
        }
        row_buffer.resize(row_buffer.len() + padding, 0);
        writer.write_all(&row_buffer).map_err(IoError::Io)?;
    }

    debug!("write_bmp: encoded {}x{}", width, height);
    Ok(())
}
