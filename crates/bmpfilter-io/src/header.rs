//! BMP header records
//!
//! `BITMAPFILEHEADER` (14 bytes) and `BITMAPINFOHEADER` (40 bytes), both
//! little-endian and unpadded. Each field is decoded from its own byte
//! range, so the in-memory struct layout never has to match the file.

use crate::{IoError, IoResult};
use log::debug;

/// "BM" read as a little-endian `u16`
pub const BMP_TYPE: u16 = 0x4d42;
/// Size of `BITMAPFILEHEADER` on disk
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of `BITMAPINFOHEADER` on disk
pub const INFO_HEADER_SIZE: usize = 40;
/// Pixel data offset when nothing sits between the headers and the pixels
pub const PIXEL_DATA_OFFSET: u32 = (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as u32;
/// The only supported bit depth
pub const BITS_PER_PIXEL: u16 = 24;
/// `BI_RGB`: uncompressed pixel data
pub const COMPRESSION_NONE: u32 = 0;

#[inline]
fn u16_at(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

#[inline]
fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[inline]
fn i32_at(bytes: &[u8], offset: usize) -> i32 {
    u32_at(bytes, offset) as i32
}

#[inline]
fn put(bytes: &mut [u8], offset: usize, value: &[u8]) {
    bytes[offset..offset + value.len()].copy_from_slice(value);
}

/// Bytes per row including the padding that aligns rows to 4 bytes.
pub fn row_stride(width: u32) -> usize {
    (width as usize * 3).div_ceil(4) * 4
}

/// Padding bytes after each row of `width` 24-bit pixels.
pub fn row_padding(width: u32) -> usize {
    (4 - (width as usize * 3) % 4) % 4
}

/// `BITMAPFILEHEADER`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFileHeader {
    /// File type tag, "BM"
    pub bf_type: u16,
    /// Total file size in bytes
    pub bf_size: u32,
    /// Reserved
    pub bf_reserved1: u16,
    /// Reserved
    pub bf_reserved2: u16,
    /// Offset from the start of the file to the pixel data
    pub bf_off_bits: u32,
}

impl BitmapFileHeader {
    /// Decode from the 14 bytes at the start of the file.
    pub fn from_bytes(bytes: &[u8; FILE_HEADER_SIZE]) -> Self {
        Self {
            bf_type: u16_at(bytes, 0),
            bf_size: u32_at(bytes, 2),
            bf_reserved1: u16_at(bytes, 6),
            bf_reserved2: u16_at(bytes, 8),
            bf_off_bits: u32_at(bytes, 10),
        }
    }

    /// Encode to the on-disk layout.
    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE] {
        let mut out = [0u8; FILE_HEADER_SIZE];
        put(&mut out, 0, &self.bf_type.to_le_bytes());
        put(&mut out, 2, &self.bf_size.to_le_bytes());
        put(&mut out, 6, &self.bf_reserved1.to_le_bytes());
        put(&mut out, 8, &self.bf_reserved2.to_le_bytes());
        put(&mut out, 10, &self.bf_off_bits.to_le_bytes());
        out
    }
}

/// `BITMAPINFOHEADER`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapInfoHeader {
    /// Size of this header, 40
    pub bi_size: u32,
    /// Width in pixels
    pub bi_width: i32,
    /// Height in pixels; negative for top-down row order
    pub bi_height: i32,
    /// Color planes, 1
    pub bi_planes: u16,
    /// Bits per pixel
    pub bi_bit_count: u16,
    /// Compression scheme
    pub bi_compression: u32,
    /// Size of the pixel data in bytes (may be 0 for BI_RGB)
    pub bi_size_image: u32,
    /// Horizontal resolution, pixels per meter
    pub bi_x_pels_per_meter: i32,
    /// Vertical resolution, pixels per meter
    pub bi_y_pels_per_meter: i32,
    /// Palette entries used
    pub bi_clr_used: u32,
    /// Palette entries required
    pub bi_clr_important: u32,
}

impl BitmapInfoHeader {
    /// Decode from the 40 bytes following the file header.
    pub fn from_bytes(bytes: &[u8; INFO_HEADER_SIZE]) -> Self {
        Self {
            bi_size: u32_at(bytes, 0),
            bi_width: i32_at(bytes, 4),
            bi_height: i32_at(bytes, 8),
            bi_planes: u16_at(bytes, 12),
            bi_bit_count: u16_at(bytes, 14),
            bi_compression: u32_at(bytes, 16),
            bi_size_image: u32_at(bytes, 20),
            bi_x_pels_per_meter: i32_at(bytes, 24),
            bi_y_pels_per_meter: i32_at(bytes, 28),
            bi_clr_used: u32_at(bytes, 32),
            bi_clr_important: u32_at(bytes, 36),
        }
    }

    /// Encode to the on-disk layout.
    pub fn to_bytes(&self) -> [u8; INFO_HEADER_SIZE] {
        let mut out = [0u8; INFO_HEADER_SIZE];
        put(&mut out, 0, &self.bi_size.to_le_bytes());
        put(&mut out, 4, &self.bi_width.to_le_bytes());
        put(&mut out, 8, &self.bi_height.to_le_bytes());
        put(&mut out, 12, &self.bi_planes.to_le_bytes());
        put(&mut out, 14, &self.bi_bit_count.to_le_bytes());
        put(&mut out, 16, &self.bi_compression.to_le_bytes());
        put(&mut out, 20, &self.bi_size_image.to_le_bytes());
        put(&mut out, 24, &self.bi_x_pels_per_meter.to_le_bytes());
        put(&mut out, 28, &self.bi_y_pels_per_meter.to_le_bytes());
        put(&mut out, 32, &self.bi_clr_used.to_le_bytes());
        put(&mut out, 36, &self.bi_clr_important.to_le_bytes());
        out
    }

    /// Image width in pixels.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidData`] for a negative width.
    pub fn width(&self) -> IoResult<u32> {
        u32::try_from(self.bi_width)
            .map_err(|_| IoError::InvalidData(format!("negative width: {}", self.bi_width)))
    }

    /// Image height in pixels, regardless of row order.
    pub fn height(&self) -> u32 {
        self.bi_height.unsigned_abs()
    }

    /// True when rows are stored top row first.
    pub fn is_top_down(&self) -> bool {
        self.bi_height < 0
    }
}

/// Check that a header pair describes a 24-bit uncompressed bitmap whose
/// pixels start right after the headers.
///
/// Checks run in a fixed order (type tag, offset, header size, bit depth,
/// compression) and the first failure is returned.
pub fn validate_headers(file: &BitmapFileHeader, info: &BitmapInfoHeader) -> IoResult<()> {
    if file.bf_type != BMP_TYPE {
        return Err(IoError::NotBitmap(file.bf_type));
    }
    if file.bf_off_bits != PIXEL_DATA_OFFSET {
        return Err(IoError::UnsupportedOffset(file.bf_off_bits));
    }
    if info.bi_size != INFO_HEADER_SIZE as u32 {
        return Err(IoError::UnsupportedHeaderSize(info.bi_size));
    }
    if info.bi_bit_count != BITS_PER_PIXEL {
        return Err(IoError::UnsupportedBitDepth(info.bi_bit_count));
    }
    if info.bi_compression != COMPRESSION_NONE {
        return Err(IoError::Compressed(info.bi_compression));
    }
    info.width()?;

    debug!(
        "bmp header: {}x{} top_down={} file_size={}",
        info.bi_width,
        info.bi_height,
        info.is_top_down(),
        file.bf_size
    );
    Ok(())
}

/// Build a valid header pair for a new `width` x `height` image.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if the dimensions or file size do not
/// fit the header fields.
pub fn headers_for(width: u32, height: u32) -> IoResult<(BitmapFileHeader, BitmapInfoHeader)> {
    let too_large = || IoError::InvalidData(format!("image too large for BMP: {width}x{height}"));

    let bi_width = i32::try_from(width).map_err(|_| too_large())?;
    let bi_height = i32::try_from(height).map_err(|_| too_large())?;
    let image_size = row_stride(width)
        .checked_mul(height as usize)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(too_large)?;
    let file_size = image_size
        .checked_add(PIXEL_DATA_OFFSET)
        .ok_or_else(too_large)?;

    let file = BitmapFileHeader {
        bf_type: BMP_TYPE,
        bf_size: file_size,
        bf_reserved1: 0,
        bf_reserved2: 0,
        bf_off_bits: PIXEL_DATA_OFFSET,
    };
    let info = BitmapInfoHeader {
        bi_size: INFO_HEADER_SIZE as u32,
        bi_width,
        bi_height,
        bi_planes: 1,
        bi_bit_count: BITS_PER_PIXEL,
        bi_compression: COMPRESSION_NONE,
        bi_size_image: image_size,
        bi_x_pels_per_meter: 2835,
        bi_y_pels_per_meter: 2835,
        bi_clr_used: 0,
        bi_clr_important: 0,
    };
    Ok((file, info))
}
