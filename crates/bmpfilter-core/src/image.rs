//! Image - The in-memory pixel buffer
//!
//! An `Image` is `height` rows of `width` [`Rgb`] triples, stored row-major
//! in a single owned `Vec`. Row `y` occupies `pixels[y * width..(y + 1) * width]`.
//!
//! # Ownership model
//!
//! The buffer has exactly one owner. Transforms borrow it mutably for the
//! length of one call; filters that need the unmodified input take a full
//! snapshot with [`Clone`] first.
//!
//! Zero-sized images are valid and hold an empty buffer.

use crate::Rgb;
use crate::error::{Error, Result};
use std::slice::{Chunks, ChunksMut};

/// Rectangular row-major buffer of color triples
///
/// # Examples
///
/// ```
/// use bmpfilter_core::{Image, Rgb};
///
/// let mut image = Image::new(4, 3).unwrap();
/// image.set_pixel(1, 2, Rgb::WHITE).unwrap();
/// assert_eq!(image.get_pixel(1, 2), Some(Rgb::WHITE));
/// assert_eq!(image.get_pixel(4, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Image {
    /// Create a black image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width * height` overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Rgb::BLACK)
    }

    /// Create an image with every pixel set to `color`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width * height` overflows `usize`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self> {
        let len = Self::pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; len],
        })
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self> {
        let expected = Self::pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    fn pixel_count(width: u32, height: u32) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Check whether `(x, y)` lies inside the image.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at `(x, y)`, or `None` if out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get the pixel at `(x, y)` without a coordinate check.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(x, y)` is outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.pixels[idx] = color;
        Ok(())
    }

    /// Set the pixel at `(x, y)` without a coordinate check.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// Borrow row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[Rgb] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    /// Mutably borrow row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [Rgb] {
        let start = self.index(0, y);
        let end = start + self.width as usize;
        &mut self.pixels[start..end]
    }

    /// Iterate over rows, top to bottom.
    ///
    /// Yields nothing for a zero-width image.
    pub fn rows(&self) -> Chunks<'_, Rgb> {
        // chunks() rejects a zero chunk size; an empty buffer yields no rows anyway.
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Mutably iterate over rows, top to bottom.
    pub fn rows_mut(&mut self) -> ChunksMut<'_, Rgb> {
        self.pixels.chunks_mut(self.width.max(1) as usize)
    }

    /// The whole buffer, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// The whole buffer, row-major, mutable.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Consume the image and return its buffer.
    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }
}
