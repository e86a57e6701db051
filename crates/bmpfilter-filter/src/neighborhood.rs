//! Boundary-safe 3x3 neighborhood sampling
//!
//! The spatial filters read a 3x3 window centered on each pixel. Near the
//! border part of that window falls outside the image, and the filters
//! disagree on what those positions mean:
//!
//! - box blur drops them from both the sum and the count ([`BorderPolicy::Exclude`])
//! - Sobel edge detection reads them as black ([`BorderPolicy::Black`])

use crate::Kernel;
use bmpfilter_core::{Image, Rgb};

/// How out-of-bounds window positions are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderPolicy {
    /// Skip positions outside the image
    Exclude,
    /// Treat positions outside the image as black (0, 0, 0)
    Black,
}

/// One sampled window position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tap {
    /// Kernel column, 0..3 (0 is the left neighbor)
    pub kx: usize,
    /// Kernel row, 0..3 (0 is the upper neighbor)
    pub ky: usize,
    /// Sampled color
    pub pixel: Rgb,
}

/// Iterator over the 3x3 window around one pixel.
///
/// Positions are visited row by row, top-left first.
#[derive(Debug, Clone)]
pub struct Window<'a> {
    image: &'a Image,
    cx: i64,
    cy: i64,
    policy: BorderPolicy,
    next: usize,
}

/// Sample the 3x3 window centered on `(x, y)`.
pub fn window(image: &Image, x: u32, y: u32, policy: BorderPolicy) -> Window<'_> {
    Window {
        image,
        cx: x as i64,
        cy: y as i64,
        policy,
        next: 0,
    }
}

impl Iterator for Window<'_> {
    type Item = Tap;

    fn next(&mut self) -> Option<Tap> {
        while self.next < Kernel::SIZE * Kernel::SIZE {
            let kx = self.next % Kernel::SIZE;
            let ky = self.next / Kernel::SIZE;
            self.next += 1;

            let sx = self.cx + kx as i64 - 1;
            let sy = self.cy + ky as i64 - 1;
            if self.image.contains(sx, sy) {
                let pixel = self.image.get_pixel_unchecked(sx as u32, sy as u32);
                return Some(Tap { kx, ky, pixel });
            }
            if self.policy == BorderPolicy::Black {
                return Some(Tap {
                    kx,
                    ky,
                    pixel: Rgb::BLACK,
                });
            }
        }
        None
    }
}

/// Number of in-bounds positions in the window around `(x, y)`.
///
/// 9 for interior pixels, 6 along an edge, 4 in a corner (fewer for
/// images narrower or shorter than 2 pixels).
pub fn neighbor_count(image: &Image, x: u32, y: u32) -> u32 {
    window(image, x, y, BorderPolicy::Exclude).count() as u32
}
