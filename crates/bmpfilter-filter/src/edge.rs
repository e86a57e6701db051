//! Sobel edge detection
//!
//! Each channel is convolved with [`Kernel::SOBEL_X`] and [`Kernel::SOBEL_Y`]
//! and replaced by the gradient magnitude `sqrt(gx^2 + gy^2)`, rounded and
//! saturated at 255.
//!
//! Unlike [`box_blur`](crate::box_blur), positions outside the image are
//! read as black, which strengthens the response along the border.
//! A uniform non-black image comes out black inside a bright frame one
//! pixel wide.

use crate::Kernel;
use crate::neighborhood::{BorderPolicy, window};
use bmpfilter_core::color::round_channel;
use bmpfilter_core::{Image, Rgb};
use log::debug;

/// Per-channel horizontal and vertical gradients at one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gradient {
    /// `[red, green, blue]` response to [`Kernel::SOBEL_X`]
    pub gx: [i32; 3],
    /// `[red, green, blue]` response to [`Kernel::SOBEL_Y`]
    pub gy: [i32; 3],
}

impl Gradient {
    /// Gradient magnitude of each channel, rounded and saturated.
    pub fn magnitude(&self) -> Rgb {
        let mag = |c: usize| {
            let gx = self.gx[c] as f64;
            let gy = self.gy[c] as f64;
            round_channel((gx * gx + gy * gy).sqrt())
        };
        Rgb::new(mag(0), mag(1), mag(2))
    }
}

/// Compute the Sobel gradients of `src` at `(x, y)`.
pub fn sobel_gradient(src: &Image, x: u32, y: u32) -> Gradient {
    let mut grad = Gradient::default();

    for tap in window(src, x, y, BorderPolicy::Black) {
        let wx = Kernel::SOBEL_X.get(tap.kx, tap.ky);
        let wy = Kernel::SOBEL_Y.get(tap.kx, tap.ky);
        let channels = [tap.pixel.red, tap.pixel.green, tap.pixel.blue];
        for (c, &v) in channels.iter().enumerate() {
            grad.gx[c] += wx * v as i32;
            grad.gy[c] += wy * v as i32;
        }
    }

    grad
}

/// Replace every pixel with its Sobel gradient magnitude, in place.
///
/// All reads come from a snapshot of the input.
pub fn sobel_edge(image: &mut Image) {
    let w = image.width();
    let h = image.height();
    debug!("sobel_edge: {}x{}", w, h);

    if image.is_empty() {
        return;
    }

    let src = image.clone();
    for y in 0..h {
        for x in 0..w {
            let grad = sobel_gradient(&src, x, y);
            image.set_pixel_unchecked(x, y, grad.magnitude());
        }
    }
}
