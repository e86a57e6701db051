//! bmpfilter-filter - Pixel transformation engine
//!
//! This crate provides the five transforms applied to an in-memory
//! [`Image`](bmpfilter_core::Image):
//!
//! - Grayscale averaging and sepia toning ([`color`])
//! - Horizontal reflection ([`flip`])
//! - 3x3 box blur ([`blur`])
//! - Sobel edge detection ([`edge`])
//!
//! Every transform mutates the image in place and cannot fail. Spatial
//! filters sample their 3x3 window through [`neighborhood`], which decides
//! what an out-of-bounds neighbor means.

pub mod blur;
pub mod color;
pub mod edge;
pub mod flip;
pub mod kernel;
mod mode;
pub mod neighborhood;

pub use kernel::Kernel;
pub use mode::FilterMode;
pub use neighborhood::{BorderPolicy, Tap};

// Re-export commonly used functions
pub use blur::box_blur;
pub use color::{grayscale, grayscale_pixel, sepia, sepia_pixel};
pub use edge::sobel_edge;
pub use flip::reflect;
