//! Horizontal reflection

use bmpfilter_core::Image;
use log::debug;

/// Mirror an image left-right in place.
///
/// Pixel `x` of every row swaps with pixel `width - 1 - x`; the middle
/// column of an odd-width image stays where it is.
pub fn reflect(image: &mut Image) {
    debug!("reflect: {}x{}", image.width(), image.height());
    for row in image.rows_mut() {
        row.reverse();
    }
}
