//! Convolution kernels
//!
//! Fixed 3x3 integer kernels. Element `(kx, ky)` is the weight applied to
//! the neighbor at offset `(kx - 1, ky - 1)` from the center pixel.

/// A 3x3 signed integer kernel (row-major order).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    weights: [[i32; 3]; 3],
}

impl Kernel {
    /// Kernel side length.
    pub const SIZE: usize = 3;

    /// Sobel horizontal-gradient kernel (responds to vertical edges).
    pub const SOBEL_X: Kernel = Kernel::new([[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]);

    /// Sobel vertical-gradient kernel (responds to horizontal edges).
    pub const SOBEL_Y: Kernel = Kernel::new([[-1, -2, -1], [0, 0, 0], [1, 2, 1]]);

    /// Create a kernel from rows of weights, top row first.
    pub const fn new(weights: [[i32; 3]; 3]) -> Self {
        Self { weights }
    }

    /// Get the weight at column `kx`, row `ky`.
    ///
    /// # Panics
    ///
    /// Panics if `kx` or `ky` is 3 or more.
    #[inline]
    pub fn get(&self, kx: usize, ky: usize) -> i32 {
        self.weights[ky][kx]
    }

    /// Sum of all weights.
    pub fn sum(&self) -> i32 {
        self.weights.iter().flatten().sum()
    }
}
