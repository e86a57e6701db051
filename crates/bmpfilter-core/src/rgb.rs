//! 24-bit color triples
//!
//! On disk a 24-bit bitmap stores each pixel as blue, green, red. In memory
//! the channels are named fields, so the byte order only matters at the
//! codec boundary ([`Rgb::from_bgr`] / [`Rgb::to_bgr`]).

/// One pixel: three independent 8-bit channels, no alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red component
    pub red: u8,
    /// Green component
    pub green: u8,
    /// Blue component
    pub blue: u8,
}

impl Rgb {
    /// Pure black (0, 0, 0)
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white (255, 255, 255)
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from its red, green and blue components.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a gray color with all three channels set to `value`.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Build a color from bytes in file order (blue, green, red).
    #[inline]
    pub const fn from_bgr(bytes: [u8; 3]) -> Self {
        Self::new(bytes[2], bytes[1], bytes[0])
    }

    /// Bytes in file order (blue, green, red).
    #[inline]
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }

    /// Channels as a `(red, green, blue)` tuple.
    #[inline]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// True when all three channels are equal.
    #[inline]
    pub const fn is_gray(self) -> bool {
        self.red == self.green && self.green == self.blue
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}
