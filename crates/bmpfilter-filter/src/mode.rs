//! Transform selection

use crate::{box_blur, grayscale, reflect, sepia, sobel_edge};
use bmpfilter_core::Image;
use std::fmt;

/// One of the five transforms, chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    /// 3x3 box blur
    Blur,
    /// Channel-mean grayscale
    Grayscale,
    /// Left-right mirror
    Reflect,
    /// Sepia tone
    Sepia,
    /// Sobel edge detection
    Edges,
}

impl FilterMode {
    /// All modes, in flag order `b g r s e`.
    pub const ALL: [FilterMode; 5] = [
        FilterMode::Blur,
        FilterMode::Grayscale,
        FilterMode::Reflect,
        FilterMode::Sepia,
        FilterMode::Edges,
    ];

    /// Look up a mode by its single-letter flag.
    pub fn from_flag(flag: char) -> Option<Self> {
        match flag {
            'b' => Some(Self::Blur),
            'g' => Some(Self::Grayscale),
            'r' => Some(Self::Reflect),
            's' => Some(Self::Sepia),
            'e' => Some(Self::Edges),
            _ => None,
        }
    }

    /// Single-letter flag for this mode.
    pub fn flag(self) -> char {
        match self {
            Self::Blur => 'b',
            Self::Grayscale => 'g',
            Self::Reflect => 'r',
            Self::Sepia => 's',
            Self::Edges => 'e',
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Blur => "blur",
            Self::Grayscale => "grayscale",
            Self::Reflect => "reflect",
            Self::Sepia => "sepia",
            Self::Edges => "edges",
        }
    }

    /// Run the selected transform on `image`.
    pub fn apply(self, image: &mut Image) {
        match self {
            Self::Blur => box_blur(image),
            Self::Grayscale => grayscale(image),
            Self::Reflect => reflect(image),
            Self::Sepia => sepia(image),
            Self::Edges => sobel_edge(image),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
