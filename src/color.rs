//! Pen colors.
//!
//! Every pixel a graphic produces carries one opaque RGB color. There is no
//! alpha channel: compositing is last-write-wins.

use serde::{Deserialize, Serialize};

/// RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
#[repr(C)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Red.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Blue.
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_array()
    }
}
