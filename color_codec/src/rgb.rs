//! Packed RGB values laid out as `0x00RRGGBB`.
//!
//! The upper byte is never read. Replacement functions preserve it, construction functions
//! leave it zeroed.

use crate::{check_component, convert::rgb_to_hsb, hsb::Hsb, Component, Result};
use std::fmt;

pub const RED_SHIFT: u32 = 16;
pub const GREEN_SHIFT: u32 = 8;
pub const BLUE_SHIFT: u32 = 0;

pub const RED_MASK: u32 = 0x00FF_0000;
pub const GREEN_MASK: u32 = 0x0000_FF00;
pub const BLUE_MASK: u32 = 0x0000_00FF;

/// Largest value a single 8-bit channel can hold.
pub const CHANNEL_MAX: u32 = 0xFF;

/// Extract the red channel from a packed RGB value.
#[inline]
#[must_use]
pub const fn extract_red(rgb: u32) -> u32 {
    (rgb & RED_MASK) >> RED_SHIFT
}

/// Extract the green channel from a packed RGB value.
#[inline]
#[must_use]
pub const fn extract_green(rgb: u32) -> u32 {
    (rgb & GREEN_MASK) >> GREEN_SHIFT
}

/// Extract the blue channel from a packed RGB value.
#[inline]
#[must_use]
pub const fn extract_blue(rgb: u32) -> u32 {
    (rgb & BLUE_MASK) >> BLUE_SHIFT
}

/// Replace the red channel, wrapping `red` to 8 bits.
#[inline]
#[must_use]
pub const fn replace_red(rgb: u32, red: u32) -> u32 {
    (rgb & !RED_MASK) | ((red & CHANNEL_MAX) << RED_SHIFT)
}

/// Replace the green channel, wrapping `green` to 8 bits.
#[inline]
#[must_use]
pub const fn replace_green(rgb: u32, green: u32) -> u32 {
    (rgb & !GREEN_MASK) | ((green & CHANNEL_MAX) << GREEN_SHIFT)
}

/// Replace the blue channel, wrapping `blue` to 8 bits.
#[inline]
#[must_use]
pub const fn replace_blue(rgb: u32, blue: u32) -> u32 {
    (rgb & !BLUE_MASK) | ((blue & CHANNEL_MAX) << BLUE_SHIFT)
}

/// Pack three channels into a single RGB value. Each channel wraps to 8 bits.
#[inline]
#[must_use]
pub const fn create_rgb(red: u32, green: u32, blue: u32) -> u32 {
    replace_blue(replace_green(replace_red(0, red), green), blue)
}

/// Pack three channels into a single RGB value, rejecting channels above 255 instead of
/// wrapping them.
///
/// # Errors
///
/// Returns [`Error::ComponentOutOfRange`](crate::Error::ComponentOutOfRange) for the first
/// channel that does not fit in 8 bits.
#[inline]
pub fn try_create_rgb(red: u32, green: u32, blue: u32) -> Result<u32> {
    Ok(create_rgb(
        check_component(Component::Red, red, CHANNEL_MAX)?,
        check_component(Component::Green, green, CHANNEL_MAX)?,
        check_component(Component::Blue, blue, CHANNEL_MAX)?,
    ))
}

/// A packed RGB value.
#[derive(
    Default, Debug, Copy, Clone, PartialEq, Eq, Hash, derive_more::From, derive_more::Into,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
#[repr(transparent)]
pub struct Rgb(u32);

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);

    /// Creates `Rgb` from separate channels, wrapping each to 8 bits.
    #[inline]
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self(create_rgb(red, green, blue))
    }

    /// Creates `Rgb` from separate channels.
    ///
    /// # Errors
    ///
    /// Returns an error if any channel is greater than 255.
    #[inline]
    pub fn try_new(red: u32, green: u32, blue: u32) -> Result<Self> {
        try_create_rgb(red, green, blue).map(Self)
    }

    /// Creates `Rgb` from an already packed value.
    #[inline]
    pub const fn from_packed(rgb: u32) -> Self {
        Self(rgb)
    }

    /// Returns the packed value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn red(self) -> u32 {
        extract_red(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn green(self) -> u32 {
        extract_green(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn blue(self) -> u32 {
        extract_blue(self.0)
    }

    /// Returns `[red, green, blue]`.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> [u32; 3] {
        [self.red(), self.green(), self.blue()]
    }

    #[inline]
    pub const fn with_red(self, red: u32) -> Self {
        Self(replace_red(self.0, red))
    }

    #[inline]
    pub const fn with_green(self, green: u32) -> Self {
        Self(replace_green(self.0, green))
    }

    #[inline]
    pub const fn with_blue(self, blue: u32) -> Self {
        Self(replace_blue(self.0, blue))
    }

    /// Convert to HSB. See [`rgb_to_hsb`].
    #[inline]
    pub fn to_hsb(self) -> Hsb {
        Hsb::from_packed(rgb_to_hsb(self.0))
    }
}

impl From<Hsb> for Rgb {
    fn from(hsb: Hsb) -> Self {
        hsb.to_rgb()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red(), self.green(), self.blue())
    }
}
