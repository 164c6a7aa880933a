//! Packed HSB values laid out as `0xHHHH_SSBB`.
//!
//! Hue is stored in 16 bits and is only meaningful in `0..360`. Packing masks hue to 16 bits but
//! never wraps it to 360 degrees, so callers producing hue are responsible for keeping it in
//! range. Use [`try_create_hsb`] to have that checked.

use crate::{check_component, convert::hsb_to_rgb, rgb::Rgb, Component, Error, Result};
use std::fmt;

pub const HUE_SHIFT: u32 = 16;
pub const SATURATION_SHIFT: u32 = 8;
pub const BRIGHTNESS_SHIFT: u32 = 0;

pub const HUE_MASK: u32 = 0xFFFF_0000;
pub const SATURATION_MASK: u32 = 0x0000_FF00;
pub const BRIGHTNESS_MASK: u32 = 0x0000_00FF;

/// Largest value the 16-bit hue field can hold.
pub const HUE_FIELD_MAX: u32 = 0xFFFF;
/// Hues are degrees in `0..HUE_DEGREES`.
pub const HUE_DEGREES: u32 = 360;
/// Largest saturation or brightness.
pub const LEVEL_MAX: u32 = 0xFF;

/// Hue reported for achromatic colors, which have no hue.
pub const UNDEFINED_HUE: u32 = 0;

/// Extract the hue from a packed HSB value.
#[inline]
#[must_use]
pub const fn extract_hue(hsb: u32) -> u32 {
    (hsb & HUE_MASK) >> HUE_SHIFT
}

/// Extract the saturation from a packed HSB value.
#[inline]
#[must_use]
pub const fn extract_saturation(hsb: u32) -> u32 {
    (hsb & SATURATION_MASK) >> SATURATION_SHIFT
}

/// Extract the brightness from a packed HSB value.
#[inline]
#[must_use]
pub const fn extract_brightness(hsb: u32) -> u32 {
    (hsb & BRIGHTNESS_MASK) >> BRIGHTNESS_SHIFT
}

/// Replace the hue, wrapping `hue` to 16 bits.
#[inline]
#[must_use]
pub const fn replace_hue(hsb: u32, hue: u32) -> u32 {
    (hsb & !HUE_MASK) | ((hue & HUE_FIELD_MAX) << HUE_SHIFT)
}

/// Replace the saturation, wrapping `saturation` to 8 bits.
#[inline]
#[must_use]
pub const fn replace_saturation(hsb: u32, saturation: u32) -> u32 {
    (hsb & !SATURATION_MASK) | ((saturation & LEVEL_MAX) << SATURATION_SHIFT)
}

/// Replace the brightness, wrapping `brightness` to 8 bits.
#[inline]
#[must_use]
pub const fn replace_brightness(hsb: u32, brightness: u32) -> u32 {
    (hsb & !BRIGHTNESS_MASK) | ((brightness & LEVEL_MAX) << BRIGHTNESS_SHIFT)
}

/// Pack hue, saturation and brightness into a single HSB value.
///
/// Hue wraps to 16 bits, saturation and brightness wrap to 8 bits.
#[inline]
#[must_use]
pub const fn create_hsb(hue: u32, saturation: u32, brightness: u32) -> u32 {
    replace_brightness(
        replace_saturation(replace_hue(0, hue), saturation),
        brightness,
    )
}

/// Pack hue, saturation and brightness into a single HSB value, rejecting out-of-range
/// components instead of wrapping them.
///
/// # Errors
///
/// Returns [`Error::HueOutOfRange`] if `hue` is 360 or more, and
/// [`Error::ComponentOutOfRange`] if saturation or brightness is greater than 255.
#[inline]
pub fn try_create_hsb(hue: u32, saturation: u32, brightness: u32) -> Result<u32> {
    if hue >= HUE_DEGREES {
        return Err(Error::HueOutOfRange { hue });
    }
    Ok(create_hsb(
        hue,
        check_component(Component::Saturation, saturation, LEVEL_MAX)?,
        check_component(Component::Brightness, brightness, LEVEL_MAX)?,
    ))
}

/// A packed HSB value.
#[derive(
    Default, Debug, Copy, Clone, PartialEq, Eq, Hash, derive_more::From, derive_more::Into,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
#[repr(transparent)]
pub struct Hsb(u32);

impl Hsb {
    /// Creates `Hsb` from separate components without checking the hue range.
    #[inline]
    pub const fn new(hue: u32, saturation: u32, brightness: u32) -> Self {
        Self(create_hsb(hue, saturation, brightness))
    }

    /// Creates `Hsb` from separate components.
    ///
    /// # Errors
    ///
    /// Returns an error if hue is 360 or more, or saturation or brightness exceed 255.
    #[inline]
    pub fn try_new(hue: u32, saturation: u32, brightness: u32) -> Result<Self> {
        try_create_hsb(hue, saturation, brightness).map(Self)
    }

    /// Creates `Hsb` from an already packed value.
    #[inline]
    pub const fn from_packed(hsb: u32) -> Self {
        Self(hsb)
    }

    /// Returns the packed value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn hue(self) -> u32 {
        extract_hue(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn saturation(self) -> u32 {
        extract_saturation(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn brightness(self) -> u32 {
        extract_brightness(self.0)
    }

    /// Whether this color has no hue.
    #[inline]
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.saturation() == 0
    }

    #[inline]
    pub const fn with_hue(self, hue: u32) -> Self {
        Self(replace_hue(self.0, hue))
    }

    #[inline]
    pub const fn with_saturation(self, saturation: u32) -> Self {
        Self(replace_saturation(self.0, saturation))
    }

    #[inline]
    pub const fn with_brightness(self, brightness: u32) -> Self {
        Self(replace_brightness(self.0, brightness))
    }

    /// Convert to RGB. See [`hsb_to_rgb`].
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        Rgb::from_packed(hsb_to_rgb(self.0))
    }
}

impl From<Rgb> for Hsb {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsb()
    }
}

impl fmt::Display for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsb({}, {}, {})",
            self.hue(),
            self.saturation(),
            self.brightness()
        )
    }
}
