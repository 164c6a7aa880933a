//! Conversion between packed RGB and packed HSB values.
//!
//! Both directions truncate toward zero wherever a floating point value becomes an integer
//! component. Rounding instead would move colors across sector boundaries.

use crate::{
    hsb::{
        create_hsb, extract_brightness, extract_hue, extract_saturation, HUE_DEGREES,
        UNDEFINED_HUE,
    },
    rgb::{create_rgb, extract_blue, extract_green, extract_red, CHANNEL_MAX},
    Error, Result,
};

/// Width of a single hue sector in degrees.
const DEGREES_PER_SECTOR: f64 = 60.0;

/// Convert a packed RGB value into a packed HSB value.
///
/// Achromatic colors (all channels equal) get a saturation of `0` and [`UNDEFINED_HUE`]. When
/// two channels tie for the maximum, red takes priority over green, and green over blue.
#[must_use]
pub fn rgb_to_hsb(rgb: u32) -> u32 {
    let red = extract_red(rgb);
    let green = extract_green(rgb);
    let blue = extract_blue(rgb);

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let brightness = max;
    let saturation = if max == 0 {
        0
    } else {
        CHANNEL_MAX * (max - min) / max
    };

    let hue = if saturation == 0 {
        UNDEFINED_HUE
    } else {
        let delta = f64::from(max - min);
        let sector = if red == max {
            (f64::from(green) - f64::from(blue)) / delta
        } else if green == max {
            2.0 + (f64::from(blue) - f64::from(red)) / delta
        } else {
            4.0 + (f64::from(red) - f64::from(green)) / delta
        };

        let degrees = f64::from(HUE_DEGREES);
        let mut hue = sector * DEGREES_PER_SECTOR;
        if hue < 0.0 {
            hue += degrees;
        }
        if hue >= degrees {
            hue -= degrees;
        }
        hue as u32
    };

    create_hsb(hue, saturation, brightness)
}

/// Convert a packed HSB value into a packed RGB value.
///
/// A saturation of `0` yields a grey of the given brightness regardless of hue. Any hue of 360
/// or more with a non-zero saturation falls outside of the sector table and yields black. Use
/// [`try_hsb_to_rgb`] to treat that as an error instead.
#[must_use]
pub fn hsb_to_rgb(hsb: u32) -> u32 {
    let hue = extract_hue(hsb);
    let saturation = extract_saturation(hsb);
    let brightness = extract_brightness(hsb);

    if saturation == 0 {
        return create_rgb(brightness, brightness, brightness);
    }

    let position = f64::from(hue) / DEGREES_PER_SECTOR;
    let sector = position as u32;
    let fraction = position - f64::from(sector);

    let max = f64::from(CHANNEL_MAX);
    let value = f64::from(brightness) / max;
    let saturation = f64::from(saturation) / max;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fraction);
    let t = value * (1.0 - saturation * (1.0 - fraction));

    let [red, green, blue] = match sector {
        0 => [value, t, p],
        1 => [q, value, p],
        2 => [p, value, t],
        3 => [p, q, value],
        4 => [t, p, value],
        5 => [value, p, q],
        _ => {
            tracing::trace!(hue, "hue outside of sector table, converting to black");
            [0.0; 3]
        }
    };

    create_rgb(to_channel(red), to_channel(green), to_channel(blue))
}

/// Convert a packed HSB value into a packed RGB value, rejecting hues that [`hsb_to_rgb`] would
/// silently convert to black.
///
/// # Errors
///
/// Returns [`Error::HueOutOfRange`] if the hue is 360 or more and the saturation is non-zero.
pub fn try_hsb_to_rgb(hsb: u32) -> Result<u32> {
    let hue = extract_hue(hsb);
    if hue >= HUE_DEGREES && extract_saturation(hsb) != 0 {
        return Err(Error::HueOutOfRange { hue });
    }
    Ok(hsb_to_rgb(hsb))
}

/// Scale a `0.0..=1.0` component to a channel, truncating.
#[inline]
fn to_channel(component: f64) -> u32 {
    (component * f64::from(CHANNEL_MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsb(rgb: u32) -> (u32, u32, u32) {
        let hsb = rgb_to_hsb(rgb);
        (
            extract_hue(hsb),
            extract_saturation(hsb),
            extract_brightness(hsb),
        )
    }

    fn rgb(hsb: u32) -> (u32, u32, u32) {
        let rgb = hsb_to_rgb(hsb);
        (extract_red(rgb), extract_green(rgb), extract_blue(rgb))
    }

    #[test]
    fn primaries_to_hsb() {
        assert_eq!(hsb(create_rgb(255, 0, 0)), (0, 255, 255));
        assert_eq!(hsb(create_rgb(0, 255, 0)), (120, 255, 255));
        assert_eq!(hsb(create_rgb(0, 0, 255)), (240, 255, 255));
    }

    #[test]
    fn secondaries_to_hsb() {
        assert_eq!(hsb(create_rgb(255, 255, 0)), (60, 255, 255));
        assert_eq!(hsb(create_rgb(0, 255, 255)), (180, 255, 255));
        assert_eq!(hsb(create_rgb(255, 0, 255)), (300, 255, 255));
    }

    #[test]
    fn tied_maximum_prefers_red() {
        assert_eq!(hsb(create_rgb(200, 200, 100)), (60, 127, 200));
        assert_eq!(hsb(create_rgb(200, 100, 200)), (300, 127, 200));
        assert_eq!(hsb(create_rgb(100, 200, 200)), (180, 127, 200));
    }

    #[test]
    fn negative_hue_wraps() {
        // red is max and blue > green, so the sector is negative
        assert_eq!(hsb(create_rgb(255, 0, 1)), (359, 255, 255));
    }

    #[test]
    fn achromatic_to_hsb() {
        for level in 0..=255 {
            assert_eq!(hsb(create_rgb(level, level, level)), (UNDEFINED_HUE, 0, level));
        }
    }

    #[test]
    fn upper_byte_is_ignored() {
        assert_eq!(rgb_to_hsb(0xFF00_FF00), rgb_to_hsb(0x0000_FF00));
    }

    #[test]
    fn brightness_is_max_channel() {
        for red in (0..=255).step_by(3) {
            for green in (0..=255).step_by(5) {
                for blue in 0..=255 {
                    let hsb = rgb_to_hsb(create_rgb(red, green, blue));
                    assert_eq!(extract_brightness(hsb), red.max(green).max(blue));
                    assert!(extract_hue(hsb) < HUE_DEGREES);
                }
            }
        }
    }

    #[test]
    fn white_and_grey_to_rgb() {
        assert_eq!(rgb(create_hsb(0, 0, 255)), (255, 255, 255));
        assert_eq!(rgb(create_hsb(0, 0, 0)), (0, 0, 0));
        // hue is irrelevant without saturation, even past the sector table
        assert_eq!(rgb(create_hsb(1000, 0, 77)), (77, 77, 77));
    }

    #[test]
    fn sector_table() {
        let expected = [
            (0, (255, 0, 0)),
            (60, (255, 255, 0)),
            (120, (0, 255, 0)),
            (180, (0, 255, 255)),
            (240, (0, 0, 255)),
            (300, (255, 0, 255)),
        ];
        for (hue, color) in expected {
            assert_eq!(rgb(create_hsb(hue, 255, 255)), color, "hue {hue}");
        }
    }

    #[test]
    fn fractional_sector_truncates() {
        assert_eq!(rgb(create_hsb(30, 255, 255)), (255, 127, 0));
        assert_eq!(rgb(create_hsb(359, 255, 255)), (255, 0, 4));
    }

    #[test]
    fn hue_past_table_is_black() {
        assert_eq!(rgb(create_hsb(360, 255, 255)), (0, 0, 0));
        assert_eq!(rgb(create_hsb(0xFFFF, 1, 255)), (0, 0, 0));
    }

    #[test]
    fn try_hsb_to_rgb_rejects_hue_past_table() {
        assert_eq!(
            try_hsb_to_rgb(create_hsb(360, 255, 255)),
            Err(Error::HueOutOfRange { hue: 360 })
        );
        assert_eq!(
            try_hsb_to_rgb(create_hsb(359, 255, 255)),
            Ok(hsb_to_rgb(create_hsb(359, 255, 255)))
        );
        assert_eq!(
            try_hsb_to_rgb(create_hsb(360, 0, 10)),
            Ok(create_rgb(10, 10, 10))
        );
    }

    #[test]
    fn round_trip_exact_points() {
        let colors = [
            create_rgb(255, 0, 0),
            create_rgb(255, 255, 0),
            create_rgb(0, 255, 0),
            create_rgb(0, 255, 255),
            create_rgb(0, 0, 255),
            create_rgb(255, 0, 255),
            create_rgb(0, 0, 0),
            create_rgb(128, 128, 128),
            create_rgb(255, 255, 255),
        ];
        for color in colors {
            assert_eq!(hsb_to_rgb(rgb_to_hsb(color)), color, "color {color:#08x}");
        }
    }

    #[test]
    fn round_trip_keeps_saturation_and_brightness() {
        for hsb in [create_hsb(0, 255, 255), create_hsb(120, 255, 51), create_hsb(0, 0, 200)] {
            let converted = rgb_to_hsb(hsb_to_rgb(hsb));
            assert_eq!(extract_saturation(converted), extract_saturation(hsb));
            assert_eq!(extract_brightness(converted), extract_brightness(hsb));
        }
    }
}
