//! Command-line argument handling.

use crate::config::Config;
use anyhow::{bail, Context, Result};
use color_codec::{hsb_to_rgb, rgb_to_hsb, try_hsb_to_rgb, Hsb, Rgb};
use std::str::FromStr;

pub(crate) const USAGE: &str = "usage: convert_colors <to-hsb|to-rgb> <value>...";

/// Which way to convert packed values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub(crate) enum Direction {
    ToHsb,
    ToRgb,
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "to-hsb" => Self::ToHsb,
            "to-rgb" => Self::ToRgb,
            _ => bail!("unknown command {s:?}\n{USAGE}"),
        })
    }
}

impl Direction {
    /// Convert a packed value. Hues past the sector table are logged and converted to black.
    #[must_use]
    pub(crate) fn convert(self, value: u32) -> u32 {
        match self {
            Self::ToHsb => rgb_to_hsb(value),
            Self::ToRgb => try_hsb_to_rgb(value).unwrap_or_else(|err| {
                tracing::warn!("{value:#010x}: {err}, converting to black");
                hsb_to_rgb(value)
            }),
        }
    }

    /// Describe a converted value using the output encoding.
    #[must_use]
    pub(crate) fn describe(self, converted: u32) -> String {
        match self {
            Self::ToHsb => Hsb::from_packed(converted).to_string(),
            Self::ToRgb => Rgb::from_packed(converted).to_string(),
        }
    }
}

/// Parse a packed value given as a decimal or `0x`-prefixed hexadecimal integer.
pub(crate) fn parse_value(arg: &str) -> Result<u32> {
    let parsed = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => arg.parse::<u32>(),
    };
    parsed.with_context(|| format!("invalid packed color value {arg:?}"))
}

/// Convert `value` and render the output line.
#[must_use]
pub(crate) fn render_line(config: &Config, direction: Direction, value: u32) -> String {
    let converted = direction.convert(value);
    let line = format!(
        "{} -> {}",
        config.radix.format(value),
        config.radix.format(converted)
    );
    if config.quiet {
        line
    } else {
        format!("{line}  {}", direction.describe(converted))
    }
}
