//! Output configuration.

use anyhow::{bail, Result};
use std::{env, str::FromStr};

const RADIX_VAR: &str = "COLOR_CONVERT_RADIX";
const QUIET_VAR: &str = "COLOR_CONVERT_QUIET";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use]
pub(crate) struct Config {
    pub(crate) radix: Radix,
    pub(crate) quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }
}

impl Config {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Build a `Config` from a variable lookup, falling back to defaults for missing or invalid
    /// values.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let radix = match lookup(RADIX_VAR).map(|radix| radix.parse::<Radix>()) {
            Some(Ok(radix)) => radix,
            Some(Err(err)) => {
                tracing::warn!("ignoring {RADIX_VAR}: {err}");
                Radix::default()
            }
            None => Radix::default(),
        };
        Self {
            radix,
            quiet: lookup(QUIET_VAR).is_some(),
        }
    }
}

/// Radix used to print packed values.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub(crate) enum Radix {
    #[default]
    Hexadecimal,
    Decimal,
}

impl Radix {
    #[must_use]
    pub(crate) fn format(self, value: u32) -> String {
        match self {
            Radix::Hexadecimal => format!("{value:#010x}"),
            Radix::Decimal => value.to_string(),
        }
    }
}

impl FromStr for Radix {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "hex" | "hexadecimal" => Self::Hexadecimal,
            "dec" | "decimal" => Self::Decimal,
            _ => bail!("unknown radix {s:?}, expected `hex` or `dec`"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.radix, Radix::Hexadecimal);
        assert!(!config.quiet);
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(|key| match key {
            RADIX_VAR => Some("DEC".to_string()),
            QUIET_VAR => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.radix, Radix::Decimal);
        assert!(config.quiet);
    }

    #[test]
    fn invalid_radix_falls_back() {
        let config = Config::from_lookup(|key| (key == RADIX_VAR).then(|| "octal".to_string()));
        assert_eq!(config.radix, Radix::Hexadecimal);
    }

    #[test]
    fn format() {
        assert_eq!(Radix::Hexadecimal.format(0x00FF_0000), "0x00ff0000");
        assert_eq!(Radix::Hexadecimal.format(0x0168_FFFF), "0x0168ffff");
        assert_eq!(Radix::Decimal.format(0x00FF_0000), "16711680");
    }
}
