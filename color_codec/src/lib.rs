#![doc = include_str!("../README.md")]
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    clippy::branches_sharing_code,
    clippy::map_unwrap_or,
    clippy::match_wildcard_for_single_variants,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::needless_for_each,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::unreadable_literal,
    clippy::unwrap_used,
    clippy::expect_used,
    deprecated_in_future,
    ellipsis_inclusive_range_patterns,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    // missing_docs,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    rustdoc::bare_urls,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::private_intra_doc_links,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused,
    variant_size_differences
)]

pub mod convert;
pub mod hsb;
pub mod rgb;

pub use convert::{hsb_to_rgb, rgb_to_hsb, try_hsb_to_rgb};
pub use hsb::{
    create_hsb, extract_brightness, extract_hue, extract_saturation, replace_brightness,
    replace_hue, replace_saturation, try_create_hsb, Hsb,
};
pub use rgb::{
    create_rgb, extract_blue, extract_green, extract_red, replace_blue, replace_green,
    replace_red, try_create_rgb, Rgb,
};

/// Results that can be returned from this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can be returned from this crate.
///
/// Only the checked `try_*` functions produce errors. Every unchecked function is total over
/// its `u32` inputs.
#[allow(variant_size_differences)]
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{component} value {value} exceeds the maximum of {max}")]
    ComponentOutOfRange {
        component: Component,
        value: u32,
        max: u32,
    },
    #[error("hue {hue} is outside of 0..360 degrees")]
    HueOutOfRange { hue: u32 },
}

/// A single field of a packed RGB or HSB value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Component {
    #[display(fmt = "red")]
    Red,
    #[display(fmt = "green")]
    Green,
    #[display(fmt = "blue")]
    Blue,
    #[display(fmt = "hue")]
    Hue,
    #[display(fmt = "saturation")]
    Saturation,
    #[display(fmt = "brightness")]
    Brightness,
}

/// Returns `value` unchanged if it is no greater than `max`.
#[inline]
pub(crate) fn check_component(component: Component, value: u32, max: u32) -> Result<u32> {
    if value > max {
        return Err(Error::ComponentOutOfRange {
            component,
            value,
            max,
        });
    }
    Ok(value)
}

pub mod prelude {
    //! Most commonly used exports.

    pub use crate::{
        convert::{hsb_to_rgb, rgb_to_hsb, try_hsb_to_rgb},
        hsb::{create_hsb, extract_brightness, extract_hue, extract_saturation, Hsb},
        rgb::{create_rgb, extract_blue, extract_green, extract_red, Rgb},
        Component, Error, Result,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_component_bounds() {
        assert_eq!(check_component(Component::Red, 255, 255), Ok(255));
        assert_eq!(check_component(Component::Red, 0, 255), Ok(0));
        assert_eq!(
            check_component(Component::Saturation, 256, 255),
            Err(Error::ComponentOutOfRange {
                component: Component::Saturation,
                value: 256,
                max: 255,
            })
        );
    }

    #[test]
    fn error_messages() {
        let err = Error::ComponentOutOfRange {
            component: Component::Green,
            value: 300,
            max: 255,
        };
        assert_eq!(err.to_string(), "green value 300 exceeds the maximum of 255");
        assert_eq!(
            Error::HueOutOfRange { hue: 360 }.to_string(),
            "hue 360 is outside of 0..360 degrees"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_is_transparent() {
        let rgb = Rgb::new(1, 2, 3);
        let bytes = bincode::serialize(&rgb).expect("valid rgb serialization");
        assert_eq!(
            bytes,
            bincode::serialize(&rgb.get()).expect("valid u32 serialization")
        );
        let hsb: Hsb = bincode::deserialize(&bytes).expect("valid hsb deserialization");
        assert_eq!(hsb.get(), rgb.get());
    }
}
