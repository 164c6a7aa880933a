//! Convert packed RGB and HSB colors from the command line.
//!
//! ```text
//! convert_colors to-hsb 0xff8000 16711680
//! convert_colors to-rgb 0x001effff
//! ```
//!
//! Output radix is controlled with `COLOR_CONVERT_RADIX` (`hex` or `dec`), and setting
//! `COLOR_CONVERT_QUIET` omits the component column. Logging follows `RUST_LOG`.

#![warn(
    anonymous_parameters,
    bare_trait_objects,
    clippy::branches_sharing_code,
    clippy::map_unwrap_or,
    clippy::match_wildcard_for_single_variants,
    // clippy::missing_errors_doc,
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

use anyhow::{bail, Result};
use command::{parse_value, render_line, Direction, USAGE};
use config::Config;
use std::{
    env,
    io::{self, Write},
};

mod command;
mod config;
mod trace;

fn main() -> Result<()> {
    let _trace = trace::initialize();
    let config = Config::new();

    let mut args = env::args().skip(1);
    let direction = match args.next() {
        Some(command) => command.parse::<Direction>()?,
        None => bail!("must provide a command\n{USAGE}"),
    };
    let values = args
        .map(|arg| parse_value(&arg))
        .collect::<Result<Vec<_>>>()?;
    if values.is_empty() {
        bail!("must provide at least one packed color value\n{USAGE}");
    }
    tracing::debug!(?direction, ?config, count = values.len(), "converting colors");

    let mut stdout = io::stdout().lock();
    for value in values {
        writeln!(stdout, "{}", render_line(&config, direction, value))?;
    }
    Ok(())
}
