//! Locale-style rendering of decimal amounts.

pub mod formatter;

#[cfg(test)]
mod props;

pub use formatter::{Formatter, GRAPHEME_PLACEHOLDER, NUMBER_PLACEHOLDER};
