//! Money values: construction, display, addition and conversion.

pub mod json;
pub mod value;

#[cfg(test)]
mod props;

pub use value::Money;
