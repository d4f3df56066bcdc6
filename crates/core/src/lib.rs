//! Core money logic for Moneta.
//!
//! This crate contains the currency registry, the amount formatter and the
//! `Money` value type. It performs no I/O.
//!
//! # Modules
//!
//! - `currency` - Currency registry, built-in table and exchange rates
//! - `format` - Bit-exact amount rendering
//! - `money` - Immutable money values and their serialized form

pub mod currency;
pub mod format;
pub mod money;

pub use currency::{CurrencyRegistry, ExchangeRate, ExchangeRateTable};
pub use format::Formatter;
pub use moneta_shared::{Currency, MoneyError, MoneyResult};
pub use money::Money;
