//! Currency registry and exchange rates.

pub mod exchange;
pub mod registry;
pub mod seed;

pub use exchange::{ExchangeRate, ExchangeRateTable};
pub use registry::CurrencyRegistry;
pub use seed::{BUILTIN_CURRENCIES, CurrencySeed};
