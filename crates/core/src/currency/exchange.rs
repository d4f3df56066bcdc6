//! Exchange rate types and the static rate table.

use std::collections::HashMap;

use moneta_shared::config::ExchangeRateConfig;
use moneta_shared::{MoneyError, MoneyResult};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Built-in rates used when no explicit rate is supplied.
static GLOBAL: Lazy<ExchangeRateTable> = Lazy::new(ExchangeRateTable::builtin);

/// Exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency code.
    pub from_currency: String,
    /// Target currency code.
    pub to_currency: String,
    /// Exchange rate (1 from_currency = rate to_currency).
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub fn new(from_currency: impl Into<String>, to_currency: impl Into<String>, rate: Decimal) -> Self {
        Self {
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            rate,
        }
    }
}

impl From<ExchangeRateConfig> for ExchangeRate {
    fn from(cfg: ExchangeRateConfig) -> Self {
        Self::new(cfg.from, cfg.to, cfg.rate)
    }
}

/// Static `(from, to) -> rate` lookup table.
///
/// Unlisted pairs are an error, except a currency converted to itself which
/// always has rate 1.
#[derive(Debug, Clone, Default)]
pub struct ExchangeRateTable {
    rates: HashMap<(String, String), Decimal>,
}

impl ExchangeRateTable {
    /// Creates an empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.extend([
            ExchangeRate::new("SGD", "CNY", Decimal::new(51, 1)),
            ExchangeRate::new("USD", "CNY", Decimal::new(71, 1)),
            ExchangeRate::new("CNY", "CNY", Decimal::ONE),
        ]);
        table
    }

    /// Returns the process-wide built-in table.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Inserts or replaces a rate.
    pub fn insert(&mut self, rate: ExchangeRate) {
        self.rates
            .insert((rate.from_currency, rate.to_currency), rate.rate);
    }

    /// Inserts every rate from `rates`.
    pub fn extend(&mut self, rates: impl IntoIterator<Item = ExchangeRate>) {
        for rate in rates {
            self.insert(rate);
        }
        debug!(count = self.rates.len(), "Exchange rate table updated");
    }

    /// Returns the rate for converting `from` into `to`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownExchangeRate` if the pair is not listed
    /// and the codes differ.
    pub fn rate(&self, from: &str, to: &str) -> MoneyResult<Decimal> {
        if let Some(rate) = self.rates.get(&(from.to_string(), to.to_string())) {
            return Ok(*rate);
        }
        if from == to {
            return Ok(Decimal::ONE);
        }
        Err(MoneyError::UnknownExchangeRate {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    /// Number of listed pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no pair is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
