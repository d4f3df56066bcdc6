//! Currency registry keyed by currency code.
//!
//! Entries are stored as `Arc<Currency>` and never mutated in place.
//! Registering a code again swaps in a new entry: later lookups observe it,
//! while values that already hold the old `Arc` keep the old metadata.

use std::sync::Arc;

use dashmap::DashMap;
use moneta_shared::{Currency, MoneyError, MoneyResult};
use once_cell::sync::Lazy;
use tracing::debug;

use super::seed::BUILTIN_CURRENCIES;

/// Process-wide registry, seeded with the built-in table on first access.
static GLOBAL: Lazy<CurrencyRegistry> = Lazy::new(CurrencyRegistry::with_builtin);

/// Thread-safe table of currencies.
///
/// Lookups may run concurrently with each other and with registrations.
/// A registration replaces a single entry atomically.
#[derive(Debug, Default)]
pub struct CurrencyRegistry {
    currencies: DashMap<String, Arc<Currency>>,
}

impl CurrencyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with the built-in currencies.
    #[must_use]
    pub fn with_builtin() -> Self {
        let registry = Self::empty();
        for seed in BUILTIN_CURRENCIES {
            registry
                .currencies
                .insert(seed.code.to_string(), Arc::new(Currency::from(seed)));
        }
        debug!(count = registry.len(), "Seeded currency registry");
        registry
    }

    /// Returns the process-wide registry.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Returns the entry for `code`, if registered.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<Arc<Currency>> {
        self.currencies.get(code).map(|entry| Arc::clone(entry.value()))
    }

    /// Returns the entry for `code`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownCurrency` if `code` is not registered.
    pub fn lookup(&self, code: &str) -> MoneyResult<Arc<Currency>> {
        self.get(code)
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }

    /// Inserts or replaces the entry for `currency.code`.
    pub fn register(&self, currency: Currency) -> Arc<Currency> {
        let entry = Arc::new(currency);
        let previous = self
            .currencies
            .insert(entry.code.clone(), Arc::clone(&entry));
        debug!(
            code = %entry.code,
            fraction = entry.fraction,
            replaced = previous.is_some(),
            "Registered currency"
        );
        entry
    }

    /// Registers a custom currency from its display metadata.
    pub fn add_currency(
        &self,
        code: &str,
        grapheme: &str,
        template: &str,
        decimal: &str,
        thousand: &str,
        fraction: u32,
    ) -> Arc<Currency> {
        self.register(Currency::new(
            code, grapheme, template, decimal, thousand, fraction,
        ))
    }

    /// Returns true if `code` is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.currencies.contains_key(code)
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns true if no currency is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Registered codes in ascending order.
    #[must_use]
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self
            .currencies
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        codes.sort_unstable();
        codes
    }
}
