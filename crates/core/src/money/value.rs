//! Money value type.
//!
//! CRITICAL: Amounts are `rust_decimal::Decimal`. The only float entry point
//! is [`Money::from_f64`], which is lossy by nature.

use std::fmt;
use std::sync::Arc;

use moneta_shared::{Currency, MoneyError, MoneyResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::currency::{CurrencyRegistry, ExchangeRateTable};
use crate::format::Formatter;

/// An immutable amount of money in a currency.
///
/// The currency metadata is resolved once, at construction, and shared by
/// reference. Re-registering the currency code later does not change how an
/// existing value is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    pub(crate) amount: Decimal,
    pub(crate) currency: Arc<Currency>,
}

impl Money {
    /// Creates money in a currency from the global registry.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownCurrency` if `code` is not registered.
    pub fn new(amount: Decimal, code: &str) -> MoneyResult<Self> {
        Self::new_in(CurrencyRegistry::global(), amount, code)
    }

    /// Creates money in a currency from `registry`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownCurrency` if `code` is not registered.
    pub fn new_in(registry: &CurrencyRegistry, amount: Decimal, code: &str) -> MoneyResult<Self> {
        let currency = registry.lookup(code)?;
        Ok(Self { amount, currency })
    }

    /// Creates money from a float.
    ///
    /// Binary floats cannot represent most decimal fractions; the conversion
    /// keeps the shortest decimal that round-trips to the same float. Prefer
    /// [`Money::new`].
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` for NaN or infinite input and
    /// `MoneyError::UnknownCurrency` if `code` is not registered.
    pub fn from_f64(amount: f64, code: &str) -> MoneyResult<Self> {
        let amount =
            Decimal::from_f64(amount).ok_or_else(|| MoneyError::InvalidAmount(amount.to_string()))?;
        Self::new(amount, code)
    }

    /// Creates money from already-resolved currency metadata.
    #[must_use]
    pub fn with_currency(amount: Decimal, currency: Arc<Currency>) -> Self {
        Self { amount, currency }
    }

    /// Returns the amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency metadata.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns true if both values share a currency code.
    #[must_use]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency.same_code(&other.currency)
    }

    /// Formats the amount using the currency's display rules.
    #[must_use]
    pub fn display(&self) -> String {
        Formatter::from(self.currency()).format(self.amount)
    }

    /// Adds `others` to this value.
    ///
    /// The reference currency is the first element of `others` (or `self`
    /// when `others` is empty). Every operand, `self` included, must use it.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` on the first operand in another
    /// currency, or `MoneyError::Overflow` if the sum is out of range.
    pub fn add(&self, others: &[&Self]) -> MoneyResult<Self> {
        let reference = others.first().map_or(&self.currency, |first| &first.currency);

        for operand in std::iter::once(self).chain(others.iter().copied()) {
            if !operand.currency.same_code(reference) {
                return Err(MoneyError::CurrencyMismatch {
                    expected: reference.code.clone(),
                    found: operand.currency.code.clone(),
                });
            }
        }

        let amount = others.iter().try_fold(self.amount, |total, other| {
            total.checked_add(other.amount).ok_or(MoneyError::Overflow)
        })?;

        Ok(Self {
            amount,
            currency: Arc::clone(reference),
        })
    }

    /// Converts into `target` using the global registry and rate table.
    ///
    /// An explicit `rate` takes precedence over the table.
    ///
    /// # Errors
    ///
    /// See [`Money::convert_with`].
    pub fn convert(&self, target: &str, rate: Option<Decimal>) -> MoneyResult<Self> {
        self.convert_with(
            CurrencyRegistry::global(),
            ExchangeRateTable::global(),
            target,
            rate,
        )
    }

    /// Converts into `target` resolving the currency in `registry` and the
    /// rate in `rates` unless `rate` is supplied.
    ///
    /// The product is not rounded.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownExchangeRate` if no rate applies,
    /// `MoneyError::UnknownCurrency` if `target` is not registered, or
    /// `MoneyError::Overflow` if the product is out of range.
    pub fn convert_with(
        &self,
        registry: &CurrencyRegistry,
        rates: &ExchangeRateTable,
        target: &str,
        rate: Option<Decimal>,
    ) -> MoneyResult<Self> {
        let rate = match rate {
            Some(rate) => rate,
            None => rates.rate(&self.currency.code, target)?,
        };
        let currency = registry.lookup(target)?;
        let amount = self.amount.checked_mul(rate).ok_or(MoneyError::Overflow)?;
        Ok(Self { amount, currency })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
