//! Library-wide error types.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors produced by money construction, arithmetic and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Currency Errors ==========
    /// Currency code is not present in the registry.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Operands of an arithmetic operation reference different currencies.
    #[error("Currencies don't match: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Reference currency code.
        expected: String,
        /// Offending currency code.
        found: String,
    },

    /// No exchange rate known for the currency pair.
    #[error("No exchange rate found for {from} to {to}")]
    UnknownExchangeRate {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
    },

    // ========== Amount Errors ==========
    /// Amount cannot be represented as a decimal.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Decimal arithmetic overflowed.
    #[error("Arithmetic overflow")]
    Overflow,

    // ========== Serialization Errors ==========
    /// Serialized input is structurally invalid.
    #[error("Malformed serialized data: {0}")]
    MalformedSerializedData(String),
}

impl MoneyError {
    /// Returns a stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::UnknownExchangeRate { .. } => "UNKNOWN_EXCHANGE_RATE",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::Overflow => "OVERFLOW",
            Self::MalformedSerializedData(_) => "MALFORMED_SERIALIZED_DATA",
        }
    }
}

impl From<serde_json::Error> for MoneyError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedSerializedData(err.to_string())
    }
}
