//! Serialized form of [`Money`].
//!
//! ```json
//! {"amount":"12.33","currency":{"code":"CNY","numeric_code":"156","fraction":2,
//!  "grapheme":"元","template":"1 $","decimal":".","thousand":","}}
//! ```
//!
//! Decoding takes the embedded currency as-is; the registry is not consulted.

use std::sync::Arc;

use moneta_shared::{Currency, MoneyResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::value::Money;

#[derive(Serialize)]
struct MoneyRef<'a> {
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    currency: &'a Currency,
}

#[derive(Deserialize)]
struct MoneyRecord {
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    currency: Currency,
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MoneyRef {
            amount: self.amount,
            currency: &self.currency,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = MoneyRecord::deserialize(deserializer)?;
        Ok(Self::with_currency(record.amount, Arc::new(record.currency)))
    }
}

impl Money {
    /// Encodes the value as JSON.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::MalformedSerializedData` if encoding fails.
    pub fn to_json(&self) -> MoneyResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a value from JSON.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::MalformedSerializedData` on missing or invalid
    /// fields.
    pub fn from_json(json: &str) -> MoneyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
