//! Currency metadata used for lookup and display.

use serde::{Deserialize, Serialize};

/// A registered currency and the rules used to display amounts in it.
///
/// The serialized field names (`decimal`, `thousand`, `numeric_code`) are part
/// of the wire format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    /// Unique lookup key (e.g. "USD"). Matched exactly, no case folding.
    pub code: String,
    /// Secondary ISO 4217 numeric identifier (e.g. "840"). Display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_code: Option<String>,
    /// Digits after the decimal separator.
    pub fraction: u32,
    /// Symbol substituted into the template's `$` placeholder.
    pub grapheme: String,
    /// Pattern with a `1` placeholder for the number and an optional `$`.
    pub template: String,
    /// Decimal separator.
    #[serde(rename = "decimal")]
    pub decimal_separator: String,
    /// Thousand separator. Empty disables grouping.
    #[serde(rename = "thousand")]
    pub thousand_separator: String,
}

impl Currency {
    /// Creates a currency without a numeric code.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        grapheme: impl Into<String>,
        template: impl Into<String>,
        decimal_separator: impl Into<String>,
        thousand_separator: impl Into<String>,
        fraction: u32,
    ) -> Self {
        Self {
            code: code.into(),
            numeric_code: None,
            fraction,
            grapheme: grapheme.into(),
            template: template.into(),
            decimal_separator: decimal_separator.into(),
            thousand_separator: thousand_separator.into(),
        }
    }

    /// Sets the numeric code.
    #[must_use]
    pub fn with_numeric_code(mut self, numeric_code: impl Into<String>) -> Self {
        self.numeric_code = Some(numeric_code.into());
        self
    }

    /// Returns true if both currencies share the same code.
    #[must_use]
    pub fn same_code(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}
