//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonetaConfig {
    /// Currency used when a command omits one.
    #[serde(default)]
    pub default_currency: Option<String>,
    /// Custom currencies registered at start-up.
    #[serde(default)]
    pub currencies: Vec<CurrencyConfig>,
    /// Exchange rates added on top of the built-in table.
    #[serde(default)]
    pub exchange_rates: Vec<ExchangeRateConfig>,
}

/// A custom currency definition.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// Currency code.
    pub code: String,
    /// Optional ISO numeric code.
    #[serde(default)]
    pub numeric_code: Option<String>,
    /// Digits after the decimal separator.
    pub fraction: u32,
    /// Display symbol.
    pub grapheme: String,
    /// Display template.
    #[serde(default = "default_template")]
    pub template: String,
    /// Decimal separator.
    #[serde(default = "default_decimal")]
    pub decimal: String,
    /// Thousand separator.
    #[serde(default = "default_thousand")]
    pub thousand: String,
}

fn default_template() -> String {
    "1 $".to_string()
}

fn default_decimal() -> String {
    ".".to_string()
}

fn default_thousand() -> String {
    ",".to_string()
}

impl From<CurrencyConfig> for Currency {
    fn from(cfg: CurrencyConfig) -> Self {
        Self {
            code: cfg.code,
            numeric_code: cfg.numeric_code,
            fraction: cfg.fraction,
            grapheme: cfg.grapheme,
            template: cfg.template,
            decimal_separator: cfg.decimal,
            thousand_separator: cfg.thousand,
        }
    }
}

/// A static exchange rate (1 `from` = `rate` `to`).
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRateConfig {
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Rate, written as a string to keep it exact.
    pub rate: Decimal,
}

impl MonetaConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MONETA").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid configuration.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
