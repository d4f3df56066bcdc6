//! Moneta command-line tool.
//!
//! Loads configuration, registers configured currencies and rates, then runs
//! a single command.

mod args;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moneta_core::{CurrencyRegistry, ExchangeRate, ExchangeRateTable, Money};
use moneta_shared::MonetaConfig;

use crate::args::{Cli, Command};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so command output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moneta_cli=info,moneta_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = MonetaConfig::load().context("Failed to load configuration")?;

    let registry = CurrencyRegistry::global();
    for currency in config.currencies.iter().cloned() {
        registry.register(currency.into());
    }

    let mut rates = ExchangeRateTable::builtin();
    rates.extend(config.exchange_rates.iter().cloned().map(ExchangeRate::from));
    info!(
        currencies = registry.len(),
        rates = rates.len(),
        "Configuration loaded"
    );

    match cli.command {
        Command::Format { amount, code } => {
            let code = resolve_code(code, &config)?;
            println!("{}", Money::new(amount, &code)?);
        }
        Command::Convert {
            amount,
            from,
            to,
            rate,
        } => {
            let money = Money::new(amount, &from)?;
            let converted = money.convert_with(registry, &rates, &to, rate)?;
            debug!(from = %from, to = %to, amount = %converted.amount(), "Converted");
            println!("{converted}");
        }
        Command::Json { amount, code } => {
            let code = resolve_code(code, &config)?;
            println!("{}", Money::new(amount, &code)?.to_json()?);
        }
        Command::Currencies {} => {
            let sample = Decimal::new(123_456_789, 2);
            for code in registry.codes() {
                let money = Money::new(sample, &code)?;
                println!("{code:<6}{money}");
            }
        }
    }

    Ok(())
}

fn resolve_code(code: Option<String>, config: &MonetaConfig) -> Result<String> {
    code.or_else(|| config.default_currency.clone())
        .ok_or_else(|| anyhow!("No currency code given and no default_currency configured"))
}
