//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "moneta")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Format and convert monetary amounts")]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print an amount using its currency's display rules
    Format {
        /// Decimal amount, e.g. 1234.56
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
        /// Currency code. Falls back to `default_currency` from configuration
        code: Option<String>,
    },
    /// Convert an amount into another currency
    Convert {
        /// Decimal amount
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
        /// Explicit rate, overriding the rate table
        #[arg(long)]
        rate: Option<Decimal>,
    },
    /// Print the serialized form of an amount
    Json {
        /// Decimal amount
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
        /// Currency code. Falls back to `default_currency` from configuration
        code: Option<String>,
    },
    /// List registered currencies with a sample rendering
    Currencies {},
}
