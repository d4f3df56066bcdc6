//! Shared types, errors, and configuration for Moneta.
//!
//! This crate provides common types used across all other crates:
//! - Currency metadata and its serialized form
//! - Library-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::MonetaConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::Currency;
