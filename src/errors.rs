//! Unified error types for Receipt Vault.
//!
//! Every fallible operation in the crate returns [`Result`]. The warranty engine
//! itself never fails; errors come from input validation on write paths, the
//! record store, configuration, and the chat platform.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or environment problem
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Record store failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// No receipt with this id exists for the requesting user
    #[error("Receipt {id} not found")]
    ReceiptNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// Amount was negative, NaN or infinite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// Warranty length was negative
    #[error("Invalid warranty length: {months} months")]
    InvalidWarranty {
        /// The rejected month count
        months: i32,
    },

    /// Date text was not `YYYY-MM-DD`
    #[error("Invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input
        input: String,
    },

    /// Category text is not one of the fixed labels
    #[error("Unknown category '{name}'")]
    UnknownCategory {
        /// The rejected category name
        name: String,
    },

    /// Failed to build a reply string
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Missing or malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Serenity/poise framework failure
    #[error("Serenity/Poise framework error: {0}")]
    Serenity(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Serenity(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
