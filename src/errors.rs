//! Unified error type for the crate.

use thiserror::Error;

/// All failure modes surfaced by record management, aggregation, and startup.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed input: bad date strings, bad month keys,
    /// empty required fields.
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of what was malformed
        message: String,
    },

    /// Amount is negative or not a finite number.
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// A committee id supplied by the client does not exist.
    #[error("Committee not found: {id}")]
    CommitteeNotFound {
        /// The id that failed to resolve
        id: i64,
    },

    /// Configuration error during startup.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },

    /// Store-level failure from SeaORM.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (socket bind, serve loop).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
