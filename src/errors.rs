//! Unified error types and result handling for `TheButler`.

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or parsing failure
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Database access failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A household id that does not correspond to a live household
    #[error("Household not found: {id}")]
    HouseholdNotFound {
        /// The id that failed to resolve
        id: i64,
    },

    /// I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
