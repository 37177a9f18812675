//! Unified error types and result handling.
//!
//! All fallible operations in the crate return [`Result`], which wraps the
//! single [`Error`] enum. Validation failures abort the operation before any
//! store mutation; persistence failures are not retried and propagate to the
//! caller of the mutating operation.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A user-supplied value failed validation (missing field, rating out of
    /// range, password mismatch). No state was mutated.
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of what failed
        message: String,
    },

    /// Signup collided with an existing account on a unique field.
    #[error("A user with this {field} already exists: {value}")]
    DuplicateUser {
        /// Which unique field collided (`"username"` or `"email"`)
        field: &'static str,
        /// The colliding value
        value: String,
    },

    /// An operation reserved for the item's author was attempted by
    /// someone else.
    #[error("Only the author may modify feedback {id}")]
    NotAuthor {
        /// Id of the feedback item
        id: String,
    },

    /// A transaction amount was zero, negative, or not finite.
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// An import document was missing a required top-level key.
    #[error("Import rejected: {message}")]
    Import {
        /// Why the document was rejected
        message: String,
    },

    /// Configuration error (unreadable or unparseable config file).
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },

    /// Database error from the persistence layer.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// JSON (de)serialization error for a persisted collection or slot.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
