//! Error types for the clinic records store

use thiserror::Error;

/// Main error type for persistence, validation and startup
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying SQLite failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Date input is not an 8-digit YYYYMMDD calendar date
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: &'static str },

    /// Identifier text is not a positive integer
    #[error("Invalid identifier '{0}'")]
    InvalidId(String),

    /// Pet refers to a client that does not exist
    #[error("Client not found: {0}")]
    ClientNotFound(i64),

    /// Consultation refers to a pet that does not exist
    #[error("Pet not found: {0}")]
    PetNotFound(i64),

    /// A stored value could not be turned back into a domain type
    #[error("Corrupt row in {table}: {reason}")]
    CorruptRow { table: &'static str, reason: String },

    /// Environment could not be deserialized into the configuration
    #[error("Configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for clinic operations
pub type Result<T> = std::result::Result<T, Error>;
