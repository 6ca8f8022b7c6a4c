//! Core error types for the net worth certificate domain.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::fx::FxError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the certificate application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(String),

    #[error("Net worth calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Document rendering failed: {0}")]
    Render(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A database transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Errors raised while aggregating category records.
///
/// These indicate a malformed aggregate and must never be papered over with a
/// coerced value: a wrong figure on an attested certificate is worse than none.
#[derive(Error, Debug, PartialEq)]
pub enum CalculatorError {
    #[error("{category} record #{index} has a non-finite amount")]
    NonFiniteAmount { category: String, index: usize },

    #[error("{category} record #{index} field '{field}' is not a finite number")]
    NonFiniteField {
        category: String,
        index: usize,
        field: &'static str,
    },
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Index {index} is out of range for {category} ({len} records)")]
    IndexOutOfRange {
        category: String,
        index: usize,
        len: usize,
    },

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
