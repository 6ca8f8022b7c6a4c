//! Storage-specific error types for SQLite operations.
//!
//! Diesel, r2d2 and snapshot (de)serialization failures are wrapped here and
//! converted to the database-agnostic errors defined in `networth_core`.

use diesel::result::Error as DieselError;
use networth_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Storage-specific errors that wrap Diesel and r2d2 types.
///
/// These errors never leave the storage layer; they are converted to
/// `networth_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Stored row is invalid: {0}")]
    InvalidRow(String),

    #[error("Core error: {0}")]
    CoreError(String),
}

/// Convert core Error to StorageError (for the write actor transaction wrapper)
impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError::CoreError(err.to_string())
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Database(DatabaseError::PoolCreationFailed(e.to_string()))
            }
            StorageError::QueryFailed(DieselError::NotFound) => {
                Error::Database(DatabaseError::NotFound("Record not found".to_string()))
            }
            StorageError::QueryFailed(DieselError::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            )) => Error::Database(DatabaseError::UniqueViolation(info.message().to_string())),
            StorageError::QueryFailed(DieselError::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                info,
            )) => Error::Database(DatabaseError::ForeignKeyViolation(
                info.message().to_string(),
            )),
            StorageError::QueryFailed(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            StorageError::MigrationFailed(e) => Error::Database(DatabaseError::MigrationFailed(e)),
            StorageError::SerializationError(e) => {
                Error::Database(DatabaseError::Internal(e.to_string()))
            }
            StorageError::InvalidRow(e) => Error::Database(DatabaseError::Internal(e)),
            StorageError::CoreError(e) => Error::Database(DatabaseError::Internal(e)),
        }
    }
}

/// Extension trait for converting Diesel and r2d2 results to core results.
///
/// The orphan rule forbids `From<DieselError> for networth_core::Error`, so the
/// conversion goes through `StorageError`.
pub trait IntoCore<T> {
    fn into_core(self) -> networth_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_core(self) -> networth_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, r2d2::Error> {
    fn into_core(self) -> networth_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, serde_json::Error> {
    fn into_core(self) -> networth_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}
