//! SQLite storage implementation for net worth certificates.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `networth-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for persons and certificates
//! - Database-specific model types (with Diesel derives)
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod certificates;
pub mod persons;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use certificates::CertificateRepository;
pub use persons::PersonRepository;

// Re-export from networth-core for convenience
pub use networth_core::errors::{DatabaseError, Error, Result};
