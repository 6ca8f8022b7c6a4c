//! Net Worth Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for net worth certificates: the
//! category records, the aggregate and its totals, currency conversion and
//! document rendering. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod certificates;
pub mod constants;
pub mod document;
pub mod errors;
pub mod fx;
pub mod persons;

// Re-export the aggregate and its records
pub use certificates::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
