//! SQLite storage implementation for certificates.
//!
//! A certificate is one parent row plus one child table per category list.
//! Child rows reference the parent with `ON DELETE CASCADE`, so deleting the
//! parent removes everything it owns.

mod model;
mod repository;

pub use model::{CertificateDB, ChildRow, DocumentDB, NewCertificateDB};
pub use repository::CertificateRepository;
