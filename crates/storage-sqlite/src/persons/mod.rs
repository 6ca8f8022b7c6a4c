//! SQLite storage implementation for persons.

mod model;
mod repository;

pub use model::PersonDB;
pub use repository::PersonRepository;
