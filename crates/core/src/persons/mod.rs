//! Persons module - clients that certificates are filed under.

pub mod persons_model;
pub mod persons_service;
pub mod persons_traits;

#[cfg(test)]
mod persons_service_tests;

pub use persons_model::{NewPerson, Person};
pub use persons_service::PersonService;
pub use persons_traits::{PersonRepositoryTrait, PersonServiceTrait};
