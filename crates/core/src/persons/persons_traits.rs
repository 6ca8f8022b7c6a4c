use crate::errors::Result;
use crate::persons::persons_model::{NewPerson, Person};
use async_trait::async_trait;

/// Trait for person repository operations
#[async_trait]
pub trait PersonRepositoryTrait: Send + Sync {
    /// All persons, ordered by display name.
    fn list(&self) -> Result<Vec<Person>>;
    fn get_by_id(&self, person_id: &str) -> Result<Option<Person>>;
    async fn create(&self, new_person: NewPerson) -> Result<Person>;
}

/// Trait for person service operations
#[async_trait]
pub trait PersonServiceTrait: Send + Sync {
    fn get_persons(&self) -> Result<Vec<Person>>;
    fn get_person(&self, person_id: &str) -> Result<Person>;
    async fn create_person(&self, new_person: NewPerson) -> Result<Person>;
}
