use crate::errors::{Error, Result};
use crate::persons::persons_model::{NewPerson, Person};
use crate::persons::persons_traits::{PersonRepositoryTrait, PersonServiceTrait};
use async_trait::async_trait;
use std::sync::Arc;

pub struct PersonService {
    repository: Arc<dyn PersonRepositoryTrait>,
}

impl PersonService {
    pub fn new(repository: Arc<dyn PersonRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PersonServiceTrait for PersonService {
    fn get_persons(&self) -> Result<Vec<Person>> {
        self.repository.list()
    }

    fn get_person(&self, person_id: &str) -> Result<Person> {
        self.repository
            .get_by_id(person_id)?
            .ok_or_else(|| Error::NotFound(format!("Person {}", person_id)))
    }

    async fn create_person(&self, new_person: NewPerson) -> Result<Person> {
        let person = self.repository.create(new_person.normalized()?).await?;
        log::info!("Created person {} ({})", person.id, person.display_name);
        Ok(person)
    }
}
