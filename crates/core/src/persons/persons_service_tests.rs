use super::*;
use crate::errors::{Error, Result, ValidationError};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct InMemoryPersons {
    persons: Mutex<Vec<Person>>,
}

#[async_trait]
impl PersonRepositoryTrait for InMemoryPersons {
    fn list(&self) -> Result<Vec<Person>> {
        let mut persons = self.persons.lock().unwrap().clone();
        persons.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        Ok(persons)
    }

    fn get_by_id(&self, person_id: &str) -> Result<Option<Person>> {
        Ok(self
            .persons
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == person_id)
            .cloned())
    }

    async fn create(&self, new_person: NewPerson) -> Result<Person> {
        let now = Utc::now().naive_utc();
        let person = Person {
            id: new_person.id.unwrap_or_else(|| "generated".to_string()),
            display_name: new_person.display_name,
            email: new_person.email,
            phone_number: new_person.phone_number,
            notes: new_person.notes,
            created_at: now,
            updated_at: now,
        };
        self.persons.lock().unwrap().push(person.clone());
        Ok(person)
    }
}

fn service() -> PersonService {
    PersonService::new(Arc::new(InMemoryPersons::default()))
}

#[tokio::test]
async fn create_trims_and_drops_blank_fields() {
    let service = service();
    let person = service
        .create_person(NewPerson {
            id: Some("p1".to_string()),
            display_name: "  Asha Rao ".to_string(),
            email: Some(" asha@example.com ".to_string()),
            phone_number: Some("   ".to_string()),
            notes: None,
        })
        .await
        .unwrap();

    assert_eq!(person.display_name, "Asha Rao");
    assert_eq!(person.email.as_deref(), Some("asha@example.com"));
    assert!(person.phone_number.is_none());
    assert_eq!(service.get_person("p1").unwrap(), person);
}

#[tokio::test]
async fn create_rejects_blank_name_and_bad_email() {
    let service = service();
    let err = service
        .create_person(NewPerson {
            display_name: " ".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::MissingField(_))
    ));

    let err = service
        .create_person(NewPerson {
            display_name: "Kiran".to_string(),
            email: Some("kiran.example.com".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn list_is_sorted_and_missing_is_not_found() {
    let service = service();
    for (id, name) in [("b", "Zoya"), ("a", "Meera")] {
        service
            .create_person(NewPerson {
                id: Some(id.to_string()),
                display_name: name.to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let names: Vec<String> = service
        .get_persons()
        .unwrap()
        .into_iter()
        .map(|p| p.display_name)
        .collect();
    assert_eq!(names, vec!["Meera", "Zoya"]);
    assert!(matches!(service.get_person("zzz"), Err(Error::NotFound(_))));
}
