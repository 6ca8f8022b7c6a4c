use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use networth_core::persons::{NewPerson, Person, PersonRepositoryTrait};
use networth_core::Result;

use super::model::PersonDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::persons;

pub struct PersonRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PersonRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PersonRepository { pool, writer }
    }
}

#[async_trait]
impl PersonRepositoryTrait for PersonRepository {
    fn list(&self) -> Result<Vec<Person>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = persons::table
            .order((persons::display_name.asc(), persons::created_at.asc()))
            .select(PersonDB::as_select())
            .load::<PersonDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    fn get_by_id(&self, person_id: &str) -> Result<Option<Person>> {
        let mut conn = get_connection(&self.pool)?;
        let row = persons::table
            .find(person_id)
            .select(PersonDB::as_select())
            .first::<PersonDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Person::from))
    }

    async fn create(&self, new_person: NewPerson) -> Result<Person> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Person> {
                let now = Utc::now().naive_utc();
                let row = PersonDB {
                    id: new_person
                        .id
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                    display_name: new_person.display_name,
                    email: new_person.email,
                    phone_number: new_person.phone_number,
                    notes: new_person.notes,
                    created_at: now,
                    updated_at: now,
                };

                let saved = diesel::insert_into(persons::table)
                    .values(&row)
                    .returning(PersonDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Person::from(saved))
            })
            .await
    }
}
