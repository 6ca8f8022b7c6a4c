//! Database models for persons.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use networth_core::persons::Person;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::persons)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PersonDB {
    pub id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<PersonDB> for Person {
    fn from(db: PersonDB) -> Self {
        Self {
            id: db.id,
            display_name: db.display_name,
            email: db.email,
            phone_number: db.phone_number,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
