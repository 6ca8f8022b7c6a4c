//! Persons (clients) group certificates by owner.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a person
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    pub id: Option<String>,
    pub display_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub notes: Option<String>,
}

impl NewPerson {
    /// Trims every field and drops blank optional ones.
    pub fn normalized(self) -> Result<Self> {
        let display_name = self.display_name.trim().to_string();
        if display_name.is_empty() {
            return Err(ValidationError::MissingField("displayName".to_string()).into());
        }
        let clean = |v: Option<String>| {
            v.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let email = clean(self.email);
        if let Some(email) = &email {
            if !email.contains('@') {
                return Err(ValidationError::InvalidInput(format!(
                    "'{}' is not an email address",
                    email
                ))
                .into());
            }
        }
        Ok(Self {
            id: clean(self.id),
            display_name,
            email,
            phone_number: clean(self.phone_number),
            notes: clean(self.notes),
        })
    }
}
