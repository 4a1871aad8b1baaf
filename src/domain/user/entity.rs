//! User entity and related types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::document::Document;

/// Family role of a registered user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Father,
    Mother,
    Son,
    Daughter,
    Grandfather,
    Grandmother,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Father => "FATHER",
            Self::Mother => "MOTHER",
            Self::Son => "SON",
            Self::Daughter => "DAUGHTER",
            Self::Grandfather => "GRANDFATHER",
            Self::Grandmother => "GRANDMOTHER",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FATHER" => Ok(Self::Father),
            "MOTHER" => Ok(Self::Mother),
            "SON" => Ok(Self::Son),
            "DAUGHTER" => Ok(Self::Daughter),
            "GRANDFATHER" => Ok(Self::Grandfather),
            "GRANDMOTHER" => Ok(Self::Grandmother),
            other => Err(format!("Unknown category '{}'", other)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: Uuid,
    full_name: String,
    active: bool,
    /// Normalized CPF, unique across users
    document: Document,
    email: String,
    phone: String,
    birthdate: NaiveDate,
    category: Category,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Column values of a persisted user
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub full_name: String,
    pub active: bool,
    pub document: Document,
    pub email: String,
    pub phone: String,
    pub birthdate: NaiveDate,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new, active user
    pub fn new(
        full_name: impl Into<String>,
        document: Document,
        email: impl Into<String>,
        phone: impl Into<String>,
        birthdate: NaiveDate,
        category: Category,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            full_name: full_name.into(),
            active: true,
            document,
            email: email.into(),
            phone: phone.into(),
            birthdate,
            category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a user from stored values
    pub fn restore(record: UserRecord) -> Self {
        Self {
            id: record.id,
            full_name: record.full_name,
            active: record.active,
            document: record.document,
            email: record.email,
            phone: record.phone,
            birthdate: record.birthdate,
            category: record.category,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn birthdate(&self) -> NaiveDate {
        self.birthdate
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    pub fn deactivate(&mut self) {
        if self.active {
            self.active = false;
            self.touch();
        }
    }

    pub fn activate(&mut self) {
        if !self.active {
            self.active = true;
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
