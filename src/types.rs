//! Core data model for the directory.
//!
//! An [`Employee`] is built transiently during ingestion, validated, and then handed to an
//! [`crate::store::EmployeeStore`] which assigns its `id`.

use std::hash::{Hash, Hasher};

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::ingestion::date::parse_joined;

/// A single employee record.
///
/// Two records are equal when their emails are equal; the remaining fields do not take part in
/// equality or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identity. `0` until the record is inserted.
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Phone number, `XXX-XXXX-XXXX` once validated.
    pub tel: String,
    /// Joining date. Serialized as an ISO-8601 timestamp without offset.
    #[serde(deserialize_with = "deserialize_joined")]
    pub joined: NaiveDateTime,
}

impl Employee {
    /// Create a candidate record that has not been stored yet.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        tel: impl Into<String>,
        joined: NaiveDateTime,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
            tel: tel.into(),
            joined,
        }
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.email.hash(state);
    }
}

fn deserialize_joined<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_joined(&raw).map_err(serde::de::Error::custom)
}
