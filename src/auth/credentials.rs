//! Credential records and the known-user table
//!
//! The table is built once at startup and only read afterwards.

use std::fmt;

use serde::Deserialize;

use crate::error::AuthError;

/// A name/password/phone triple, as submitted by a client or listed in the table
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credential {
    pub name: String,
    pub password: String,
    pub phone: String,
}

impl Credential {
    pub fn new(name: &str, password: &str, phone: &str) -> Self {
        Self {
            name: name.to_string(),
            password: password.to_string(),
            phone: phone.to_string(),
        }
    }
}

// Keep secrets out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .field("phone", &"<redacted>")
            .finish()
    }
}

/// Records used when the configuration does not list any
pub fn default_records() -> Vec<Credential> {
    vec![
        Credential::new("Aryan", "Aryan@30", "1234567890"),
        Credential::new("Atharv", "Atharv%03", "0986543211"),
        Credential::new("Shravani", "Shanu@15", "1223341455"),
    ]
}

/// Immutable allow-list of credential records
#[derive(Debug, Clone)]
pub struct KnownUsers {
    records: Vec<Credential>,
}

impl Default for KnownUsers {
    fn default() -> Self {
        Self::new(default_records())
    }
}

impl KnownUsers {
    pub fn new(records: Vec<Credential>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Credential] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True only when a single record matches all three fields exactly.
    pub fn contains(&self, name: &str, password: &str, phone: &str) -> bool {
        self.records
            .iter()
            .any(|u| u.name == name && u.password == password && u.phone == phone)
    }

    /// Checks a submitted record against the table.
    pub fn check(&self, candidate: &Credential) -> Result<(), AuthError> {
        if self.contains(&candidate.name, &candidate.password, &candidate.phone) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials(candidate.name.clone()))
        }
    }
}
