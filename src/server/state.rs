//! Shared application state
//!
//! Built once from configuration and cloned into every request.

use std::sync::Arc;

use log::{info, warn};

use crate::auth::{CredentialValidator, KnownUsers};
use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<CredentialValidator>,
    pub known_users: Arc<KnownUsers>,
}

impl AppState {
    pub fn new(validator: CredentialValidator, known_users: KnownUsers) -> Self {
        Self {
            validator: Arc::new(validator),
            known_users: Arc::new(known_users),
        }
    }

    /// Compile the field rules and load the known-user table.
    ///
    /// Records that can never pass the field rules are kept but logged,
    /// since no request will ever match them.
    pub fn from_config(config: &ServerConfig) -> Result<Self, regex::Error> {
        let validator = CredentialValidator::new(config.limits.clone())?;
        let known_users = KnownUsers::new(config.known_users.clone());

        if known_users.is_empty() {
            warn!("Known-user table is empty; every sign-in will be refused");
        }

        for (name, reason) in unreachable_users(&validator, &known_users) {
            warn!("Known user '{}' can never sign in: {}", name, reason);
        }

        info!("Loaded {} known users", known_users.len());
        Ok(Self::new(validator, known_users))
    }
}

/// Names of table records that fail binding or field rules, with the first failure.
pub fn unreachable_users<'a>(
    validator: &CredentialValidator,
    known_users: &'a KnownUsers,
) -> Vec<(&'a str, String)> {
    known_users
        .records()
        .iter()
        .filter_map(|record| {
            let reason = match validator.check_bounds(record) {
                Err(e) => e.to_string(),
                Ok(()) => validator.validate(record).err()?.to_string(),
            };
            Some((record.name.as_str(), reason))
        })
        .collect()
}
