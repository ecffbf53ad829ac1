use std::time::Duration;

use serde::{Deserialize, Serialize};
use skyhook_core::{CharacterId, Timestamp};

/// Access token persisted for one character.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredToken {
    pub character_id: CharacterId,
    pub character_name: Option<String>,
    pub scopes: Vec<String>,
    pub access_token: String,
    pub access_expires_at: Timestamp,
    pub updated_at: Timestamp,
}

impl StoredToken {
    pub fn is_expired(&self, now: Timestamp, skew: Duration) -> bool {
        match now.checked_add(skew) {
            Some(deadline) => self.access_expires_at <= deadline,
            None => true,
        }
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|granted| granted == scope)
    }
}
