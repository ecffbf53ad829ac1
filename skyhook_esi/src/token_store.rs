use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use keyring::Entry;
use skyhook_core::CharacterId;

use crate::{EsiError, EsiResult, auth::StoredToken};

/// Persists at most one [`StoredToken`] per character.
pub trait TokenStore {
    fn load_token(&self, character_id: CharacterId) -> EsiResult<Option<StoredToken>>;
    fn save_token(&self, token: &StoredToken) -> EsiResult<()>;
    fn clear_token(&self, character_id: CharacterId) -> EsiResult<()>;
}

/// Tokens kept in the OS keyring as JSON, one entry per character.
#[derive(Clone, Debug)]
pub struct KeyringTokenStore {
    service: String,
    account_prefix: String,
}

impl KeyringTokenStore {
    pub fn new(service: impl Into<String>, account_prefix: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            account_prefix: account_prefix.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    fn account(&self, character_id: CharacterId) -> String {
        format!("{}:character:{character_id}", self.account_prefix)
    }

    fn entry(&self, character_id: CharacterId) -> EsiResult<Entry> {
        Ok(Entry::new(&self.service, &self.account(character_id))?)
    }
}

impl TokenStore for KeyringTokenStore {
    fn load_token(&self, character_id: CharacterId) -> EsiResult<Option<StoredToken>> {
        let raw = match self.entry(character_id)?.get_password() {
            Ok(raw) => raw,
            Err(keyring::Error::NoEntry) => {
                log::debug!("no keyring entry for {}", self.account(character_id));
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        decode_token(character_id, &raw).map(Some)
    }

    fn save_token(&self, token: &StoredToken) -> EsiResult<()> {
        let raw = serde_json::to_string(token).map_err(EsiError::SessionSerialization)?;
        self.entry(token.character_id)?.set_password(&raw)?;
        log::debug!("saved token for character {}", token.character_id);
        Ok(())
    }

    fn clear_token(&self, character_id: CharacterId) -> EsiResult<()> {
        match self.entry(character_id)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Decodes a stored entry and checks it belongs to the character it was filed under.
fn decode_token(character_id: CharacterId, raw: &str) -> EsiResult<StoredToken> {
    let token: StoredToken = serde_json::from_str(raw).map_err(EsiError::SessionSerialization)?;
    if token.character_id != character_id {
        return Err(EsiError::message(format!(
            "stored token for character {character_id} belongs to character {}",
            token.character_id
        )));
    }
    Ok(token)
}

/// Process-local store; tokens vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<HashMap<CharacterId, StoredToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: StoredToken) -> Self {
        let store = Self::default();
        store
            .tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.character_id, token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load_token(&self, character_id: CharacterId) -> EsiResult<Option<StoredToken>> {
        let tokens = self.tokens.read().unwrap_or_else(PoisonError::into_inner);
        Ok(tokens.get(&character_id).cloned())
    }

    fn save_token(&self, token: &StoredToken) -> EsiResult<()> {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.character_id, token.clone());
        Ok(())
    }

    fn clear_token(&self, character_id: CharacterId) -> EsiResult<()> {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&character_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use skyhook_core::{CharacterId, Timestamp};

    use super::{KeyringTokenStore, MemoryTokenStore, TokenStore, decode_token};
    use crate::{EsiError, auth::StoredToken};

    fn token(character_id: i32) -> StoredToken {
        let ts = |secs| Timestamp::from_epoch_secs(secs).expect("valid epoch seconds");
        StoredToken {
            character_id: CharacterId(character_id),
            character_name: None,
            scopes: vec!["publicData".to_string()],
            access_token: format!("access-{character_id}"),
            access_expires_at: ts(2_000_000_000),
            updated_at: ts(1_900_000_000),
        }
    }

    #[test]
    fn accounts_are_scoped_per_character() {
        let store = KeyringTokenStore::new("skyhook", "esi-token");
        assert_eq!(store.service(), "skyhook");
        assert_eq!(
            store.account(CharacterId(90_000_001)),
            "esi-token:character:90000001"
        );
    }

    #[test]
    fn decoding_rejects_tokens_filed_under_another_character() {
        let raw = serde_json::to_string(&token(7)).expect("serialize");

        assert_eq!(
            decode_token(CharacterId(7), &raw).expect("own token"),
            token(7)
        );
        let err = decode_token(CharacterId(8), &raw).expect_err("foreign token");
        assert!(matches!(err, EsiError::Message(_)));
        assert!(matches!(
            decode_token(CharacterId(7), "not json"),
            Err(EsiError::SessionSerialization(_))
        ));
    }

    #[test]
    fn memory_store_saves_loads_and_clears() {
        let store = MemoryTokenStore::with_token(token(1));
        store.save_token(&token(2)).expect("save");

        assert_eq!(store.load_token(CharacterId(1)).expect("load"), Some(token(1)));
        store.clear_token(CharacterId(1)).expect("clear");
        store.clear_token(CharacterId(1)).expect("clearing twice is fine");

        assert_eq!(store.load_token(CharacterId(1)).expect("load"), None);
        assert_eq!(store.load_token(CharacterId(2)).expect("load"), Some(token(2)));
    }
}
