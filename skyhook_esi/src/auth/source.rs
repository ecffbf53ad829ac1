use std::time::Duration;

use async_trait::async_trait;
use skyhook_core::{CharacterId, Timestamp};

use crate::{EsiError, EsiResult, token_store::TokenStore};

const DEFAULT_EXPIRY_SKEW: Duration = Duration::from_secs(30);

/// Supplies the bearer token injected into every request.
///
/// The client never refreshes tokens itself; implementations that want
/// refresh semantics do it here.
#[async_trait]
pub trait AccessTokenSource: Send + Sync {
    async fn access_token(&self) -> EsiResult<String>;
}

pub trait Clock {
    fn now(&self) -> Timestamp;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

#[derive(Clone)]
pub struct StaticAccessToken(String);

impl StaticAccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticAccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticAccessToken(<redacted>)")
    }
}

#[async_trait]
impl AccessTokenSource for StaticAccessToken {
    async fn access_token(&self) -> EsiResult<String> {
        Ok(self.0.clone())
    }
}

/// Reads a character's token from a [`TokenStore`] on every request.
pub struct StoredAccessToken<S, T = SystemClock>
where
    S: TokenStore,
    T: Clock,
{
    store: S,
    clock: T,
    character_id: CharacterId,
    expiry_skew: Duration,
}

impl<S> StoredAccessToken<S, SystemClock>
where
    S: TokenStore,
{
    pub fn new(store: S, character_id: CharacterId) -> Self {
        Self::with_clock(store, character_id, SystemClock)
    }
}

impl<S, T> StoredAccessToken<S, T>
where
    S: TokenStore,
    T: Clock,
{
    pub fn with_clock(store: S, character_id: CharacterId, clock: T) -> Self {
        Self {
            store,
            clock,
            character_id,
            expiry_skew: DEFAULT_EXPIRY_SKEW,
        }
    }

    pub fn with_expiry_skew(mut self, expiry_skew: Duration) -> Self {
        self.expiry_skew = expiry_skew;
        self
    }

    pub fn character_id(&self) -> CharacterId {
        self.character_id
    }
}

#[async_trait]
impl<S, T> AccessTokenSource for StoredAccessToken<S, T>
where
    S: TokenStore + Send + Sync,
    T: Clock + Send + Sync,
{
    async fn access_token(&self) -> EsiResult<String> {
        let Some(token) = self.store.load_token(self.character_id)? else {
            return Err(EsiError::MissingToken {
                character_id: self.character_id,
            });
        };

        if token.is_expired(self.clock.now(), self.expiry_skew) {
            log::debug!(
                "stored token for character {} expired at {}",
                self.character_id,
                token.access_expires_at
            );
            return Err(EsiError::TokenExpired {
                character_id: self.character_id,
            });
        }

        Ok(token.access_token)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use skyhook_core::{CharacterId, Timestamp};

    use super::{AccessTokenSource, Clock, StaticAccessToken, StoredAccessToken};
    use crate::{
        EsiError,
        auth::StoredToken,
        token_store::{MemoryTokenStore, TokenStore},
    };

    #[derive(Clone, Copy)]
    struct FixedClock {
        now: Timestamp,
    }

    impl Clock for FixedClock {
        fn now(&self) -> Timestamp {
            self.now
        }
    }

    fn sample_token(expires_at: Timestamp) -> StoredToken {
        StoredToken {
            character_id: CharacterId(9001),
            character_name: Some("Pilot".to_string()),
            scopes: vec!["esi-assets.read_assets.v1".to_string()],
            access_token: "access".to_string(),
            access_expires_at: expires_at,
            updated_at: ts(100),
        }
    }

    #[tokio::test]
    async fn static_token_is_returned_verbatim() {
        let source = StaticAccessToken::new("abc");
        assert_eq!(source.access_token().await.expect("token"), "abc");
        assert_eq!(format!("{source:?}"), "StaticAccessToken(<redacted>)");
    }

    #[tokio::test]
    async fn stored_token_is_returned_while_valid() {
        let store = MemoryTokenStore::new();
        store
            .save_token(&sample_token(ts(10_000)))
            .expect("save should work");
        let source =
            StoredAccessToken::with_clock(store, CharacterId(9001), FixedClock { now: ts(500) });

        assert_eq!(source.access_token().await.expect("token"), "access");
    }

    #[tokio::test]
    async fn missing_token_is_reported_per_character() {
        let source = StoredAccessToken::with_clock(
            MemoryTokenStore::new(),
            CharacterId(42),
            FixedClock { now: ts(500) },
        );

        let err = source.access_token().await.expect_err("no token stored");
        assert!(matches!(
            err,
            EsiError::MissingToken {
                character_id: CharacterId(42)
            }
        ));
    }

    #[tokio::test]
    async fn token_inside_skew_window_counts_as_expired() {
        let store = MemoryTokenStore::new();
        store
            .save_token(&sample_token(ts(520)))
            .expect("save should work");
        let source =
            StoredAccessToken::with_clock(store, CharacterId(9001), FixedClock { now: ts(500) })
                .with_expiry_skew(Duration::from_secs(30));

        let err = source.access_token().await.expect_err("token inside skew");
        assert!(matches!(err, EsiError::TokenExpired { .. }));
    }

    #[test]
    fn has_scope_matches_exact_names() {
        let token = sample_token(ts(1_000));
        assert!(token.has_scope("esi-assets.read_assets.v1"));
        assert!(!token.has_scope("esi-assets"));
    }

    fn ts(epoch_secs: i64) -> Timestamp {
        Timestamp::from_epoch_secs(epoch_secs).expect("valid epoch seconds")
    }
}
