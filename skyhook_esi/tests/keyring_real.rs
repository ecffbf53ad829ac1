use std::time::{SystemTime, UNIX_EPOCH};

use skyhook_esi::{CharacterId, KeyringTokenStore, StoredToken, Timestamp, TokenStore};

const TEST_SERVICE: &str = "skyhook-keyring-integration-tests";

fn ts(epoch_secs: i64) -> Timestamp {
    Timestamp::from_epoch_secs(epoch_secs).expect("valid timestamp")
}

#[test]
fn keyring_round_trip_save_load_clear() {
    let prefix = format!(
        "token-{}-{}",
        std::process::id(),
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos()
    );
    let store = KeyringTokenStore::new(TEST_SERVICE, prefix);

    store
        .clear_token(CharacterId(123_456_789))
        .expect("cleanup before test should succeed");
    store
        .clear_token(CharacterId(987_654_321))
        .expect("cleanup before test should succeed");

    let token = StoredToken {
        character_id: CharacterId(123_456_789),
        character_name: Some("Integration Pilot".to_string()),
        scopes: vec![
            "publicData".to_string(),
            "esi-wallet.read_character_wallet.v1".to_string(),
        ],
        access_token: "access-token-test".to_string(),
        access_expires_at: ts(2_000_000_000),
        updated_at: ts(1_900_000_000),
    };
    store
        .save_token(&token)
        .expect("saving token in keyring should succeed");

    let second_token = StoredToken {
        character_id: CharacterId(987_654_321),
        character_name: None,
        scopes: vec!["publicData".to_string()],
        access_token: "second-access-token-test".to_string(),
        access_expires_at: ts(2_100_000_000),
        updated_at: ts(1_950_000_000),
    };
    store
        .save_token(&second_token)
        .expect("saving second token in keyring should succeed");

    let loaded = store
        .load_token(CharacterId(123_456_789))
        .expect("loading token from keyring should succeed");
    assert_eq!(loaded, Some(token));

    let second_loaded = store
        .load_token(CharacterId(987_654_321))
        .expect("loading second token from keyring should succeed");
    assert_eq!(second_loaded, Some(second_token));

    store
        .clear_token(CharacterId(123_456_789))
        .expect("clearing token in keyring should succeed");

    let loaded_after_clear = store
        .load_token(CharacterId(123_456_789))
        .expect("loading after clear should succeed");
    assert_eq!(loaded_after_clear, None);

    assert!(
        store
            .load_token(CharacterId(987_654_321))
            .expect("loading second token after first clear should succeed")
            .is_some()
    );

    store
        .clear_token(CharacterId(987_654_321))
        .expect("clearing second token in keyring should succeed");
}
