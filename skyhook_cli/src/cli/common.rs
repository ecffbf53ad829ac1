use std::env;

use anyhow::Context;
use skyhook_core::{CharacterId, Timestamp};
use skyhook_esi::{
    ClientConfig, EsiClient, KeyringTokenStore, StaticAccessToken, StoredAccessToken, StoredToken,
};
use url::Url;

const DEFAULT_USER_AGENT: &str = concat!("skyhook/", env!("CARGO_PKG_VERSION"));
const KEYRING_SERVICE: &str = "skyhook";
const KEYRING_ACCOUNT_PREFIX: &str = "esi-token";

pub(crate) fn load_client_config() -> anyhow::Result<ClientConfig> {
    let user_agent =
        optional_env("SKYHOOK_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.into());
    let mut config =
        ClientConfig::new(user_agent).context("failed to build default ESI config")?;

    if let Some(raw) = optional_env("ESI_BASE_URL") {
        config.base_url =
            Url::parse(&raw).with_context(|| format!("invalid ESI_BASE_URL `{raw}`"))?;
    }
    if let Some(datasource) = optional_env("ESI_DATASOURCE") {
        config.datasource = datasource;
    }
    if let Some(raw) = optional_env("ESI_PAGE_CONCURRENCY") {
        config.page_concurrency = raw
            .parse()
            .with_context(|| format!("invalid ESI_PAGE_CONCURRENCY `{raw}`"))?;
    }
    config.language = optional_env("ESI_LANGUAGE");

    config.validate().context("invalid ESI configuration")?;
    Ok(config)
}

pub(crate) fn token_store() -> KeyringTokenStore {
    KeyringTokenStore::new(KEYRING_SERVICE, KEYRING_ACCOUNT_PREFIX)
}

/// Client for endpoints that need no token.
pub(crate) fn public_client() -> anyhow::Result<EsiClient> {
    let config = load_client_config()?;
    log::debug!("using ESI at {} ({})", config.base_url, config.datasource);
    EsiClient::new(config).context("failed to create ESI client")
}

/// Client authenticated as `character_id`.
///
/// `ESI_TOKEN` wins over the keyring when set.
pub(crate) fn authed_client(character_id: CharacterId) -> anyhow::Result<EsiClient> {
    let client = public_client()?;
    Ok(match optional_env("ESI_TOKEN") {
        Some(token) => {
            log::debug!("using ESI_TOKEN for character {character_id}");
            client.with_token_source(StaticAccessToken::new(token))
        }
        None => client.with_token_source(StoredAccessToken::new(token_store(), character_id)),
    })
}

pub(crate) fn selected_character_id(explicit: Option<i32>) -> Option<CharacterId> {
    explicit.map(CharacterId).or_else(|| {
        optional_env("EVE_CHARACTER_ID")
            .and_then(|raw| raw.parse::<i32>().ok())
            .map(CharacterId)
    })
}

pub(crate) fn required_character_id(explicit: Option<i32>) -> anyhow::Result<CharacterId> {
    selected_character_id(explicit)
        .context("character id is required; provide --character-id or set EVE_CHARACTER_ID")
}

pub(crate) fn print_token_details(token: &StoredToken) {
    let now = Timestamp::now();
    let valid_for = token
        .access_expires_at
        .signed_duration_since(now)
        .num_seconds();

    println!("Character: {}", token.character_id);
    println!(
        "Name: {}",
        token.character_name.as_deref().unwrap_or("<unknown>")
    );
    println!("Scopes: {}", token.scopes.join(","));
    println!("Updated at: {}", token.updated_at);
    println!(
        "Valid until: {} ({})",
        token.access_expires_at,
        if valid_for >= 0 {
            format!("in {valid_for}s")
        } else {
            format!("expired {}s ago", -valid_for)
        }
    );
}

pub(crate) fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render JSON")?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn optional_env(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::split_list;

    #[test]
    fn split_list_drops_blank_entries() {
        assert_eq!(
            split_list("publicData, esi-wallet.read_character_wallet.v1,,"),
            vec![
                "publicData".to_string(),
                "esi-wallet.read_character_wallet.v1".to_string()
            ]
        );
    }
}
