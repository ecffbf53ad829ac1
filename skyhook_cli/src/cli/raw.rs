use anyhow::Context;
use clap::{Args, Subcommand};
use skyhook_esi::{EsiClient, Query, concat_responses};

use crate::cli::common::{authed_client, print_json, public_client, selected_character_id};

#[derive(Debug, Args)]
pub(crate) struct RawCommand {
    #[command(subcommand)]
    subcmd: RawSubcommand,
}

#[derive(Debug, Subcommand)]
enum RawSubcommand {
    /// GET a path relative to the ESI base url.
    Get(GetCommand),
}

impl RawCommand {
    pub(crate) async fn run(&self) -> anyhow::Result<()> {
        match &self.subcmd {
            RawSubcommand::Get(cmd) => cmd.run().await,
        }
    }
}

#[derive(Debug, Args)]
struct GetCommand {
    /// Endpoint path such as `/markets/prices/`.
    path: String,

    /// Query parameter as `name=value`; may be repeated.
    #[arg(short, long = "param", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// Follow `X-Pages` and print one concatenated array.
    #[arg(long)]
    paginate: bool,

    /// Authenticate as this character (falls back to EVE_CHARACTER_ID when --auth is set).
    #[arg(long)]
    character_id: Option<i32>,

    #[arg(long)]
    auth: bool,
}

impl GetCommand {
    async fn run(&self) -> anyhow::Result<()> {
        let client = self.client()?;
        let query = self
            .params
            .iter()
            .fold(Query::new(), |query, (name, value)| {
                query.with(name.clone(), value)
            });

        if self.paginate {
            let responses = client.get_paginated(&self.path, &query).await?;
            log::info!("fetched {} pages from {}", responses.len(), self.path);
            let items: Vec<serde_json::Value> = concat_responses(&responses)?;
            return print_json(&serde_json::Value::Array(items));
        }

        let response = client.get(&self.path, &query).await?;
        if let Some(expires) = response.expires() {
            log::info!("cached until {expires}");
        }
        if response.body().is_empty() {
            return Ok(());
        }
        let body: serde_json::Value = response
            .json()
            .with_context(|| format!("{} did not return JSON", self.path))?;
        print_json(&body)
    }

    fn client(&self) -> anyhow::Result<EsiClient> {
        if !self.auth && self.character_id.is_none() {
            return public_client();
        }
        match selected_character_id(self.character_id) {
            Some(character_id) => authed_client(character_id),
            None => anyhow::bail!(
                "--auth needs a character; provide --character-id or set EVE_CHARACTER_ID"
            ),
        }
    }
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_owned(), value.to_owned()))
        }
        _ => Err(format!("expected name=value, got `{raw}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_param;

    #[test]
    fn params_split_on_first_equals() {
        assert_eq!(
            parse_param("type_id=34"),
            Ok(("type_id".to_string(), "34".to_string()))
        );
        assert_eq!(
            parse_param("search=a=b"),
            Ok(("search".to_string(), "a=b".to_string()))
        );
        assert!(parse_param("=34").is_err());
        assert!(parse_param("type_id").is_err());
    }
}
