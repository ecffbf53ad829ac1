use std::time::Duration;

use anyhow::Context;
use clap::{Args, Subcommand};
use skyhook_core::Timestamp;
use skyhook_esi::{StoredToken, TokenStore};

use crate::cli::common::{print_token_details, required_character_id, split_list, token_store};

/// SSO access tokens live for twenty minutes.
const DEFAULT_EXPIRES_IN_SECS: u64 = 1200;

#[derive(Debug, Args)]
pub(crate) struct TokenCommand {
    #[command(subcommand)]
    subcmd: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    /// Store an access token in the keyring.
    Set(SetCommand),

    /// Show stored token metadata.
    Status(StatusCommand),

    /// Remove the stored token.
    Clear(ClearCommand),
}

impl TokenCommand {
    pub(crate) async fn run(&self) -> anyhow::Result<()> {
        match &self.subcmd {
            TokenSubcommand::Set(cmd) => cmd.run(),
            TokenSubcommand::Status(cmd) => cmd.run(),
            TokenSubcommand::Clear(cmd) => cmd.run(),
        }
    }
}

#[derive(Debug, Args)]
struct SetCommand {
    #[arg(long)]
    character_id: Option<i32>,

    /// Bearer token issued by EVE SSO.
    #[arg(long)]
    access_token: String,

    /// Seconds until the token expires.
    #[arg(long, default_value_t = DEFAULT_EXPIRES_IN_SECS)]
    expires_in: u64,

    #[arg(long)]
    name: Option<String>,

    /// Comma separated scopes granted to the token.
    #[arg(long, default_value = "")]
    scopes: String,
}

impl SetCommand {
    fn run(&self) -> anyhow::Result<()> {
        let character_id = required_character_id(self.character_id)?;
        let now = Timestamp::now();
        let access_expires_at = now
            .checked_add(Duration::from_secs(self.expires_in))
            .context("token expiry is out of range")?;

        let token = StoredToken {
            character_id,
            character_name: self.name.clone(),
            scopes: split_list(&self.scopes),
            access_token: self.access_token.trim().to_owned(),
            access_expires_at,
            updated_at: now,
        };
        token_store()
            .save_token(&token)
            .context("failed to save token in keyring")?;

        println!("Stored token for character {character_id}.");
        print_token_details(&token);
        Ok(())
    }
}

#[derive(Debug, Args)]
struct StatusCommand {
    #[arg(long)]
    character_id: Option<i32>,
}

impl StatusCommand {
    fn run(&self) -> anyhow::Result<()> {
        let character_id = required_character_id(self.character_id)?;

        match token_store().load_token(character_id)? {
            Some(token) => print_token_details(&token),
            None => println!("No token found in keyring for character {character_id}."),
        }

        Ok(())
    }
}

#[derive(Debug, Args)]
struct ClearCommand {
    #[arg(long)]
    character_id: Option<i32>,
}

impl ClearCommand {
    fn run(&self) -> anyhow::Result<()> {
        let character_id = required_character_id(self.character_id)?;

        token_store().clear_token(character_id)?;
        println!("Cleared stored token from keyring for character {character_id}.");
        Ok(())
    }
}
