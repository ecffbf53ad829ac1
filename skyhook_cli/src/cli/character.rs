use clap::{Args, Subcommand};

use crate::cli::common::{authed_client, public_client, required_character_id};

#[derive(Debug, Args)]
pub(crate) struct CharacterCommand {
    #[command(subcommand)]
    subcmd: CharacterSubcommand,
}

#[derive(Debug, Subcommand)]
enum CharacterSubcommand {
    /// Public character sheet.
    Info(InfoCommand),

    /// Every asset the character owns, across all pages.
    Assets(AssetsCommand),

    /// Wallet balance in ISK.
    Wallet(WalletCommand),
}

impl CharacterCommand {
    pub(crate) async fn run(&self) -> anyhow::Result<()> {
        match &self.subcmd {
            CharacterSubcommand::Info(cmd) => cmd.run().await,
            CharacterSubcommand::Assets(cmd) => cmd.run().await,
            CharacterSubcommand::Wallet(cmd) => cmd.run().await,
        }
    }
}

#[derive(Debug, Args)]
struct InfoCommand {
    #[arg(long)]
    character_id: Option<i32>,
}

impl InfoCommand {
    async fn run(&self) -> anyhow::Result<()> {
        let character_id = required_character_id(self.character_id)?;
        let client = public_client()?;
        let info = client.get_character(character_id).await?;

        println!("Character: {character_id}");
        println!("Name: {}", info.name);
        println!("Corporation id: {}", info.corporation_id);
        println!(
            "Alliance id: {}",
            info.alliance_id
                .map(|value| value.to_string())
                .unwrap_or_else(|| "<none>".to_owned())
        );
        println!("Birthday: {}", info.birthday);
        if let Some(security_status) = info.security_status {
            println!("Security status: {security_status:.2}");
        }

        Ok(())
    }
}

#[derive(Debug, Args)]
struct AssetsCommand {
    #[arg(long)]
    character_id: Option<i32>,
}

impl AssetsCommand {
    async fn run(&self) -> anyhow::Result<()> {
        let character_id = required_character_id(self.character_id)?;
        let client = authed_client(character_id)?;
        let assets = client.get_character_assets(character_id).await?;
        log::info!("fetched {} assets for {character_id}", assets.len());

        for asset in &assets {
            println!(
                "{}\ttype {}\tx{}\t{} @ {}",
                asset.item_id, asset.type_id, asset.quantity, asset.location_flag, asset.location_id
            );
        }

        Ok(())
    }
}

#[derive(Debug, Args)]
struct WalletCommand {
    #[arg(long)]
    character_id: Option<i32>,
}

impl WalletCommand {
    async fn run(&self) -> anyhow::Result<()> {
        let character_id = required_character_id(self.character_id)?;
        let client = authed_client(character_id)?;
        let balance = client.get_character_wallet(character_id).await?;

        println!("Character: {character_id}");
        println!("Balance: {balance:.2} ISK");
        Ok(())
    }
}
