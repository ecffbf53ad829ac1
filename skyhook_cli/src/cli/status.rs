use clap::Args;

use crate::cli::common::public_client;

#[derive(Debug, Args)]
pub(crate) struct StatusCommand {}

impl StatusCommand {
    pub(crate) async fn run(&self) -> anyhow::Result<()> {
        let client = public_client()?;
        let status = client.get_status().await?;

        println!("Players: {}", status.players);
        println!("Server version: {}", status.server_version);
        println!("Started: {}", status.start_time);
        if status.vip == Some(true) {
            println!("VIP mode is active");
        }

        Ok(())
    }
}
