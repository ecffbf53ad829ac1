use clap::{Args, Subcommand};
use skyhook_esi::api::universe::IdName;

use crate::cli::common::public_client;

#[derive(Debug, Args)]
pub(crate) struct UniverseCommand {
    #[command(subcommand)]
    subcmd: UniverseSubcommand,
}

#[derive(Debug, Subcommand)]
enum UniverseSubcommand {
    /// Resolve exact names to IDs.
    Ids(IdsCommand),

    /// Resolve IDs to names and categories.
    Names(NamesCommand),
}

impl UniverseCommand {
    pub(crate) async fn run(&self) -> anyhow::Result<()> {
        match &self.subcmd {
            UniverseSubcommand::Ids(cmd) => cmd.run().await,
            UniverseSubcommand::Names(cmd) => cmd.run().await,
        }
    }
}

#[derive(Debug, Args)]
struct IdsCommand {
    #[arg(required = true)]
    names: Vec<String>,
}

impl IdsCommand {
    async fn run(&self) -> anyhow::Result<()> {
        let client = public_client()?;
        let resolved = client.post_universe_ids(&self.names).await?;

        let groups: [(&str, &[IdName]); 10] = [
            ("agent", resolved.agents.as_slice()),
            ("alliance", resolved.alliances.as_slice()),
            ("character", resolved.characters.as_slice()),
            ("constellation", resolved.constellations.as_slice()),
            ("corporation", resolved.corporations.as_slice()),
            ("faction", resolved.factions.as_slice()),
            ("inventory_type", resolved.inventory_types.as_slice()),
            ("region", resolved.regions.as_slice()),
            ("station", resolved.stations.as_slice()),
            ("solar_system", resolved.systems.as_slice()),
        ];

        let mut found = 0;
        for (category, entries) in groups {
            for entry in entries {
                println!("{}\t{}\t{}", entry.id, category, entry.name);
                found += 1;
            }
        }
        if found == 0 {
            log::warn!("no names resolved");
        }

        Ok(())
    }
}

#[derive(Debug, Args)]
struct NamesCommand {
    #[arg(required = true)]
    ids: Vec<i64>,
}

impl NamesCommand {
    async fn run(&self) -> anyhow::Result<()> {
        let client = public_client()?;
        let names = client.post_universe_names(&self.ids).await?;

        for entry in &names {
            println!("{}\t{:?}\t{}", entry.id, entry.category, entry.name);
        }

        Ok(())
    }
}
