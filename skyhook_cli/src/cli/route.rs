use std::collections::HashMap;

use clap::{Args, ValueEnum};
use skyhook_core::SolarSystemId;
use skyhook_esi::api::routes::{RouteFlag, RouteOptions};

use crate::cli::common::public_client;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RoutePreference {
    Shortest,
    Secure,
    Insecure,
}

impl From<RoutePreference> for RouteFlag {
    fn from(preference: RoutePreference) -> Self {
        match preference {
            RoutePreference::Shortest => Self::Shortest,
            RoutePreference::Secure => Self::Secure,
            RoutePreference::Insecure => Self::Insecure,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct RouteCommand {
    origin: i32,

    destination: i32,

    #[arg(long, value_enum)]
    flag: Option<RoutePreference>,

    /// Solar systems to route around.
    #[arg(long, value_delimiter = ',')]
    avoid: Vec<i32>,

    /// Print system ids only, skipping name resolution.
    #[arg(long)]
    ids_only: bool,
}

impl RouteCommand {
    pub(crate) fn options(&self) -> RouteOptions {
        RouteOptions {
            avoid: self.avoid.iter().copied().map(SolarSystemId).collect(),
            connections: Vec::new(),
            flag: self.flag.map(RouteFlag::from),
        }
    }

    pub(crate) async fn run(&self) -> anyhow::Result<()> {
        let client = public_client()?;
        let options = self.options();
        let route = client
            .get_route(
                SolarSystemId(self.origin),
                SolarSystemId(self.destination),
                &options,
            )
            .await?;

        let names: HashMap<i32, String> = if self.ids_only || route.is_empty() {
            HashMap::new()
        } else {
            let ids: Vec<i64> = route.iter().map(|system| i64::from(system.0)).collect();
            client
                .post_universe_names(&ids)
                .await?
                .into_iter()
                .map(|entry| (entry.id, entry.name))
                .collect()
        };

        println!("Jumps: {}", route.len().saturating_sub(1));
        for (hop, system) in route.iter().enumerate() {
            match names.get(&system.0) {
                Some(name) => println!("{hop:>3}  {system}  {name}"),
                None => println!("{hop:>3}  {system}"),
            }
        }

        Ok(())
    }
}
