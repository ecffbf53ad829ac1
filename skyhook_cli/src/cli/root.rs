use clap::{ArgAction, Parser, Subcommand};

use crate::cli::{
    character::CharacterCommand, market::MarketCommand, raw::RawCommand, route::RouteCommand,
    status::StatusCommand, token::TokenCommand, universe::UniverseCommand,
};

pub(crate) fn get_args() -> CliOpts {
    CliOpts::parse()
}

#[derive(Debug, Parser)]
#[command(version = clap::crate_version!(), about = "Query the EVE Swagger Interface")]
pub(crate) struct CliOpts {
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    subcmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage stored access tokens.
    Token(TokenCommand),

    /// Show Tranquility server status.
    Status(StatusCommand),

    /// Character sheet, assets and wallet.
    Character(CharacterCommand),

    /// Regional market data.
    Market(MarketCommand),

    /// Plan a route between two solar systems.
    Route(RouteCommand),

    /// Resolve names and IDs in bulk.
    Universe(UniverseCommand),

    /// Issue arbitrary requests and print the JSON body.
    Raw(RawCommand),
}

impl CliOpts {
    pub(crate) fn verbose(&self) -> u8 {
        self.verbose
    }

    pub(crate) async fn run(&self) -> anyhow::Result<()> {
        match &self.subcmd {
            Command::Token(cmd) => cmd.run().await,
            Command::Status(cmd) => cmd.run().await,
            Command::Character(cmd) => cmd.run().await,
            Command::Market(cmd) => cmd.run().await,
            Command::Route(cmd) => cmd.run().await,
            Command::Universe(cmd) => cmd.run().await,
            Command::Raw(cmd) => cmd.run().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use skyhook_core::SolarSystemId;
    use skyhook_esi::api::routes::RouteFlag;

    use super::{CliOpts, Command};

    #[test]
    fn command_definition_is_consistent() {
        CliOpts::command().debug_assert();
    }

    #[test]
    fn verbosity_counts_repeated_flags() {
        let opts = CliOpts::try_parse_from(["skyhook", "-vv", "status"]).expect("parse");
        assert_eq!(opts.verbose(), 2);
    }

    #[test]
    fn route_accepts_avoid_list() {
        let opts = CliOpts::try_parse_from([
            "skyhook",
            "route",
            "30000142",
            "30002187",
            "--flag",
            "secure",
            "--avoid",
            "30002053,30002058",
        ])
        .expect("parse");
        assert_eq!(opts.verbose(), 0);

        let Command::Route(route) = &opts.subcmd else {
            panic!("expected route subcommand, got {:?}", opts.subcmd);
        };
        let options = route.options();
        assert_eq!(
            options.avoid,
            vec![SolarSystemId(30002053), SolarSystemId(30002058)]
        );
        assert_eq!(options.flag, Some(RouteFlag::Secure));
        assert!(options.connections.is_empty());
    }

    #[test]
    fn route_defaults_leave_flag_unset() {
        let opts = CliOpts::try_parse_from(["skyhook", "route", "30000142", "30002187"])
            .expect("parse");
        let Command::Route(route) = &opts.subcmd else {
            panic!("expected route subcommand, got {:?}", opts.subcmd);
        };
        assert_eq!(route.options(), Default::default());
    }
}
