//! Unit tests for command-line parsing.

use clap::CommandFactory;
use clap::Parser;

use super::{Cli, Commands};
use crate::commands::campaign_cmd::CampaignCommands;

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn parses_a_campaign_update_with_flags() {
    let cli = Cli::parse_from([
        "kiosko-admin",
        "campaigns",
        "update",
        "7",
        "--locked",
        "true",
        "--name",
        "Renamed",
    ]);

    match cli.command {
        Commands::Campaigns(CampaignCommands::Update(args)) => {
            assert_eq!(args.id, 7);
            assert_eq!(args.locked, Some(true));
            assert_eq!(args.name.as_deref(), Some("Renamed"));
        }
        _ => panic!("expected a campaign update command"),
    }
}

#[test]
fn parses_a_global_config_override() {
    let cli = Cli::parse_from([
        "kiosko-admin",
        "campaigns",
        "list",
        "--config",
        "/tmp/other.toml",
    ]);

    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/other.toml"))
    );
}

#[test]
fn parses_date_arguments() {
    let cli = Cli::parse_from([
        "kiosko-admin",
        "export",
        "statistics",
        "--from",
        "2026-07-01",
        "--to",
        "2026-07-31",
    ]);

    match cli.command {
        Commands::Export(crate::commands::export_cmd::ExportCommands::Statistics {
            from,
            to,
            ..
        }) => {
            assert_eq!(from, chrono::NaiveDate::from_ymd_opt(2026, 7, 1));
            assert_eq!(to, chrono::NaiveDate::from_ymd_opt(2026, 7, 31));
        }
        _ => panic!("expected a statistics export command"),
    }
}
