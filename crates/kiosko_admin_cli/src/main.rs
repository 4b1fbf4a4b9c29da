//! Kiosko Admin console entry point.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod composition;
mod config;
mod errors;

use commands::advert_cmd::AdvertCommands;
use commands::auth_cmd::AuthCommands;
use commands::campaign_cmd::CampaignCommands;
use commands::editor_cmd::EditorCommands;
use commands::export_cmd::ExportCommands;
use commands::game_cmd::GameCommands;
use commands::highlight_cmd::HighlightCommands;
use commands::publication_cmd::PublicationCommands;
use commands::supplement_cmd::SupplementCommands;
use composition::CompositionRoot;
use config::{AppConfig, DEFAULT_CONFIG_FILENAME};
use errors::Error;

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Kiosko Admin: operator console for the Kiosko newsstand platform
#[derive(Parser)]
#[command(name = "kiosko-admin")]
#[command(about = "Manage the Kiosko newsstand platform", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the operator session
    #[command(subcommand)]
    Auth(AuthCommands),

    /// Manage campaigns
    #[command(subcommand)]
    Campaigns(CampaignCommands),

    /// Manage adverts
    #[command(subcommand)]
    Adverts(AdvertCommands),

    /// Manage highlights
    #[command(subcommand)]
    Highlights(HighlightCommands),

    /// Manage games
    #[command(subcommand)]
    Games(GameCommands),

    /// Manage publications and browse their articles
    #[command(subcommand)]
    Publications(PublicationCommands),

    /// Manage supplement categories and documents
    #[command(subcommand)]
    Supplements(SupplementCommands),

    /// Customize the newsstand (colors, logo, pods, sidebars)
    #[command(subcommand)]
    Editor(EditorCommands),

    /// Download statistics and registrants exports
    #[command(subcommand)]
    Export(ExportCommands),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME));

    if let Err(err) = run(&cli.command, &config_path).await {
        error!(error = %err, "Command failed");
        eprintln!("{}", format!("Error: {err}").red());
        std::process::exit(1);
    }
}

async fn run(command: &Commands, config_path: &Path) -> Result<(), Error> {
    let config = AppConfig::load(config_path)?;
    let root = CompositionRoot::new(&config)?;

    match command {
        Commands::Auth(cmd) => commands::auth_cmd::execute(&root, cmd).await,
        Commands::Campaigns(cmd) => commands::campaign_cmd::execute(&root, cmd).await,
        Commands::Adverts(cmd) => commands::advert_cmd::execute(&root, cmd).await,
        Commands::Highlights(cmd) => commands::highlight_cmd::execute(&root, cmd).await,
        Commands::Games(cmd) => commands::game_cmd::execute(&root, cmd).await,
        Commands::Publications(cmd) => commands::publication_cmd::execute(&root, cmd).await,
        Commands::Supplements(cmd) => commands::supplement_cmd::execute(&root, cmd).await,
        Commands::Editor(cmd) => commands::editor_cmd::execute(&root, cmd).await,
        Commands::Export(cmd) => commands::export_cmd::execute(&root, cmd).await,
    }
}
