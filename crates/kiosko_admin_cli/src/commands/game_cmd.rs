//! Game management commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use colored::Colorize;
use tracing::instrument;

use kiosko_admin_core::entities::{Game, GameDraft, GamePatch};
use kiosko_admin_core::usecases::{ArchiveGame, CreateGame, GetGameById, GetGames, UpdateGame};

use crate::composition::CompositionRoot;
use crate::errors::Error;

/// Game subcommands.
#[derive(Subcommand, Debug)]
pub enum GameCommands {
    /// List all games
    List,

    /// Show one game
    Show {
        /// Game id
        id: u64,
    },

    /// Create a game
    Create(CreateArgs),

    /// Update a game
    Update(UpdateArgs),

    /// Archive a game
    Archive {
        /// Game id
        id: u64,
    },
}

/// Arguments for creating a game.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Game title
    #[arg(long)]
    pub title: String,

    /// URL the game is hosted at
    #[arg(long)]
    pub game_url: Option<String>,

    /// First day the game runs (YYYY-MM-DD)
    #[arg(long)]
    pub starts_on: Option<NaiveDate>,

    /// Last day the game runs (YYYY-MM-DD)
    #[arg(long)]
    pub ends_on: Option<NaiveDate>,
}

/// Arguments for updating a game.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Game id
    pub id: u64,

    /// New game title
    #[arg(long)]
    pub title: Option<String>,

    /// URL the game is hosted at
    #[arg(long)]
    pub game_url: Option<String>,

    /// First day the game runs (YYYY-MM-DD)
    #[arg(long)]
    pub starts_on: Option<NaiveDate>,

    /// Last day the game runs (YYYY-MM-DD)
    #[arg(long)]
    pub ends_on: Option<NaiveDate>,
}

fn print_game(game: &Game) {
    let archived = if game.is_archived { " [archived]" } else { "" };
    let window = match (game.starts_on, game.ends_on) {
        (Some(from), Some(to)) => format!(" {from} → {to}"),
        (Some(from), None) => format!(" from {from}"),
        (None, Some(to)) => format!(" until {to}"),
        (None, None) => String::new(),
    };
    println!(
        "{:>6}  {}{}{}",
        game.id.to_string().bold(),
        game.title,
        window,
        archived.dimmed()
    );
}

/// Executes the specified game command.
#[instrument(skip(root, cmd))]
pub async fn execute(root: &CompositionRoot, cmd: &GameCommands) -> Result<(), Error> {
    match cmd {
        GameCommands::List => {
            let usecase = root.resolve(|| GetGames::new(root.game_service()));
            match usecase.handle().await? {
                None => println!("{}", "The server returned no game listing.".yellow()),
                Some(games) if games.is_empty() => println!("No games."),
                Some(games) => {
                    for game in &games {
                        print_game(game);
                    }
                }
            }
            Ok(())
        }
        GameCommands::Show { id } => {
            let usecase = root.resolve(|| GetGameById::new(root.game_service()));
            match usecase.handle(*id).await? {
                Some(game) => print_game(&game),
                None => println!("{}", format!("No game with id {id}.").yellow()),
            }
            Ok(())
        }
        GameCommands::Create(args) => {
            let usecase = root.resolve(|| CreateGame::new(root.game_service()));
            let draft = GameDraft {
                title: args.title.clone(),
                game_url: args.game_url.clone(),
                starts_on: args.starts_on,
                ends_on: args.ends_on,
            };
            if usecase.handle(&draft).await? {
                println!("{}", "Game created.".green());
                Ok(())
            } else {
                Err(Error::Rejected("game create"))
            }
        }
        GameCommands::Update(args) => {
            let usecase = root.resolve(|| UpdateGame::new(root.game_service()));
            let patch = GamePatch {
                id: args.id,
                title: args.title.clone(),
                game_url: args.game_url.clone(),
                starts_on: args.starts_on,
                ends_on: args.ends_on,
            };
            if usecase.handle(&patch).await? {
                println!("{}", "Game updated.".green());
                Ok(())
            } else {
                Err(Error::Rejected("game update"))
            }
        }
        GameCommands::Archive { id } => {
            let usecase = root.resolve(|| ArchiveGame::new(root.game_service()));
            if usecase.handle(*id).await? {
                println!("{}", "Game archived.".green());
                Ok(())
            } else {
                Err(Error::Rejected("game archive"))
            }
        }
    }
}
