//! Highlight management commands.

use clap::{Args, Subcommand};
use colored::Colorize;
use tracing::instrument;

use kiosko_admin_core::entities::{Highlight, HighlightDraft, HighlightPatch};
use kiosko_admin_core::usecases::{
    ArchiveHighlight, CreateHighlight, GetHighlightById, GetHighlights, UpdateHighlight,
};

use crate::composition::CompositionRoot;
use crate::errors::Error;

/// Highlight subcommands.
#[derive(Subcommand, Debug)]
pub enum HighlightCommands {
    /// List all highlights
    List,

    /// Show one highlight
    Show {
        /// Highlight id
        id: u64,
    },

    /// Create a highlight
    Create(CreateArgs),

    /// Update a highlight
    Update(UpdateArgs),

    /// Archive a highlight
    Archive {
        /// Highlight id
        id: u64,
    },
}

/// Arguments for creating a highlight.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Highlight title
    #[arg(long)]
    pub title: String,

    /// Cover image URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// External link target
    #[arg(long, conflicts_with = "article_id")]
    pub link_url: Option<String>,

    /// Linked article id
    #[arg(long)]
    pub article_id: Option<u64>,

    /// Position on the newsstand front
    #[arg(long)]
    pub position: Option<u32>,
}

/// Arguments for updating a highlight.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Highlight id
    pub id: u64,

    /// New highlight title
    #[arg(long)]
    pub title: Option<String>,

    /// Cover image URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// External link target
    #[arg(long, conflicts_with = "article_id")]
    pub link_url: Option<String>,

    /// Linked article id
    #[arg(long)]
    pub article_id: Option<u64>,

    /// Position on the newsstand front
    #[arg(long)]
    pub position: Option<u32>,
}

fn print_highlight(highlight: &Highlight) {
    let archived = if highlight.is_archived { " [archived]" } else { "" };
    println!(
        "{:>6}  #{} {}  ({}){}",
        highlight.id.to_string().bold(),
        highlight.position,
        highlight.title,
        highlight.link_type,
        archived.dimmed()
    );
}

/// Executes the specified highlight command.
#[instrument(skip(root, cmd))]
pub async fn execute(root: &CompositionRoot, cmd: &HighlightCommands) -> Result<(), Error> {
    match cmd {
        HighlightCommands::List => {
            let usecase = root.resolve(|| GetHighlights::new(root.highlight_service()));
            match usecase.handle().await? {
                None => println!("{}", "The server returned no highlight listing.".yellow()),
                Some(highlights) if highlights.is_empty() => println!("No highlights."),
                Some(highlights) => {
                    for highlight in &highlights {
                        print_highlight(highlight);
                    }
                }
            }
            Ok(())
        }
        HighlightCommands::Show { id } => {
            let usecase = root.resolve(|| GetHighlightById::new(root.highlight_service()));
            match usecase.handle(*id).await? {
                Some(highlight) => print_highlight(&highlight),
                None => println!("{}", format!("No highlight with id {id}.").yellow()),
            }
            Ok(())
        }
        HighlightCommands::Create(args) => {
            let usecase = root.resolve(|| CreateHighlight::new(root.highlight_service()));
            let draft = HighlightDraft {
                title: args.title.clone(),
                image_url: args.image_url.clone(),
                link_url: args.link_url.clone(),
                article_id: args.article_id,
                position: args.position,
            };
            if usecase.handle(&draft).await? {
                println!("{}", "Highlight created.".green());
                Ok(())
            } else {
                Err(Error::Rejected("highlight create"))
            }
        }
        HighlightCommands::Update(args) => {
            let usecase = root.resolve(|| UpdateHighlight::new(root.highlight_service()));
            let patch = HighlightPatch {
                id: args.id,
                title: args.title.clone(),
                image_url: args.image_url.clone(),
                link_url: args.link_url.clone(),
                article_id: args.article_id,
                position: args.position,
            };
            if usecase.handle(&patch).await? {
                println!("{}", "Highlight updated.".green());
                Ok(())
            } else {
                Err(Error::Rejected("highlight update"))
            }
        }
        HighlightCommands::Archive { id } => {
            let usecase = root.resolve(|| ArchiveHighlight::new(root.highlight_service()));
            if usecase.handle(*id).await? {
                println!("{}", "Highlight archived.".green());
                Ok(())
            } else {
                Err(Error::Rejected("highlight archive"))
            }
        }
    }
}
