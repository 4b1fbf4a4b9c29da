//! Advert management commands.
//!
//! An advert links to an external URL, to an article, or to nothing; the
//! listing shows the derived classification.

use clap::{Args, Subcommand};
use colored::Colorize;
use tracing::instrument;

use kiosko_admin_core::entities::{Advert, AdvertDraft, AdvertPatch};
use kiosko_admin_core::usecases::{
    ArchiveAdvert, CreateAdvert, GetAdvertById, GetAdverts, UpdateAdvert,
};

use crate::composition::CompositionRoot;
use crate::errors::Error;

/// Advert subcommands.
#[derive(Subcommand, Debug)]
pub enum AdvertCommands {
    /// List all adverts
    List,

    /// Show one advert
    Show {
        /// Advert id
        id: u64,
    },

    /// Create an advert
    Create(CreateArgs),

    /// Update an advert
    Update(UpdateArgs),

    /// Archive an advert
    Archive {
        /// Advert id
        id: u64,
    },
}

/// Arguments for creating an advert.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Advert title
    #[arg(long)]
    pub title: String,

    /// Banner image URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// External link target
    #[arg(long, conflicts_with = "article_id")]
    pub link_url: Option<String>,

    /// Linked article id
    #[arg(long)]
    pub article_id: Option<u64>,
}

/// Arguments for updating an advert.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Advert id
    pub id: u64,

    /// New advert title
    #[arg(long)]
    pub title: Option<String>,

    /// Banner image URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// External link target
    #[arg(long, conflicts_with = "article_id")]
    pub link_url: Option<String>,

    /// Linked article id
    #[arg(long)]
    pub article_id: Option<u64>,
}

fn print_advert(advert: &Advert) {
    let archived = if advert.is_archived { " [archived]" } else { "" };
    println!(
        "{:>6}  {}  ({}){}",
        advert.id.to_string().bold(),
        advert.title,
        advert.link_type,
        archived.dimmed()
    );
}

/// Executes the specified advert command.
#[instrument(skip(root, cmd))]
pub async fn execute(root: &CompositionRoot, cmd: &AdvertCommands) -> Result<(), Error> {
    match cmd {
        AdvertCommands::List => {
            let usecase = root.resolve(|| GetAdverts::new(root.advert_service()));
            match usecase.handle().await? {
                None => println!("{}", "The server returned no advert listing.".yellow()),
                Some(adverts) if adverts.is_empty() => println!("No adverts."),
                Some(adverts) => {
                    for advert in &adverts {
                        print_advert(advert);
                    }
                }
            }
            Ok(())
        }
        AdvertCommands::Show { id } => {
            let usecase = root.resolve(|| GetAdvertById::new(root.advert_service()));
            match usecase.handle(*id).await? {
                Some(advert) => print_advert(&advert),
                None => println!("{}", format!("No advert with id {id}.").yellow()),
            }
            Ok(())
        }
        AdvertCommands::Create(args) => {
            let usecase = root.resolve(|| CreateAdvert::new(root.advert_service()));
            let draft = AdvertDraft {
                title: args.title.clone(),
                image_url: args.image_url.clone(),
                link_url: args.link_url.clone(),
                article_id: args.article_id,
            };
            if usecase.handle(&draft).await? {
                println!("{}", "Advert created.".green());
                Ok(())
            } else {
                Err(Error::Rejected("advert create"))
            }
        }
        AdvertCommands::Update(args) => {
            let usecase = root.resolve(|| UpdateAdvert::new(root.advert_service()));
            let patch = AdvertPatch {
                id: args.id,
                title: args.title.clone(),
                image_url: args.image_url.clone(),
                link_url: args.link_url.clone(),
                article_id: args.article_id,
            };
            if usecase.handle(&patch).await? {
                println!("{}", "Advert updated.".green());
                Ok(())
            } else {
                Err(Error::Rejected("advert update"))
            }
        }
        AdvertCommands::Archive { id } => {
            let usecase = root.resolve(|| ArchiveAdvert::new(root.advert_service()));
            if usecase.handle(*id).await? {
                println!("{}", "Advert archived.".green());
                Ok(())
            } else {
                Err(Error::Rejected("advert archive"))
            }
        }
    }
}
