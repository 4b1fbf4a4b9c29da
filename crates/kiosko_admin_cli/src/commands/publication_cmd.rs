//! Publication and article commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use colored::Colorize;
use tracing::instrument;

use kiosko_admin_core::entities::{Publication, PublicationDraft, PublicationPatch};
use kiosko_admin_core::usecases::{
    ArchivePublication, CreatePublication, GetArticleById, GetArticles, GetPublicationById,
    GetPublications, UpdatePublication,
};

use crate::composition::CompositionRoot;
use crate::errors::Error;

/// Publication subcommands.
#[derive(Subcommand, Debug)]
pub enum PublicationCommands {
    /// List all publications
    List,

    /// Show one publication
    Show {
        /// Publication id
        id: u64,
    },

    /// Create a publication
    Create(CreateArgs),

    /// Update a publication
    Update(UpdateArgs),

    /// Archive a publication
    Archive {
        /// Publication id
        id: u64,
    },

    /// List articles, optionally scoped to one publication
    Articles {
        /// Publication id to scope the listing to
        #[arg(long)]
        publication: Option<u64>,
    },

    /// Show one article
    Article {
        /// Article id
        id: u64,
    },
}

/// Arguments for creating a publication.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Publication title
    #[arg(long)]
    pub title: String,

    /// URL slug
    #[arg(long)]
    pub slug: Option<String>,

    /// Publication date (YYYY-MM-DD)
    #[arg(long)]
    pub published_on: Option<NaiveDate>,

    /// Cover image URL
    #[arg(long)]
    pub cover_url: Option<String>,
}

/// Arguments for updating a publication.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Publication id
    pub id: u64,

    /// New publication title
    #[arg(long)]
    pub title: Option<String>,

    /// URL slug
    #[arg(long)]
    pub slug: Option<String>,

    /// Publication date (YYYY-MM-DD)
    #[arg(long)]
    pub published_on: Option<NaiveDate>,

    /// Cover image URL
    #[arg(long)]
    pub cover_url: Option<String>,
}

fn print_publication(publication: &Publication) {
    let archived = if publication.is_archived { " [archived]" } else { "" };
    let date = publication
        .published_on
        .map(|d| format!(" {d}"))
        .unwrap_or_default();
    println!(
        "{:>6}  {}{}{}",
        publication.id.to_string().bold(),
        publication.title,
        date,
        archived.dimmed()
    );
}

/// Executes the specified publication command.
#[instrument(skip(root, cmd))]
pub async fn execute(root: &CompositionRoot, cmd: &PublicationCommands) -> Result<(), Error> {
    match cmd {
        PublicationCommands::List => {
            let usecase = root.resolve(|| GetPublications::new(root.publication_service()));
            match usecase.handle().await? {
                None => println!("{}", "The server returned no publication listing.".yellow()),
                Some(publications) if publications.is_empty() => println!("No publications."),
                Some(publications) => {
                    for publication in &publications {
                        print_publication(publication);
                    }
                }
            }
            Ok(())
        }
        PublicationCommands::Show { id } => {
            let usecase = root.resolve(|| GetPublicationById::new(root.publication_service()));
            match usecase.handle(*id).await? {
                Some(publication) => print_publication(&publication),
                None => println!("{}", format!("No publication with id {id}.").yellow()),
            }
            Ok(())
        }
        PublicationCommands::Create(args) => {
            let usecase = root.resolve(|| CreatePublication::new(root.publication_service()));
            let draft = PublicationDraft {
                title: args.title.clone(),
                slug: args.slug.clone(),
                published_on: args.published_on,
                cover_url: args.cover_url.clone(),
            };
            if usecase.handle(&draft).await? {
                println!("{}", "Publication created.".green());
                Ok(())
            } else {
                Err(Error::Rejected("publication create"))
            }
        }
        PublicationCommands::Update(args) => {
            let usecase = root.resolve(|| UpdatePublication::new(root.publication_service()));
            let patch = PublicationPatch {
                id: args.id,
                title: args.title.clone(),
                slug: args.slug.clone(),
                published_on: args.published_on,
                cover_url: args.cover_url.clone(),
            };
            if usecase.handle(&patch).await? {
                println!("{}", "Publication updated.".green());
                Ok(())
            } else {
                Err(Error::Rejected("publication update"))
            }
        }
        PublicationCommands::Archive { id } => {
            let usecase = root.resolve(|| ArchivePublication::new(root.publication_service()));
            if usecase.handle(*id).await? {
                println!("{}", "Publication archived.".green());
                Ok(())
            } else {
                Err(Error::Rejected("publication archive"))
            }
        }
        PublicationCommands::Articles { publication } => {
            let usecase = root.resolve(|| GetArticles::new(root.publication_service()));
            match usecase.handle(*publication).await? {
                None => println!("{}", "The server returned no article listing.".yellow()),
                Some(articles) if articles.is_empty() => println!("No articles."),
                Some(articles) => {
                    for article in &articles {
                        let section = article.section.as_deref().unwrap_or("-");
                        println!(
                            "{:>6}  [pub {}] {}  ({section})",
                            article.id.to_string().bold(),
                            article.publication_id,
                            article.title
                        );
                    }
                }
            }
            Ok(())
        }
        PublicationCommands::Article { id } => {
            let usecase = root.resolve(|| GetArticleById::new(root.publication_service()));
            match usecase.handle(*id).await? {
                Some(article) => {
                    let page = article
                        .page
                        .map(|p| format!(", page {p}"))
                        .unwrap_or_default();
                    println!(
                        "{:>6}  [pub {}] {}{}",
                        article.id.to_string().bold(),
                        article.publication_id,
                        article.title,
                        page
                    );
                }
                None => println!("{}", format!("No article with id {id}.").yellow()),
            }
            Ok(())
        }
    }
}
