//! Supplement category and document commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use colored::Colorize;
use tracing::instrument;

use kiosko_admin_core::entities::{
    SupplementCategoryDraft, SupplementCategoryPatch, SupplementDocument, SupplementDocumentDraft,
    SupplementDocumentPatch,
};
use kiosko_admin_core::usecases::{
    ArchiveSupplementCategory, ArchiveSupplementDocument, CreateSupplementCategory,
    CreateSupplementDocument, GetCategoryDocuments, GetSupplementCategories,
    GetSupplementDocumentById, GetSupplementDocuments, UpdateSupplementCategory,
    UpdateSupplementDocument,
};

use crate::composition::CompositionRoot;
use crate::errors::Error;

/// Supplement subcommands.
#[derive(Subcommand, Debug)]
pub enum SupplementCommands {
    /// List supplement categories
    Categories,

    /// Create a supplement category
    CreateCategory {
        /// Category name
        #[arg(long)]
        name: String,
        /// Position in the category listing
        #[arg(long)]
        position: Option<u32>,
    },

    /// Update a supplement category
    UpdateCategory {
        /// Category id
        id: u64,
        /// New category name
        #[arg(long)]
        name: Option<String>,
        /// Position in the category listing
        #[arg(long)]
        position: Option<u32>,
    },

    /// Archive a supplement category
    ArchiveCategory {
        /// Category id
        id: u64,
    },

    /// List documents, all of them or those of one category
    Documents {
        /// Category id to scope the listing to
        #[arg(long)]
        category: Option<u64>,
    },

    /// Show one document
    Document {
        /// Document id
        id: u64,
    },

    /// Create a document
    CreateDocument(CreateDocumentArgs),

    /// Update a document
    UpdateDocument(UpdateDocumentArgs),

    /// Archive a document
    ArchiveDocument {
        /// Document id
        id: u64,
    },
}

/// Arguments for creating a supplement document.
#[derive(Args, Debug)]
pub struct CreateDocumentArgs {
    /// Category the document belongs to
    #[arg(long)]
    pub category: u64,

    /// Document title
    #[arg(long)]
    pub title: String,

    /// URL of the document file
    #[arg(long)]
    pub file_url: Option<String>,

    /// Publication date (YYYY-MM-DD)
    #[arg(long)]
    pub published_on: Option<NaiveDate>,
}

/// Arguments for updating a supplement document.
#[derive(Args, Debug)]
pub struct UpdateDocumentArgs {
    /// Document id
    pub id: u64,

    /// Move the document to another category
    #[arg(long)]
    pub category: Option<u64>,

    /// New document title
    #[arg(long)]
    pub title: Option<String>,

    /// URL of the document file
    #[arg(long)]
    pub file_url: Option<String>,

    /// Publication date (YYYY-MM-DD)
    #[arg(long)]
    pub published_on: Option<NaiveDate>,
}

fn print_documents(documents: &[SupplementDocument]) {
    for document in documents {
        let date = document
            .published_on
            .map(|d| format!(" {d}"))
            .unwrap_or_default();
        println!(
            "{:>6}  [cat {}] {}{}",
            document.id.to_string().bold(),
            document.category_id,
            document.title,
            date
        );
    }
}

/// Executes the specified supplement command.
#[instrument(skip(root, cmd))]
pub async fn execute(root: &CompositionRoot, cmd: &SupplementCommands) -> Result<(), Error> {
    match cmd {
        SupplementCommands::Categories => {
            let usecase =
                root.resolve(|| GetSupplementCategories::new(root.supplement_service()));
            match usecase.handle().await? {
                None => println!("{}", "The server returned no category listing.".yellow()),
                Some(categories) if categories.is_empty() => println!("No categories."),
                Some(categories) => {
                    for category in &categories {
                        println!(
                            "{:>6}  #{} {}",
                            category.id.to_string().bold(),
                            category.position,
                            category.name
                        );
                    }
                }
            }
            Ok(())
        }
        SupplementCommands::CreateCategory { name, position } => {
            let usecase =
                root.resolve(|| CreateSupplementCategory::new(root.supplement_service()));
            let draft = SupplementCategoryDraft {
                name: name.clone(),
                position: *position,
            };
            if usecase.handle(&draft).await? {
                println!("{}", "Category created.".green());
                Ok(())
            } else {
                Err(Error::Rejected("category create"))
            }
        }
        SupplementCommands::UpdateCategory { id, name, position } => {
            let usecase =
                root.resolve(|| UpdateSupplementCategory::new(root.supplement_service()));
            let patch = SupplementCategoryPatch {
                id: *id,
                name: name.clone(),
                position: *position,
            };
            if usecase.handle(&patch).await? {
                println!("{}", "Category updated.".green());
                Ok(())
            } else {
                Err(Error::Rejected("category update"))
            }
        }
        SupplementCommands::ArchiveCategory { id } => {
            let usecase =
                root.resolve(|| ArchiveSupplementCategory::new(root.supplement_service()));
            if usecase.handle(*id).await? {
                println!("{}", "Category archived.".green());
                Ok(())
            } else {
                Err(Error::Rejected("category archive"))
            }
        }
        SupplementCommands::Documents { category } => {
            let listing = match category {
                Some(category_id) => {
                    let usecase =
                        root.resolve(|| GetCategoryDocuments::new(root.supplement_service()));
                    usecase.handle(*category_id).await?
                }
                None => {
                    let usecase =
                        root.resolve(|| GetSupplementDocuments::new(root.supplement_service()));
                    usecase.handle().await?
                }
            };
            match listing {
                None => println!("{}", "The server returned no document listing.".yellow()),
                Some(documents) if documents.is_empty() => println!("No documents."),
                Some(documents) => print_documents(&documents),
            }
            Ok(())
        }
        SupplementCommands::Document { id } => {
            let usecase =
                root.resolve(|| GetSupplementDocumentById::new(root.supplement_service()));
            match usecase.handle(*id).await? {
                Some(document) => print_documents(std::slice::from_ref(&document)),
                None => println!("{}", format!("No document with id {id}.").yellow()),
            }
            Ok(())
        }
        SupplementCommands::CreateDocument(args) => {
            let usecase =
                root.resolve(|| CreateSupplementDocument::new(root.supplement_service()));
            let draft = SupplementDocumentDraft {
                category_id: args.category,
                title: args.title.clone(),
                file_url: args.file_url.clone(),
                published_on: args.published_on,
            };
            if usecase.handle(&draft).await? {
                println!("{}", "Document created.".green());
                Ok(())
            } else {
                Err(Error::Rejected("document create"))
            }
        }
        SupplementCommands::UpdateDocument(args) => {
            let usecase =
                root.resolve(|| UpdateSupplementDocument::new(root.supplement_service()));
            let patch = SupplementDocumentPatch {
                id: args.id,
                category_id: args.category,
                title: args.title.clone(),
                file_url: args.file_url.clone(),
                published_on: args.published_on,
            };
            if usecase.handle(&patch).await? {
                println!("{}", "Document updated.".green());
                Ok(())
            } else {
                Err(Error::Rejected("document update"))
            }
        }
        SupplementCommands::ArchiveDocument { id } => {
            let usecase =
                root.resolve(|| ArchiveSupplementDocument::new(root.supplement_service()));
            if usecase.handle(*id).await? {
                println!("{}", "Document archived.".green());
                Ok(())
            } else {
                Err(Error::Rejected("document archive"))
            }
        }
    }
}
