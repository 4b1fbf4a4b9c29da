//! Newsstand customization commands.

use clap::Subcommand;
use colored::Colorize;
use tracing::instrument;

use kiosko_admin_core::entities::{EditorColors, PodPatch, SidebarPatch};
use kiosko_admin_core::usecases::{
    GetEditorSettings, GetPods, GetSidebars, UpdateEditorColors, UpdateEditorLogoFromUrl,
    UpdatePod, UpdateSidebar,
};

use crate::composition::CompositionRoot;
use crate::errors::Error;

/// Customization subcommands.
#[derive(Subcommand, Debug)]
pub enum EditorCommands {
    /// Show the newsstand settings
    Show,

    /// Replace the newsstand colors
    SetColors {
        /// Primary color, e.g. "#aa2222"
        #[arg(long)]
        primary: String,
        /// Secondary color
        #[arg(long)]
        secondary: String,
        /// Background color
        #[arg(long)]
        background: String,
    },

    /// Upload a logo from an image URL
    SetLogo {
        /// File name to store the logo under
        #[arg(long, default_value = "logo.png")]
        name: String,
        /// Image URL to fetch
        #[arg(long)]
        url: String,
    },

    /// List the front-page pods
    Pods,

    /// Update a pod
    UpdatePod {
        /// Pod id
        id: u64,
        /// New pod title
        #[arg(long)]
        title: Option<String>,
        /// Position on the front page
        #[arg(long)]
        position: Option<u32>,
        /// Enable or disable the pod
        #[arg(long)]
        enabled: Option<bool>,
    },

    /// List the sidebar blocks
    Sidebars,

    /// Update a sidebar block
    UpdateSidebar {
        /// Sidebar id
        id: u64,
        /// New sidebar title
        #[arg(long)]
        title: Option<String>,
        /// Position in the sidebar column
        #[arg(long)]
        position: Option<u32>,
        /// Enable or disable the block
        #[arg(long)]
        enabled: Option<bool>,
    },
}

/// Executes the specified customization command.
#[instrument(skip(root, cmd))]
pub async fn execute(root: &CompositionRoot, cmd: &EditorCommands) -> Result<(), Error> {
    match cmd {
        EditorCommands::Show => {
            let usecase = root.resolve(|| GetEditorSettings::new(root.editor_service()));
            match usecase.handle().await? {
                Some(settings) => {
                    println!("primary:    {}", settings.primary_color);
                    println!("secondary:  {}", settings.secondary_color);
                    println!("background: {}", settings.background_color);
                    println!(
                        "logo:       {}",
                        settings.logo_url.as_deref().unwrap_or("-")
                    );
                }
                None => println!("{}", "The server returned no settings.".yellow()),
            }
            Ok(())
        }
        EditorCommands::SetColors {
            primary,
            secondary,
            background,
        } => {
            let usecase = root.resolve(|| UpdateEditorColors::new(root.editor_service()));
            let colors = EditorColors {
                primary_color: primary.clone(),
                secondary_color: secondary.clone(),
                background_color: background.clone(),
            };
            if usecase.handle(&colors).await? {
                println!("{}", "Colors updated.".green());
                Ok(())
            } else {
                Err(Error::Rejected("color update"))
            }
        }
        EditorCommands::SetLogo { name, url } => {
            let usecase = root.resolve(|| UpdateEditorLogoFromUrl::new(root.editor_service()));
            if usecase.handle(name, url).await? {
                println!("{}", "Logo updated.".green());
                Ok(())
            } else {
                Err(Error::Rejected("logo update"))
            }
        }
        EditorCommands::Pods => {
            let usecase = root.resolve(|| GetPods::new(root.editor_service()));
            match usecase.handle().await? {
                None => println!("{}", "The server returned no pod listing.".yellow()),
                Some(pods) if pods.is_empty() => println!("No pods."),
                Some(pods) => {
                    for pod in &pods {
                        let state = if pod.is_enabled { "on" } else { "off" };
                        println!(
                            "{:>6}  #{} {} [{}] ({state})",
                            pod.id.to_string().bold(),
                            pod.position,
                            pod.title,
                            pod.kind
                        );
                    }
                }
            }
            Ok(())
        }
        EditorCommands::UpdatePod {
            id,
            title,
            position,
            enabled,
        } => {
            let usecase = root.resolve(|| UpdatePod::new(root.editor_service()));
            let patch = PodPatch {
                id: *id,
                title: title.clone(),
                position: *position,
                is_enabled: *enabled,
            };
            if usecase.handle(&patch).await? {
                println!("{}", "Pod updated.".green());
                Ok(())
            } else {
                Err(Error::Rejected("pod update"))
            }
        }
        EditorCommands::Sidebars => {
            let usecase = root.resolve(|| GetSidebars::new(root.editor_service()));
            match usecase.handle().await? {
                None => println!("{}", "The server returned no sidebar listing.".yellow()),
                Some(sidebars) if sidebars.is_empty() => println!("No sidebars."),
                Some(sidebars) => {
                    for sidebar in &sidebars {
                        let state = if sidebar.is_enabled { "on" } else { "off" };
                        println!(
                            "{:>6}  #{} {} ({state})",
                            sidebar.id.to_string().bold(),
                            sidebar.position,
                            sidebar.title
                        );
                    }
                }
            }
            Ok(())
        }
        EditorCommands::UpdateSidebar {
            id,
            title,
            position,
            enabled,
        } => {
            let usecase = root.resolve(|| UpdateSidebar::new(root.editor_service()));
            let patch = SidebarPatch {
                id: *id,
                title: title.clone(),
                position: *position,
                is_enabled: *enabled,
            };
            if usecase.handle(&patch).await? {
                println!("{}", "Sidebar updated.".green());
                Ok(())
            } else {
                Err(Error::Rejected("sidebar update"))
            }
        }
    }
}
