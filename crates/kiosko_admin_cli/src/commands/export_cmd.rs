//! Export commands: readership statistics and registrants.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;
use colored::Colorize;
use tracing::instrument;

use kiosko_admin_core::usecases::{ExportRegistrants, ExportStatistics};

use crate::composition::CompositionRoot;
use crate::errors::Error;

/// Export subcommands.
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Download the readership statistics export
    Statistics {
        /// First day of the range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day of the range (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Directory to write the file into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Download the registrants export
    Registrants {
        /// Directory to write the file into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

/// Executes the specified export command.
#[instrument(skip(root, cmd))]
pub async fn execute(root: &CompositionRoot, cmd: &ExportCommands) -> Result<(), Error> {
    let exports = root.export_service();
    match cmd {
        ExportCommands::Statistics { from, to, out_dir } => {
            let usecase = root.resolve(|| ExportStatistics::new(root.export_service()));
            let file = usecase.handle(*from, *to).await?;
            let written = exports.save(&file, out_dir)?;
            println!("{}", format!("Wrote {}.", written.display()).green());
            Ok(())
        }
        ExportCommands::Registrants { out_dir } => {
            let usecase = root.resolve(|| ExportRegistrants::new(root.export_service()));
            let file = usecase.handle().await?;
            let written = exports.save(&file, out_dir)?;
            println!("{}", format!("Wrote {}.", written.display()).green());
            Ok(())
        }
    }
}
