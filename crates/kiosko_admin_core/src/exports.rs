//! Statistics and registrants exports.
//!
//! The export endpoints hand back `{name, content}` file shapes; the
//! service fetches them and, on request, writes them to disk through the
//! file collaborator.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::instrument;

use kiosko_client::{endpoints, ApiClient, Params};

use crate::files::{ExportFile, FileService};
use crate::Error;

#[cfg(test)]
#[path = "exports_tests.rs"]
mod tests;

/// Export service over the reporting endpoints and the file collaborator.
pub struct ExportService {
    client: Arc<ApiClient>,
    files: Arc<FileService>,
}

impl ExportService {
    /// Creates the service over the shared API client and file
    /// collaborator.
    pub fn new(client: Arc<ApiClient>, files: Arc<FileService>) -> Self {
        Self { client, files }
    }

    /// Fetches the readership statistics export, optionally bounded to a
    /// date range.
    #[instrument(skip(self))]
    pub async fn statistics(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<ExportFile, Error> {
        let mut params = Params::new();
        if let Some(from) = from {
            params.insert("from", from);
        }
        if let Some(to) = to {
            params.insert("to", to);
        }
        let file: ExportFile = self
            .client
            .request(&endpoints::EXPORT_STATISTICS)
            .send(params)
            .await?;
        Ok(file)
    }

    /// Fetches the registrants export.
    #[instrument(skip(self))]
    pub async fn registrants(&self) -> Result<ExportFile, Error> {
        let file: ExportFile = self
            .client
            .request(&endpoints::EXPORT_REGISTRANTS)
            .send(Params::new())
            .await?;
        Ok(file)
    }

    /// Writes a fetched export into `dir`, returning the written path.
    pub fn save(&self, file: &ExportFile, dir: &Path) -> Result<PathBuf, Error> {
        self.files.save(file, dir)
    }
}
