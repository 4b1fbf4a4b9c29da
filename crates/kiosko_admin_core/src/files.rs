//! File collaborator.
//!
//! Exports and logo uploads travel as `{name, content}` shapes with
//! base64-encoded content. This module owns the handful of file
//! operations built on that shape: writing a received file to disk,
//! fetching a URL into a base64 string, and size checks against upload
//! limits.

use std::fs;
use std::path::{Path, PathBuf};

use base64::prelude::{Engine as _, BASE64_STANDARD};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::Error;

#[cfg(test)]
#[path = "files_tests.rs"]
mod tests;

/// A named file with base64-encoded content, as the platform ships it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportFile {
    pub name: String,
    /// Base64-encoded file bytes.
    pub content: String,
}

/// File operations over the `{name, content}` shape.
pub struct FileService {
    http: reqwest::Client,
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileService {
    /// Creates the service with its own HTTP transport.
    ///
    /// Downloads fetch arbitrary asset URLs (CDN hosts), not API
    /// endpoints, so this deliberately does not go through the endpoint
    /// table or middleware chain.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Decodes a received file and writes it into `dir`, returning the
    /// written path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the content is not valid base64 and
    /// [`Error::Io`] if the file cannot be written.
    pub fn save(&self, file: &ExportFile, dir: &Path) -> Result<PathBuf, Error> {
        let bytes = BASE64_STANDARD.decode(&file.content)?;
        let path = dir.join(&file.name);
        fs::write(&path, bytes)?;
        debug!(path = %path.display(), "Saved export file");
        Ok(path)
    }

    /// Fetches a URL and returns its body base64-encoded.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn url_to_base64(&self, url: &str) -> Result<String, Error> {
        let response = self.http.get(url).send().await.map_err(Error::Download)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::DownloadStatus(status.as_u16()));
        }
        let bytes = response.bytes().await.map_err(Error::Download)?;
        Ok(BASE64_STANDARD.encode(&bytes))
    }

    /// Returns `true` when the decoded content exceeds `limit` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the content is not valid base64.
    pub fn is_larger_than(&self, content: &str, limit: usize) -> Result<bool, Error> {
        let bytes = BASE64_STANDARD.decode(content)?;
        Ok(bytes.len() > limit)
    }
}
