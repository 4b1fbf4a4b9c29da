//! Error type for the domain layer.
//!
//! Services and use-cases do not add context of their own: API failures
//! lift straight out of the client crate, and the few file-handling
//! operations contribute the variants below.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors surfaced by services and use-cases.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An API call failed; carries the client error unchanged.
    #[error(transparent)]
    Api(#[from] kiosko_client::Error),

    /// A file could not be written to or read from disk.
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// An export's content field was not valid base64.
    #[error("File content is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// A file download failed at the transport level.
    #[error("File download failed: {0}")]
    Download(#[source] reqwest::Error),

    /// A file download came back with a non-success status.
    #[error("File download returned status {0}")]
    DownloadStatus(u16),
}
