//! Errors surfaced by the operator console.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the Kiosko admin console.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error occurred while loading or parsing the
    /// configuration file, such as a missing file or invalid TOML.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An API call failed; carries the client error unchanged.
    #[error(transparent)]
    Api(#[from] kiosko_client::Error),

    /// A domain operation failed; carries the core error unchanged.
    #[error(transparent)]
    Core(#[from] kiosko_admin_core::Error),

    /// A session operation failed.
    #[error(transparent)]
    Session(#[from] kiosko_session::SessionError),

    /// Session storage could not be opened.
    #[error(transparent)]
    Storage(#[from] kiosko_session::StorageError),

    /// The server acknowledged the request but reported failure.
    #[error("The server rejected the {0} operation")]
    Rejected(&'static str),

    /// An output file could not be written.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
