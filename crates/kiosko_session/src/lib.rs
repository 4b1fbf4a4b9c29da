//! Session handling for the Kiosko admin tooling.
//!
//! This crate owns the authentication collaborator and the key-value
//! storage abstraction that backs it:
//! - [`KeyValueStore`] with a file-backed implementation ([`FileStore`],
//!   the operator-console analogue of browser local storage) and an
//!   in-memory one ([`MemoryStore`]) for tests and ephemeral runs.
//! - [`SessionService`] for login, logout, and password reset against the
//!   platform's session endpoints.
//! - [`StoredTokenProvider`], the bridge that lets the client's token
//!   middleware read the persisted session token.

mod session;
mod storage;

pub use session::{SessionService, StoredTokenProvider, TOKEN_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

/// Result type for session operations.
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Errors that can occur during session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session endpoint call failed.
    #[error("Session request failed: {0}")]
    Api(#[from] kiosko_client::Error),

    /// Token storage could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
