//! Error types for Kiosko API client operations.
//!
//! The taxonomy is deliberately shallow: a request either could not be
//! built, could not be transported, came back with a non-success status, or
//! could not be decoded. No layer above the client re-classifies or wraps
//! these; they pass through repositories and services unchanged.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while executing an API operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured API base URL could not be parsed.
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// A path template placeholder had no matching parameter.
    ///
    /// Raised before any network I/O takes place; a request with an
    /// unresolved placeholder is never sent.
    #[error("Unresolved path placeholder: {{{0}}}")]
    UnresolvedPlaceholder(String),

    /// The network call itself failed (DNS, connect, TLS, read).
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status code.
    ///
    /// The client does not distinguish 401 from 500; callers that care
    /// inspect the carried status code.
    #[error("Server returned status {0}")]
    Status(u16),

    /// The response body was not valid JSON for the expected shape.
    #[error("Failed to decode response body: {0}")]
    Deserialization(#[from] serde_json::Error),
}
