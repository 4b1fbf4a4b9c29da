//! Request middleware.
//!
//! Middlewares are pure transformations applied to the outgoing request bag
//! before dispatch. They run in the fixed order they were registered with
//! the client and must not perform I/O. The only middleware shipped with
//! the client is [`TokenMiddleware`], which attaches the session token to
//! operations that require one.

use std::sync::Arc;

use url::Url;

use crate::endpoint::Endpoint;

#[cfg(test)]
#[path = "middleware_tests.rs"]
mod tests;

/// Query parameter name under which the session token travels.
pub const TOKEN_PARAM: &str = "token";

/// An outgoing request before dispatch.
///
/// The URL carries the substituted path only; query parameters are kept
/// separate so middlewares can amend them without re-parsing the URL.
#[derive(Debug, Clone)]
pub struct RequestBag {
    /// Fully resolved request URL without the query string.
    pub url: Url,
    /// Query parameters in the order they will be serialized.
    pub query: Vec<(String, String)>,
    /// Optional JSON body.
    pub body: Option<serde_json::Value>,
}

/// A pure request transformation applied before dispatch.
pub trait Middleware: Send + Sync {
    /// Transforms the request bag for the given endpoint.
    fn handle(&self, bag: RequestBag, endpoint: &Endpoint) -> RequestBag;
}

/// Source of the current session token.
///
/// Implemented by the session layer over its token storage. Returning
/// `None` is not an error; the request simply proceeds unauthenticated and
/// the server answers with a 401 if it objects.
pub trait TokenProvider: Send + Sync {
    /// Returns the stored session token, if any.
    fn token(&self) -> Option<String>;
}

/// Attaches the session token to endpoints that require it.
///
/// Endpoints with `requires_token: false` are never touched, regardless of
/// whether a token is stored.
pub struct TokenMiddleware {
    provider: Arc<dyn TokenProvider>,
}

impl TokenMiddleware {
    /// Creates the middleware over a token source.
    pub fn new(provider: Arc<dyn TokenProvider>) -> Self {
        Self { provider }
    }
}

impl Middleware for TokenMiddleware {
    fn handle(&self, mut bag: RequestBag, endpoint: &Endpoint) -> RequestBag {
        if !endpoint.requires_token {
            return bag;
        }
        if let Some(token) = self.provider.token() {
            bag.query.push((TOKEN_PARAM.to_string(), token));
        }
        bag
    }
}
