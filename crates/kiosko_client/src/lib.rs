//! Crate for talking to the Kiosko admin API.
//!
//! This crate provides the request pipeline shared by every operation the
//! admin tooling performs: a static endpoint table, a fixed middleware
//! chain, and a thin HTTP client that substitutes parameters into path
//! templates, attaches the session token where required, and decodes JSON
//! responses.
//!
//! Every call is try-once: there are no retries, no backoff, and no
//! client-side timeout policy beyond what the transport provides.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

pub mod endpoint;
pub mod errors;
pub mod middleware;
pub mod params;

pub use endpoint::{endpoints, Endpoint};
pub use errors::Error;
pub use middleware::{Middleware, RequestBag, TokenMiddleware, TokenProvider, TOKEN_PARAM};
pub use params::{IntoParam, Params};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// A client for executing named operations against the Kiosko admin API.
///
/// The client owns the base URL, the underlying HTTP transport, and the
/// middleware chain. It is cheap to share behind an `Arc`; every repository
/// in the application dispatches through a single instance.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    middleware: Vec<Box<dyn Middleware>>,
}

impl ApiClient {
    /// Creates a client for the given API base URL.
    ///
    /// A trailing slash on the base URL is ignored; endpoint paths always
    /// start with one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] if the URL does not parse.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: trimmed.to_string(),
            middleware: Vec::new(),
        })
    }

    /// Appends a middleware to the chain, builder-style.
    ///
    /// Middlewares run in registration order on every outgoing request.
    pub fn with_middleware(mut self, middleware: impl Middleware + 'static) -> Self {
        self.middleware.push(Box::new(middleware));
        self
    }

    /// Starts a request for the given endpoint.
    pub fn request(&self, endpoint: &'static Endpoint) -> PreparedRequest<'_> {
        PreparedRequest {
            client: self,
            endpoint,
            body: None,
        }
    }

    /// Builds the request bag: substitutes path placeholders, turns the
    /// remaining parameters into query pairs, and runs the middleware
    /// chain.
    fn build(
        &self,
        endpoint: &Endpoint,
        mut params: Params,
        body: Option<serde_json::Value>,
    ) -> Result<RequestBag, Error> {
        let path = resolve_path(endpoint.path, &mut params)?;
        let url = Url::parse(&format!("{}{}", self.base_url, path))?;
        let query = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut bag = RequestBag { url, query, body };
        for middleware in &self.middleware {
            bag = middleware.handle(bag, endpoint);
        }
        Ok(bag)
    }

    #[instrument(skip(self, params, body), fields(method = %endpoint.method, path = endpoint.path))]
    async fn dispatch<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        params: Params,
        body: Option<serde_json::Value>,
    ) -> Result<T, Error> {
        let bag = self.build(endpoint, params, body)?;
        debug!(url = %bag.url, "Dispatching API request");

        let mut request = self.http.request(endpoint.method.clone(), bag.url);
        if !bag.query.is_empty() {
            request = request.query(&bag.query);
        }
        if let Some(body) = &bag.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(Error::Transport)?;
        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "API request rejected");
            return Err(Error::Status(status.as_u16()));
        }

        let text = response.text().await.map_err(Error::Transport)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// A request bound to an endpoint, awaiting parameters and dispatch.
pub struct PreparedRequest<'a> {
    client: &'a ApiClient,
    endpoint: &'static Endpoint,
    body: Option<serde_json::Value>,
}

impl PreparedRequest<'_> {
    /// Attaches a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialization`] if the value cannot be
    /// serialized.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Substitutes `params`, runs the middleware chain, performs the call,
    /// and decodes the JSON response as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedPlaceholder`] before any network I/O if
    /// a path placeholder has no matching parameter, [`Error::Transport`]
    /// on network failure, [`Error::Status`] on a non-2xx response, and
    /// [`Error::Deserialization`] if the body does not match `T`.
    pub async fn send<T: DeserializeOwned>(self, params: Params) -> Result<T, Error> {
        self.client.dispatch(self.endpoint, params, self.body).await
    }
}

/// Substitutes `{name}` placeholders in a path template from `params`,
/// consuming the values it uses.
fn resolve_path(template: &str, params: &mut Params) -> Result<String, Error> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find('}')
            .ok_or_else(|| Error::UnresolvedPlaceholder(after.to_string()))?;
        let name = &after[..end];
        let value = params
            .take(name)
            .ok_or_else(|| Error::UnresolvedPlaceholder(name.to_string()))?;
        out.push_str(&value);
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}
