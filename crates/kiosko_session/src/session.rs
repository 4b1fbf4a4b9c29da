//! Operator session management.
//!
//! The session service talks to the platform's unauthenticated session
//! endpoints and keeps the issued token in the key-value store under
//! [`TOKEN_KEY`]. Logout is a local operation: the platform invalidates
//! tokens server-side on expiry, the console merely forgets its copy.

use std::sync::Arc;

use kiosko_client::{endpoints, ApiClient, Params, TokenProvider};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::storage::KeyValueStore;
use crate::SessionResult;

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

/// Storage key under which the session token is persisted.
pub const TOKEN_KEY: &str = "session.token";

#[derive(Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: Option<String>,
}

#[derive(Serialize)]
struct ResetPasswordPayload<'a> {
    email: &'a str,
}

#[derive(Deserialize)]
struct ResetPasswordResponse {
    success: bool,
}

/// Authentication service for the operator console.
pub struct SessionService {
    client: Arc<ApiClient>,
    store: Arc<dyn KeyValueStore>,
}

impl SessionService {
    /// Creates the service over the shared API client and token store.
    pub fn new(client: Arc<ApiClient>, store: Arc<dyn KeyValueStore>) -> Self {
        Self { client, store }
    }

    /// Authenticates the operator and persists the issued token.
    ///
    /// Returns `false` when the server rejects the credentials (a response
    /// without a token); credential rejection is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Api`](crate::SessionError::Api) if the call
    /// fails and [`SessionError::Storage`](crate::SessionError::Storage) if
    /// the token cannot be persisted.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<bool> {
        let response: LoginResponse = self
            .client
            .request(&endpoints::LOGIN)
            .json(&LoginPayload { email, password })?
            .send(Params::new())
            .await?;

        match response.token {
            Some(token) => {
                self.store.set_item(TOKEN_KEY, &token)?;
                info!("Operator session established");
                Ok(true)
            }
            None => {
                warn!("Login rejected by server");
                Ok(false)
            }
        }
    }

    /// Forgets the stored session token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`](crate::SessionError::Storage) if
    /// storage cannot be written.
    #[instrument(skip(self))]
    pub fn logout(&self) -> SessionResult<()> {
        self.store.remove_item(TOKEN_KEY)?;
        info!("Operator session cleared");
        Ok(())
    }

    /// Requests a password reset email for the given address.
    #[instrument(skip(self), fields(email = %email))]
    pub async fn reset_password(&self, email: &str) -> SessionResult<bool> {
        let response: ResetPasswordResponse = self
            .client
            .request(&endpoints::RESET_PASSWORD)
            .json(&ResetPasswordPayload { email })?
            .send(Params::new())
            .await?;
        Ok(response.success)
    }

    /// Returns the stored session token, if any.
    pub fn current_token(&self) -> SessionResult<Option<SecretString>> {
        Ok(self.store.get_item(TOKEN_KEY)?.map(SecretString::from))
    }
}

/// [`TokenProvider`] over the persisted session token.
///
/// A storage failure degrades to "no token": the request proceeds
/// unauthenticated and the server's 401 tells the operator to log in
/// again.
pub struct StoredTokenProvider {
    store: Arc<dyn KeyValueStore>,
}

impl StoredTokenProvider {
    /// Creates the provider over the shared token store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl TokenProvider for StoredTokenProvider {
    fn token(&self) -> Option<String> {
        match self.store.get_item(TOKEN_KEY) {
            Ok(token) => token,
            Err(error) => {
                warn!(%error, "Failed to read session token; proceeding unauthenticated");
                None
            }
        }
    }
}
