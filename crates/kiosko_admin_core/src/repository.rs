//! Generic CRUD repository contract.
//!
//! Each entity gets one repository implementing the five standard
//! operations over the shared API client. Listing results are tagged
//! three ways and never conflated: `Ok(Some(vec))` when the server sent a
//! listing field (possibly empty), `Ok(None)` when the field was absent,
//! `Err` on transport or decode failure.

use async_trait::async_trait;
use serde::Deserialize;

use kiosko_client::Error;

/// The five standard CRUD operations, one implementation per entity type.
#[async_trait]
pub trait CrudRepository: Send + Sync {
    /// Domain shape returned by reads.
    type Entity;
    /// Values accepted by `create`.
    type Draft: Sync;
    /// Values accepted by `update`; partial sets leave absent fields
    /// untouched (last write wins, no concurrency token).
    type Patch: Sync;

    /// Fetches the full listing.
    ///
    /// `Ok(None)` means the server response carried no listing field;
    /// `Ok(Some(vec![]))` is a present-but-empty listing.
    async fn get_all(&self) -> Result<Option<Vec<Self::Entity>>, Error>;

    /// Fetches one record; `Ok(None)` when the detail field is absent.
    async fn get_by_id(&self, id: u64) -> Result<Option<Self::Entity>, Error>;

    /// Creates a record; the boolean is the server-reported outcome.
    async fn create(&self, draft: &Self::Draft) -> Result<bool, Error>;

    /// Updates a record with a full or partial value set.
    async fn update(&self, patch: &Self::Patch) -> Result<bool, Error>;

    /// Archives a record (the platform soft-deletes; nothing is physically
    /// removed).
    async fn remove(&self, id: u64) -> Result<bool, Error>;
}

/// Wire acknowledgement for mutations: `{"success": bool}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Ack {
    pub success: bool,
}

/// Wire acknowledgement used by the supplement endpoints, which also
/// report a server status label alongside the success flag.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusAck {
    #[serde(default)]
    pub status: Option<String>,
    pub success: bool,
}
