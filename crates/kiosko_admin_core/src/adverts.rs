//! Advert catalogue access.
//!
//! Adverts carry mutually exclusive link fields on the wire; the service
//! derives the [`LinkType`](crate::entities::LinkType) classification on
//! every record it hands out, so frontends never inspect the raw fields.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use kiosko_client::{endpoints, ApiClient, Error as ApiError, Params};

use crate::entities::{Advert, AdvertDraft, AdvertPatch};
use crate::repository::{Ack, CrudRepository};
use crate::Error;

#[cfg(test)]
#[path = "adverts_tests.rs"]
mod tests;

#[derive(Deserialize)]
struct AdvertListBody {
    adverts: Option<Vec<Advert>>,
}

#[derive(Deserialize)]
struct AdvertDetailBody {
    advert: Option<Advert>,
}

/// CRUD gateway for adverts.
pub struct AdvertRepository {
    client: Arc<ApiClient>,
}

impl AdvertRepository {
    /// Creates the repository over the shared API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CrudRepository for AdvertRepository {
    type Entity = Advert;
    type Draft = AdvertDraft;
    type Patch = AdvertPatch;

    async fn get_all(&self) -> Result<Option<Vec<Advert>>, ApiError> {
        let body: AdvertListBody = self
            .client
            .request(&endpoints::ADVERT_LIST)
            .send(Params::new())
            .await?;
        Ok(body.adverts)
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<Advert>, ApiError> {
        let body: AdvertDetailBody = self
            .client
            .request(&endpoints::ADVERT_DETAIL)
            .send(Params::new().with("id", id))
            .await?;
        Ok(body.advert)
    }

    async fn create(&self, draft: &AdvertDraft) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::ADVERT_CREATE)
            .json(draft)?
            .send(Params::new())
            .await?;
        Ok(ack.success)
    }

    async fn update(&self, patch: &AdvertPatch) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::ADVERT_UPDATE)
            .json(patch)?
            .send(Params::new().with("id", patch.id))
            .await?;
        Ok(ack.success)
    }

    async fn remove(&self, id: u64) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::ADVERT_ARCHIVE)
            .send(Params::new().with("id", id))
            .await?;
        Ok(ack.success)
    }
}

/// Advert domain service; classifies links on every read.
pub struct AdvertService {
    repository: Arc<AdvertRepository>,
}

impl AdvertService {
    /// Creates the service over its repository.
    pub fn new(repository: Arc<AdvertRepository>) -> Self {
        Self { repository }
    }

    /// Lists all adverts with their link classification populated.
    #[instrument(skip(self))]
    pub async fn adverts(&self) -> Result<Option<Vec<Advert>>, Error> {
        let listing = self.repository.get_all().await?;
        Ok(listing.map(|mut adverts| {
            for advert in &mut adverts {
                advert.classify_link();
            }
            adverts
        }))
    }

    /// Fetches one advert with its link classification populated.
    pub async fn advert(&self, id: u64) -> Result<Option<Advert>, Error> {
        let advert = self.repository.get_by_id(id).await?;
        Ok(advert.map(|mut advert| {
            advert.classify_link();
            advert
        }))
    }

    /// Creates an advert.
    pub async fn create(&self, draft: &AdvertDraft) -> Result<bool, Error> {
        Ok(self.repository.create(draft).await?)
    }

    /// Updates an advert.
    pub async fn update(&self, patch: &AdvertPatch) -> Result<bool, Error> {
        Ok(self.repository.update(patch).await?)
    }

    /// Archives an advert.
    pub async fn archive(&self, id: u64) -> Result<bool, Error> {
        Ok(self.repository.remove(id).await?)
    }
}
