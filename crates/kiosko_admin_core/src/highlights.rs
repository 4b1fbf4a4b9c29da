//! Highlight catalogue access.
//!
//! Highlights follow the same link model as adverts.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use kiosko_client::{endpoints, ApiClient, Error as ApiError, Params};

use crate::entities::{Highlight, HighlightDraft, HighlightPatch};
use crate::repository::{Ack, CrudRepository};
use crate::Error;

#[cfg(test)]
#[path = "highlights_tests.rs"]
mod tests;

#[derive(Deserialize)]
struct HighlightListBody {
    highlights: Option<Vec<Highlight>>,
}

#[derive(Deserialize)]
struct HighlightDetailBody {
    highlight: Option<Highlight>,
}

/// CRUD gateway for highlights.
pub struct HighlightRepository {
    client: Arc<ApiClient>,
}

impl HighlightRepository {
    /// Creates the repository over the shared API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CrudRepository for HighlightRepository {
    type Entity = Highlight;
    type Draft = HighlightDraft;
    type Patch = HighlightPatch;

    async fn get_all(&self) -> Result<Option<Vec<Highlight>>, ApiError> {
        let body: HighlightListBody = self
            .client
            .request(&endpoints::HIGHLIGHT_LIST)
            .send(Params::new())
            .await?;
        Ok(body.highlights)
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<Highlight>, ApiError> {
        let body: HighlightDetailBody = self
            .client
            .request(&endpoints::HIGHLIGHT_DETAIL)
            .send(Params::new().with("id", id))
            .await?;
        Ok(body.highlight)
    }

    async fn create(&self, draft: &HighlightDraft) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::HIGHLIGHT_CREATE)
            .json(draft)?
            .send(Params::new())
            .await?;
        Ok(ack.success)
    }

    async fn update(&self, patch: &HighlightPatch) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::HIGHLIGHT_UPDATE)
            .json(patch)?
            .send(Params::new().with("id", patch.id))
            .await?;
        Ok(ack.success)
    }

    async fn remove(&self, id: u64) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::HIGHLIGHT_ARCHIVE)
            .send(Params::new().with("id", id))
            .await?;
        Ok(ack.success)
    }
}

/// Highlight domain service; classifies links on every read.
pub struct HighlightService {
    repository: Arc<HighlightRepository>,
}

impl HighlightService {
    /// Creates the service over its repository.
    pub fn new(repository: Arc<HighlightRepository>) -> Self {
        Self { repository }
    }

    /// Lists all highlights with their link classification populated.
    #[instrument(skip(self))]
    pub async fn highlights(&self) -> Result<Option<Vec<Highlight>>, Error> {
        let listing = self.repository.get_all().await?;
        Ok(listing.map(|mut highlights| {
            for highlight in &mut highlights {
                highlight.classify_link();
            }
            highlights
        }))
    }

    /// Fetches one highlight with its link classification populated.
    pub async fn highlight(&self, id: u64) -> Result<Option<Highlight>, Error> {
        let highlight = self.repository.get_by_id(id).await?;
        Ok(highlight.map(|mut highlight| {
            highlight.classify_link();
            highlight
        }))
    }

    /// Creates a highlight.
    pub async fn create(&self, draft: &HighlightDraft) -> Result<bool, Error> {
        Ok(self.repository.create(draft).await?)
    }

    /// Updates a highlight.
    pub async fn update(&self, patch: &HighlightPatch) -> Result<bool, Error> {
        Ok(self.repository.update(patch).await?)
    }

    /// Archives a highlight.
    pub async fn archive(&self, id: u64) -> Result<bool, Error> {
        Ok(self.repository.remove(id).await?)
    }
}
