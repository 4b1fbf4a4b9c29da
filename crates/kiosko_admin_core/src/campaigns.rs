//! Campaign catalogue access.
//!
//! Campaign creation is the one mutation on the platform whose endpoint
//! reports the new record's id instead of a bare success flag; the
//! repository exposes it as [`CampaignRepository::create_returning_id`]
//! beside the generic contract.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use kiosko_client::{endpoints, ApiClient, Error as ApiError, Params};

use crate::entities::{Campaign, CampaignDraft, CampaignPatch};
use crate::repository::{Ack, CrudRepository};
use crate::Error;

#[cfg(test)]
#[path = "campaigns_tests.rs"]
mod tests;

#[derive(Deserialize)]
struct CampaignListBody {
    campaigns: Option<Vec<Campaign>>,
}

#[derive(Deserialize)]
struct CampaignDetailBody {
    campaign: Option<Campaign>,
}

#[derive(Deserialize)]
struct CampaignCreatedBody {
    id: u64,
}

/// CRUD gateway for campaigns.
pub struct CampaignRepository {
    client: Arc<ApiClient>,
}

impl CampaignRepository {
    /// Creates the repository over the shared API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Creates a campaign and returns the server-assigned id.
    pub async fn create_returning_id(&self, draft: &CampaignDraft) -> Result<u64, ApiError> {
        let created: CampaignCreatedBody = self
            .client
            .request(&endpoints::CAMPAIGN_CREATE)
            .json(draft)?
            .send(Params::new())
            .await?;
        Ok(created.id)
    }
}

#[async_trait]
impl CrudRepository for CampaignRepository {
    type Entity = Campaign;
    type Draft = CampaignDraft;
    type Patch = CampaignPatch;

    async fn get_all(&self) -> Result<Option<Vec<Campaign>>, ApiError> {
        let body: CampaignListBody = self
            .client
            .request(&endpoints::CAMPAIGN_LIST)
            .send(Params::new())
            .await?;
        Ok(body.campaigns)
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<Campaign>, ApiError> {
        let body: CampaignDetailBody = self
            .client
            .request(&endpoints::CAMPAIGN_DETAIL)
            .send(Params::new().with("id", id))
            .await?;
        Ok(body.campaign)
    }

    async fn create(&self, draft: &CampaignDraft) -> Result<bool, ApiError> {
        self.create_returning_id(draft).await.map(|id| id != 0)
    }

    async fn update(&self, patch: &CampaignPatch) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::CAMPAIGN_UPDATE)
            .json(patch)?
            .send(Params::new().with("id", patch.id))
            .await?;
        Ok(ack.success)
    }

    async fn remove(&self, id: u64) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::CAMPAIGN_ARCHIVE)
            .send(Params::new().with("id", id))
            .await?;
        Ok(ack.success)
    }
}

/// Campaign domain service: a thin pass-through over the repository.
pub struct CampaignService {
    repository: Arc<CampaignRepository>,
}

impl CampaignService {
    /// Creates the service over its repository.
    pub fn new(repository: Arc<CampaignRepository>) -> Self {
        Self { repository }
    }

    /// Lists all campaigns.
    #[instrument(skip(self))]
    pub async fn campaigns(&self) -> Result<Option<Vec<Campaign>>, Error> {
        Ok(self.repository.get_all().await?)
    }

    /// Fetches one campaign.
    pub async fn campaign(&self, id: u64) -> Result<Option<Campaign>, Error> {
        Ok(self.repository.get_by_id(id).await?)
    }

    /// Creates a campaign, returning the server-assigned id.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: &CampaignDraft) -> Result<u64, Error> {
        Ok(self.repository.create_returning_id(draft).await?)
    }

    /// Updates a campaign.
    pub async fn update(&self, patch: &CampaignPatch) -> Result<bool, Error> {
        Ok(self.repository.update(patch).await?)
    }

    /// Archives a campaign.
    pub async fn archive(&self, id: u64) -> Result<bool, Error> {
        Ok(self.repository.remove(id).await?)
    }
}
