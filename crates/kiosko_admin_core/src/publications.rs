//! Publication and article access.
//!
//! Publications are managed through the full CRUD contract. Articles are
//! read-only from the console — the editorial pipeline produces them — and
//! exist here so adverts and highlights can be linked to one.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use kiosko_client::{endpoints, ApiClient, Error as ApiError, Params};

use crate::entities::{Article, Publication, PublicationDraft, PublicationPatch};
use crate::repository::{Ack, CrudRepository};
use crate::Error;

#[cfg(test)]
#[path = "publications_tests.rs"]
mod tests;

#[derive(Deserialize)]
struct PublicationListBody {
    publications: Option<Vec<Publication>>,
}

#[derive(Deserialize)]
struct PublicationDetailBody {
    publication: Option<Publication>,
}

#[derive(Deserialize)]
struct ArticleListBody {
    articles: Option<Vec<Article>>,
}

#[derive(Deserialize)]
struct ArticleDetailBody {
    article: Option<Article>,
}

/// CRUD gateway for publications.
pub struct PublicationRepository {
    client: Arc<ApiClient>,
}

impl PublicationRepository {
    /// Creates the repository over the shared API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CrudRepository for PublicationRepository {
    type Entity = Publication;
    type Draft = PublicationDraft;
    type Patch = PublicationPatch;

    async fn get_all(&self) -> Result<Option<Vec<Publication>>, ApiError> {
        let body: PublicationListBody = self
            .client
            .request(&endpoints::PUBLICATION_LIST)
            .send(Params::new())
            .await?;
        Ok(body.publications)
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<Publication>, ApiError> {
        let body: PublicationDetailBody = self
            .client
            .request(&endpoints::PUBLICATION_DETAIL)
            .send(Params::new().with("id", id))
            .await?;
        Ok(body.publication)
    }

    async fn create(&self, draft: &PublicationDraft) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::PUBLICATION_CREATE)
            .json(draft)?
            .send(Params::new())
            .await?;
        Ok(ack.success)
    }

    async fn update(&self, patch: &PublicationPatch) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::PUBLICATION_UPDATE)
            .json(patch)?
            .send(Params::new().with("id", patch.id))
            .await?;
        Ok(ack.success)
    }

    async fn remove(&self, id: u64) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::PUBLICATION_ARCHIVE)
            .send(Params::new().with("id", id))
            .await?;
        Ok(ack.success)
    }
}

/// Read-only gateway for articles.
pub struct ArticleRepository {
    client: Arc<ApiClient>,
}

impl ArticleRepository {
    /// Creates the repository over the shared API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Lists articles, optionally scoped to one publication.
    pub async fn get_all(
        &self,
        publication_id: Option<u64>,
    ) -> Result<Option<Vec<Article>>, ApiError> {
        let mut params = Params::new();
        if let Some(publication_id) = publication_id {
            params.insert("publicationId", publication_id);
        }
        let body: ArticleListBody = self
            .client
            .request(&endpoints::ARTICLE_LIST)
            .send(params)
            .await?;
        Ok(body.articles)
    }

    /// Fetches one article.
    pub async fn get_by_id(&self, id: u64) -> Result<Option<Article>, ApiError> {
        let body: ArticleDetailBody = self
            .client
            .request(&endpoints::ARTICLE_DETAIL)
            .send(Params::new().with("id", id))
            .await?;
        Ok(body.article)
    }
}

/// Publication domain service composing the publication and article
/// repositories.
pub struct PublicationService {
    publications: Arc<PublicationRepository>,
    articles: Arc<ArticleRepository>,
}

impl PublicationService {
    /// Creates the service over both repositories.
    pub fn new(publications: Arc<PublicationRepository>, articles: Arc<ArticleRepository>) -> Self {
        Self {
            publications,
            articles,
        }
    }

    /// Lists all publications.
    #[instrument(skip(self))]
    pub async fn publications(&self) -> Result<Option<Vec<Publication>>, Error> {
        Ok(self.publications.get_all().await?)
    }

    /// Fetches one publication.
    pub async fn publication(&self, id: u64) -> Result<Option<Publication>, Error> {
        Ok(self.publications.get_by_id(id).await?)
    }

    /// Creates a publication.
    pub async fn create(&self, draft: &PublicationDraft) -> Result<bool, Error> {
        Ok(self.publications.create(draft).await?)
    }

    /// Updates a publication.
    pub async fn update(&self, patch: &PublicationPatch) -> Result<bool, Error> {
        Ok(self.publications.update(patch).await?)
    }

    /// Archives a publication.
    pub async fn archive(&self, id: u64) -> Result<bool, Error> {
        Ok(self.publications.remove(id).await?)
    }

    /// Lists articles, optionally scoped to one publication.
    pub async fn articles(
        &self,
        publication_id: Option<u64>,
    ) -> Result<Option<Vec<Article>>, Error> {
        Ok(self.articles.get_all(publication_id).await?)
    }

    /// Fetches one article.
    pub async fn article(&self, id: u64) -> Result<Option<Article>, Error> {
        Ok(self.articles.get_by_id(id).await?)
    }
}
