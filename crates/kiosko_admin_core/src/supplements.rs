//! Supplement category and document access.
//!
//! The supplement endpoints are the ones that acknowledge mutations with a
//! status label alongside the success flag; the label is logged and the
//! flag is what callers get.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use kiosko_client::{endpoints, ApiClient, Error as ApiError, Params};

use crate::entities::{
    SupplementCategory, SupplementCategoryDraft, SupplementCategoryPatch, SupplementDocument,
    SupplementDocumentDraft, SupplementDocumentPatch,
};
use crate::repository::{CrudRepository, StatusAck};
use crate::Error;

#[cfg(test)]
#[path = "supplements_tests.rs"]
mod tests;

#[derive(Deserialize)]
struct CategoryListBody {
    categories: Option<Vec<SupplementCategory>>,
}

#[derive(Deserialize)]
struct CategoryDetailBody {
    category: Option<SupplementCategory>,
}

#[derive(Deserialize)]
struct DocumentListBody {
    documents: Option<Vec<SupplementDocument>>,
}

#[derive(Deserialize)]
struct DocumentDetailBody {
    document: Option<SupplementDocument>,
}

fn ack_outcome(operation: &str, ack: StatusAck) -> bool {
    debug!(operation, status = ?ack.status, success = ack.success, "Supplement mutation acknowledged");
    ack.success
}

/// CRUD gateway for supplement categories.
pub struct SupplementCategoryRepository {
    client: Arc<ApiClient>,
}

impl SupplementCategoryRepository {
    /// Creates the repository over the shared API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CrudRepository for SupplementCategoryRepository {
    type Entity = SupplementCategory;
    type Draft = SupplementCategoryDraft;
    type Patch = SupplementCategoryPatch;

    async fn get_all(&self) -> Result<Option<Vec<SupplementCategory>>, ApiError> {
        let body: CategoryListBody = self
            .client
            .request(&endpoints::SUPPLEMENT_CATEGORY_LIST)
            .send(Params::new())
            .await?;
        Ok(body.categories)
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<SupplementCategory>, ApiError> {
        let body: CategoryDetailBody = self
            .client
            .request(&endpoints::SUPPLEMENT_CATEGORY_DETAIL)
            .send(Params::new().with("id", id))
            .await?;
        Ok(body.category)
    }

    async fn create(&self, draft: &SupplementCategoryDraft) -> Result<bool, ApiError> {
        let ack: StatusAck = self
            .client
            .request(&endpoints::SUPPLEMENT_CATEGORY_CREATE)
            .json(draft)?
            .send(Params::new())
            .await?;
        Ok(ack_outcome("category.create", ack))
    }

    async fn update(&self, patch: &SupplementCategoryPatch) -> Result<bool, ApiError> {
        let ack: StatusAck = self
            .client
            .request(&endpoints::SUPPLEMENT_CATEGORY_UPDATE)
            .json(patch)?
            .send(Params::new().with("id", patch.id))
            .await?;
        Ok(ack_outcome("category.update", ack))
    }

    async fn remove(&self, id: u64) -> Result<bool, ApiError> {
        let ack: StatusAck = self
            .client
            .request(&endpoints::SUPPLEMENT_CATEGORY_ARCHIVE)
            .send(Params::new().with("id", id))
            .await?;
        Ok(ack_outcome("category.archive", ack))
    }
}

/// CRUD gateway for supplement documents.
pub struct SupplementDocumentRepository {
    client: Arc<ApiClient>,
}

impl SupplementDocumentRepository {
    /// Creates the repository over the shared API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Lists the documents of one category.
    pub async fn in_category(
        &self,
        category_id: u64,
    ) -> Result<Option<Vec<SupplementDocument>>, ApiError> {
        let body: DocumentListBody = self
            .client
            .request(&endpoints::SUPPLEMENT_DOCUMENT_LIST)
            .send(Params::new().with("categoryId", category_id))
            .await?;
        Ok(body.documents)
    }
}

#[async_trait]
impl CrudRepository for SupplementDocumentRepository {
    type Entity = SupplementDocument;
    type Draft = SupplementDocumentDraft;
    type Patch = SupplementDocumentPatch;

    async fn get_all(&self) -> Result<Option<Vec<SupplementDocument>>, ApiError> {
        let body: DocumentListBody = self
            .client
            .request(&endpoints::SUPPLEMENT_DOCUMENT_LIST_ALL)
            .send(Params::new())
            .await?;
        Ok(body.documents)
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<SupplementDocument>, ApiError> {
        let body: DocumentDetailBody = self
            .client
            .request(&endpoints::SUPPLEMENT_DOCUMENT_DETAIL)
            .send(Params::new().with("id", id))
            .await?;
        Ok(body.document)
    }

    async fn create(&self, draft: &SupplementDocumentDraft) -> Result<bool, ApiError> {
        let ack: StatusAck = self
            .client
            .request(&endpoints::SUPPLEMENT_DOCUMENT_CREATE)
            .json(draft)?
            .send(Params::new())
            .await?;
        Ok(ack_outcome("document.create", ack))
    }

    async fn update(&self, patch: &SupplementDocumentPatch) -> Result<bool, ApiError> {
        let ack: StatusAck = self
            .client
            .request(&endpoints::SUPPLEMENT_DOCUMENT_UPDATE)
            .json(patch)?
            .send(Params::new().with("id", patch.id))
            .await?;
        Ok(ack_outcome("document.update", ack))
    }

    async fn remove(&self, id: u64) -> Result<bool, ApiError> {
        let ack: StatusAck = self
            .client
            .request(&endpoints::SUPPLEMENT_DOCUMENT_ARCHIVE)
            .send(Params::new().with("id", id))
            .await?;
        Ok(ack_outcome("document.archive", ack))
    }
}

/// Supplement domain service composing the category and document
/// repositories.
pub struct SupplementService {
    categories: Arc<SupplementCategoryRepository>,
    documents: Arc<SupplementDocumentRepository>,
}

impl SupplementService {
    /// Creates the service over both repositories.
    pub fn new(
        categories: Arc<SupplementCategoryRepository>,
        documents: Arc<SupplementDocumentRepository>,
    ) -> Self {
        Self {
            categories,
            documents,
        }
    }

    /// Lists all supplement categories.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Option<Vec<SupplementCategory>>, Error> {
        Ok(self.categories.get_all().await?)
    }

    /// Fetches one category.
    pub async fn category(&self, id: u64) -> Result<Option<SupplementCategory>, Error> {
        Ok(self.categories.get_by_id(id).await?)
    }

    /// Creates a category.
    pub async fn create_category(&self, draft: &SupplementCategoryDraft) -> Result<bool, Error> {
        Ok(self.categories.create(draft).await?)
    }

    /// Updates a category.
    pub async fn update_category(&self, patch: &SupplementCategoryPatch) -> Result<bool, Error> {
        Ok(self.categories.update(patch).await?)
    }

    /// Archives a category.
    pub async fn archive_category(&self, id: u64) -> Result<bool, Error> {
        Ok(self.categories.remove(id).await?)
    }

    /// Lists every document, across categories.
    pub async fn documents(&self) -> Result<Option<Vec<SupplementDocument>>, Error> {
        Ok(self.documents.get_all().await?)
    }

    /// Lists the documents of one category.
    pub async fn documents_in_category(
        &self,
        category_id: u64,
    ) -> Result<Option<Vec<SupplementDocument>>, Error> {
        Ok(self.documents.in_category(category_id).await?)
    }

    /// Fetches one document.
    pub async fn document(&self, id: u64) -> Result<Option<SupplementDocument>, Error> {
        Ok(self.documents.get_by_id(id).await?)
    }

    /// Creates a document.
    pub async fn create_document(&self, draft: &SupplementDocumentDraft) -> Result<bool, Error> {
        Ok(self.documents.create(draft).await?)
    }

    /// Updates a document.
    pub async fn update_document(&self, patch: &SupplementDocumentPatch) -> Result<bool, Error> {
        Ok(self.documents.update(patch).await?)
    }

    /// Archives a document.
    pub async fn archive_document(&self, id: u64) -> Result<bool, Error> {
        Ok(self.documents.remove(id).await?)
    }
}
