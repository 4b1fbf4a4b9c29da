//! Newsstand customization access.
//!
//! The editor area is not a CRUD catalogue: settings are a singleton
//! record, and pods/sidebars are fixed sets whose members are only ever
//! updated (reordered, retitled, toggled). The repository therefore
//! exposes purpose-named operations instead of the generic contract.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use kiosko_client::{endpoints, ApiClient, Error as ApiError, Params};

use crate::entities::{EditorColors, EditorSettings, Pod, PodPatch, Sidebar, SidebarPatch};
use crate::files::FileService;
use crate::repository::Ack;
use crate::Error;

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;

#[derive(Deserialize)]
struct SettingsBody {
    settings: Option<EditorSettings>,
}

#[derive(Deserialize)]
struct PodListBody {
    pods: Option<Vec<Pod>>,
}

#[derive(Deserialize)]
struct SidebarListBody {
    sidebars: Option<Vec<Sidebar>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LogoPayload<'a> {
    name: &'a str,
    /// Base64-encoded image bytes.
    content: &'a str,
}

/// Gateway for the editor customization endpoints.
pub struct EditorRepository {
    client: Arc<ApiClient>,
}

impl EditorRepository {
    /// Creates the repository over the shared API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetches the newsstand settings record.
    pub async fn settings(&self) -> Result<Option<EditorSettings>, ApiError> {
        let body: SettingsBody = self
            .client
            .request(&endpoints::EDITOR_SETTINGS)
            .send(Params::new())
            .await?;
        Ok(body.settings)
    }

    /// Replaces the newsstand color set.
    pub async fn update_colors(&self, colors: &EditorColors) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::EDITOR_SETTINGS_UPDATE)
            .json(colors)?
            .send(Params::new())
            .await?;
        Ok(ack.success)
    }

    /// Uploads a new logo as a named base64 payload.
    pub async fn update_logo(&self, name: &str, content: &str) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::EDITOR_LOGO_UPDATE)
            .json(&LogoPayload { name, content })?
            .send(Params::new())
            .await?;
        Ok(ack.success)
    }

    /// Lists the front-page pods.
    pub async fn pods(&self) -> Result<Option<Vec<Pod>>, ApiError> {
        let body: PodListBody = self
            .client
            .request(&endpoints::POD_LIST)
            .send(Params::new())
            .await?;
        Ok(body.pods)
    }

    /// Updates one pod.
    pub async fn update_pod(&self, patch: &PodPatch) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::POD_UPDATE)
            .json(patch)?
            .send(Params::new().with("id", patch.id))
            .await?;
        Ok(ack.success)
    }

    /// Lists the sidebar blocks.
    pub async fn sidebars(&self) -> Result<Option<Vec<Sidebar>>, ApiError> {
        let body: SidebarListBody = self
            .client
            .request(&endpoints::SIDEBAR_LIST)
            .send(Params::new())
            .await?;
        Ok(body.sidebars)
    }

    /// Updates one sidebar block.
    pub async fn update_sidebar(&self, patch: &SidebarPatch) -> Result<bool, ApiError> {
        let ack: Ack = self
            .client
            .request(&endpoints::SIDEBAR_UPDATE)
            .json(patch)?
            .send(Params::new().with("id", patch.id))
            .await?;
        Ok(ack.success)
    }
}

/// Customization domain service. Composes the editor repository with the
/// file collaborator so a logo can be taken from any asset URL.
pub struct EditorService {
    repository: Arc<EditorRepository>,
    files: Arc<FileService>,
}

impl EditorService {
    /// Creates the service over its repository and the file collaborator.
    pub fn new(repository: Arc<EditorRepository>, files: Arc<FileService>) -> Self {
        Self { repository, files }
    }

    /// Fetches the newsstand settings record.
    #[instrument(skip(self))]
    pub async fn settings(&self) -> Result<Option<EditorSettings>, Error> {
        Ok(self.repository.settings().await?)
    }

    /// Replaces the newsstand color set.
    pub async fn update_colors(&self, colors: &EditorColors) -> Result<bool, Error> {
        Ok(self.repository.update_colors(colors).await?)
    }

    /// Uploads a logo already encoded as base64.
    pub async fn update_logo(&self, name: &str, content: &str) -> Result<bool, Error> {
        Ok(self.repository.update_logo(name, content).await?)
    }

    /// Fetches an image URL and uploads it as the newsstand logo.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn update_logo_from_url(&self, name: &str, url: &str) -> Result<bool, Error> {
        let content = self.files.url_to_base64(url).await?;
        Ok(self.repository.update_logo(name, &content).await?)
    }

    /// Lists the front-page pods.
    pub async fn pods(&self) -> Result<Option<Vec<Pod>>, Error> {
        Ok(self.repository.pods().await?)
    }

    /// Updates one pod.
    pub async fn update_pod(&self, patch: &PodPatch) -> Result<bool, Error> {
        Ok(self.repository.update_pod(patch).await?)
    }

    /// Lists the sidebar blocks.
    pub async fn sidebars(&self) -> Result<Option<Vec<Sidebar>>, Error> {
        Ok(self.repository.sidebars().await?)
    }

    /// Updates one sidebar block.
    pub async fn update_sidebar(&self, patch: &SidebarPatch) -> Result<bool, Error> {
        Ok(self.repository.update_sidebar(patch).await?)
    }
}
