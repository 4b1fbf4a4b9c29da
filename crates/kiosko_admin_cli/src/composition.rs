//! Composition root.
//!
//! Builds the shared collaborators once — storage, token middleware, API
//! client, session — and hands out memoized services through the explicit
//! [`Registry`]. Commands resolve their use-cases against this root; no
//! ambient globals exist anywhere in the application.

use std::sync::Arc;

use kiosko_admin_core::adverts::{AdvertRepository, AdvertService};
use kiosko_admin_core::campaigns::{CampaignRepository, CampaignService};
use kiosko_admin_core::editor::{EditorRepository, EditorService};
use kiosko_admin_core::exports::ExportService;
use kiosko_admin_core::files::FileService;
use kiosko_admin_core::games::{GameRepository, GameService};
use kiosko_admin_core::highlights::{HighlightRepository, HighlightService};
use kiosko_admin_core::publications::{ArticleRepository, PublicationRepository, PublicationService};
use kiosko_admin_core::supplements::{
    SupplementCategoryRepository, SupplementDocumentRepository, SupplementService,
};
use kiosko_admin_core::Registry;
use kiosko_client::{ApiClient, TokenMiddleware};
use kiosko_session::{FileStore, KeyValueStore, SessionService, StoredTokenProvider};

use crate::config::AppConfig;
use crate::errors::Error;

/// Owns the registry and the process-wide collaborators.
pub struct CompositionRoot {
    registry: Registry,
    client: Arc<ApiClient>,
    session: Arc<SessionService>,
    files: Arc<FileService>,
}

impl CompositionRoot {
    /// Wires storage, middleware, client, and session from configuration.
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.storage_path)?);
        let client = Arc::new(
            ApiClient::new(&config.api_base_url)?.with_middleware(TokenMiddleware::new(
                Arc::new(StoredTokenProvider::new(Arc::clone(&store))),
            )),
        );
        let session = Arc::new(SessionService::new(Arc::clone(&client), store));
        Ok(Self {
            registry: Registry::new(),
            client,
            session,
            files: Arc::new(FileService::new()),
        })
    }

    /// Resolves a memoized instance through the registry.
    pub fn resolve<T, F>(&self, factory: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        self.registry.resolve(factory)
    }

    /// The session service.
    pub fn session(&self) -> Arc<SessionService> {
        Arc::clone(&self.session)
    }

    /// The file collaborator.
    pub fn files(&self) -> Arc<FileService> {
        Arc::clone(&self.files)
    }

    /// Campaign service singleton.
    pub fn campaign_service(&self) -> Arc<CampaignService> {
        let client = Arc::clone(&self.client);
        self.resolve(|| CampaignService::new(Arc::new(CampaignRepository::new(client))))
    }

    /// Advert service singleton.
    pub fn advert_service(&self) -> Arc<AdvertService> {
        let client = Arc::clone(&self.client);
        self.resolve(|| AdvertService::new(Arc::new(AdvertRepository::new(client))))
    }

    /// Highlight service singleton.
    pub fn highlight_service(&self) -> Arc<HighlightService> {
        let client = Arc::clone(&self.client);
        self.resolve(|| HighlightService::new(Arc::new(HighlightRepository::new(client))))
    }

    /// Game service singleton.
    pub fn game_service(&self) -> Arc<GameService> {
        let client = Arc::clone(&self.client);
        self.resolve(|| GameService::new(Arc::new(GameRepository::new(client))))
    }

    /// Publication service singleton.
    pub fn publication_service(&self) -> Arc<PublicationService> {
        let client = Arc::clone(&self.client);
        self.resolve(|| {
            PublicationService::new(
                Arc::new(PublicationRepository::new(Arc::clone(&client))),
                Arc::new(ArticleRepository::new(client)),
            )
        })
    }

    /// Supplement service singleton.
    pub fn supplement_service(&self) -> Arc<SupplementService> {
        let client = Arc::clone(&self.client);
        self.resolve(|| {
            SupplementService::new(
                Arc::new(SupplementCategoryRepository::new(Arc::clone(&client))),
                Arc::new(SupplementDocumentRepository::new(client)),
            )
        })
    }

    /// Editor service singleton.
    pub fn editor_service(&self) -> Arc<EditorService> {
        let client = Arc::clone(&self.client);
        let files = Arc::clone(&self.files);
        self.resolve(|| EditorService::new(Arc::new(EditorRepository::new(client)), files))
    }

    /// Export service singleton.
    pub fn export_service(&self) -> Arc<ExportService> {
        let client = Arc::clone(&self.client);
        let files = Arc::clone(&self.files);
        self.resolve(|| ExportService::new(client, files))
    }
}
