//! Use-cases: one object per operator action.
//!
//! Each use-case exposes a single `handle` operation that delegates to
//! exactly one service call. Nothing is caught, wrapped, or reshaped at
//! this layer; frontends get service results unchanged. The indirection
//! exists so frontends depend on actions, not on service surfaces.

use std::sync::Arc;

use chrono::NaiveDate;

use kiosko_session::{SessionResult, SessionService};

use crate::adverts::AdvertService;
use crate::campaigns::CampaignService;
use crate::editor::EditorService;
use crate::entities::{
    Advert, AdvertDraft, AdvertPatch, Article, Campaign, CampaignDraft, CampaignPatch,
    EditorColors, EditorSettings, Game, GameDraft, GamePatch, Highlight, HighlightDraft,
    HighlightPatch, Pod, PodPatch, Publication, PublicationDraft, PublicationPatch, Sidebar,
    SidebarPatch, SupplementCategory, SupplementCategoryDraft, SupplementCategoryPatch,
    SupplementDocument, SupplementDocumentDraft, SupplementDocumentPatch,
};
use crate::exports::ExportService;
use crate::files::ExportFile;
use crate::games::GameService;
use crate::highlights::HighlightService;
use crate::publications::PublicationService;
use crate::supplements::SupplementService;
use crate::Error;

#[cfg(test)]
#[path = "usecases_tests.rs"]
mod tests;

// Session

/// Signs the operator in and persists the session token.
pub struct LogIn {
    service: Arc<SessionService>,
}

impl LogIn {
    pub fn new(service: Arc<SessionService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, email: &str, password: &str) -> SessionResult<bool> {
        self.service.login(email, password).await
    }
}

/// Clears the operator session.
pub struct LogOut {
    service: Arc<SessionService>,
}

impl LogOut {
    pub fn new(service: Arc<SessionService>) -> Self {
        Self { service }
    }

    pub fn handle(&self) -> SessionResult<()> {
        self.service.logout()
    }
}

/// Requests a password reset email.
pub struct RequestPasswordReset {
    service: Arc<SessionService>,
}

impl RequestPasswordReset {
    pub fn new(service: Arc<SessionService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, email: &str) -> SessionResult<bool> {
        self.service.reset_password(email).await
    }
}

// Campaigns

/// Lists all campaigns.
pub struct GetCampaigns {
    service: Arc<CampaignService>,
}

impl GetCampaigns {
    pub fn new(service: Arc<CampaignService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self) -> Result<Option<Vec<Campaign>>, Error> {
        self.service.campaigns().await
    }
}

/// Fetches one campaign.
pub struct GetCampaignById {
    service: Arc<CampaignService>,
}

impl GetCampaignById {
    pub fn new(service: Arc<CampaignService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, id: u64) -> Result<Option<Campaign>, Error> {
        self.service.campaign(id).await
    }
}

/// Creates a campaign; yields the server-assigned id.
pub struct CreateCampaign {
    service: Arc<CampaignService>,
}

impl CreateCampaign {
    pub fn new(service: Arc<CampaignService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, draft: &CampaignDraft) -> Result<u64, Error> {
        self.service.create(draft).await
    }
}

/// Updates a campaign.
pub struct UpdateCampaign {
    service: Arc<CampaignService>,
}

impl UpdateCampaign {
    pub fn new(service: Arc<CampaignService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, patch: &CampaignPatch) -> Result<bool, Error> {
        self.service.update(patch).await
    }
}

/// Archives a campaign.
pub struct ArchiveCampaign {
    service: Arc<CampaignService>,
}

impl ArchiveCampaign {
    pub fn new(service: Arc<CampaignService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, id: u64) -> Result<bool, Error> {
        self.service.archive(id).await
    }
}

// Adverts

/// Lists all adverts with link classification.
pub struct GetAdverts {
    service: Arc<AdvertService>,
}

impl GetAdverts {
    pub fn new(service: Arc<AdvertService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self) -> Result<Option<Vec<Advert>>, Error> {
        self.service.adverts().await
    }
}

/// Fetches one advert with link classification.
pub struct GetAdvertById {
    service: Arc<AdvertService>,
}

impl GetAdvertById {
    pub fn new(service: Arc<AdvertService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, id: u64) -> Result<Option<Advert>, Error> {
        self.service.advert(id).await
    }
}

/// Creates an advert.
pub struct CreateAdvert {
    service: Arc<AdvertService>,
}

impl CreateAdvert {
    pub fn new(service: Arc<AdvertService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, draft: &AdvertDraft) -> Result<bool, Error> {
        self.service.create(draft).await
    }
}

/// Updates an advert.
pub struct UpdateAdvert {
    service: Arc<AdvertService>,
}

impl UpdateAdvert {
    pub fn new(service: Arc<AdvertService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, patch: &AdvertPatch) -> Result<bool, Error> {
        self.service.update(patch).await
    }
}

/// Archives an advert.
pub struct ArchiveAdvert {
    service: Arc<AdvertService>,
}

impl ArchiveAdvert {
    pub fn new(service: Arc<AdvertService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, id: u64) -> Result<bool, Error> {
        self.service.archive(id).await
    }
}

// Highlights

/// Lists all highlights with link classification.
pub struct GetHighlights {
    service: Arc<HighlightService>,
}

impl GetHighlights {
    pub fn new(service: Arc<HighlightService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self) -> Result<Option<Vec<Highlight>>, Error> {
        self.service.highlights().await
    }
}

/// Fetches one highlight with link classification.
pub struct GetHighlightById {
    service: Arc<HighlightService>,
}

impl GetHighlightById {
    pub fn new(service: Arc<HighlightService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, id: u64) -> Result<Option<Highlight>, Error> {
        self.service.highlight(id).await
    }
}

/// Creates a highlight.
pub struct CreateHighlight {
    service: Arc<HighlightService>,
}

impl CreateHighlight {
    pub fn new(service: Arc<HighlightService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, draft: &HighlightDraft) -> Result<bool, Error> {
        self.service.create(draft).await
    }
}

/// Updates a highlight.
pub struct UpdateHighlight {
    service: Arc<HighlightService>,
}

impl UpdateHighlight {
    pub fn new(service: Arc<HighlightService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, patch: &HighlightPatch) -> Result<bool, Error> {
        self.service.update(patch).await
    }
}

/// Archives a highlight.
pub struct ArchiveHighlight {
    service: Arc<HighlightService>,
}

impl ArchiveHighlight {
    pub fn new(service: Arc<HighlightService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, id: u64) -> Result<bool, Error> {
        self.service.archive(id).await
    }
}

// Games

/// Lists all games.
pub struct GetGames {
    service: Arc<GameService>,
}

impl GetGames {
    pub fn new(service: Arc<GameService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self) -> Result<Option<Vec<Game>>, Error> {
        self.service.games().await
    }
}

/// Fetches one game.
pub struct GetGameById {
    service: Arc<GameService>,
}

impl GetGameById {
    pub fn new(service: Arc<GameService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, id: u64) -> Result<Option<Game>, Error> {
        self.service.game(id).await
    }
}

/// Creates a game.
pub struct CreateGame {
    service: Arc<GameService>,
}

impl CreateGame {
    pub fn new(service: Arc<GameService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, draft: &GameDraft) -> Result<bool, Error> {
        self.service.create(draft).await
    }
}

/// Updates a game.
pub struct UpdateGame {
    service: Arc<GameService>,
}

impl UpdateGame {
    pub fn new(service: Arc<GameService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, patch: &GamePatch) -> Result<bool, Error> {
        self.service.update(patch).await
    }
}

/// Archives a game.
pub struct ArchiveGame {
    service: Arc<GameService>,
}

impl ArchiveGame {
    pub fn new(service: Arc<GameService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, id: u64) -> Result<bool, Error> {
        self.service.archive(id).await
    }
}

// Publications and articles

/// Lists all publications.
pub struct GetPublications {
    service: Arc<PublicationService>,
}

impl GetPublications {
    pub fn new(service: Arc<PublicationService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self) -> Result<Option<Vec<Publication>>, Error> {
        self.service.publications().await
    }
}

/// Fetches one publication.
pub struct GetPublicationById {
    service: Arc<PublicationService>,
}

impl GetPublicationById {
    pub fn new(service: Arc<PublicationService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, id: u64) -> Result<Option<Publication>, Error> {
        self.service.publication(id).await
    }
}

/// Creates a publication.
pub struct CreatePublication {
    service: Arc<PublicationService>,
}

impl CreatePublication {
    pub fn new(service: Arc<PublicationService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, draft: &PublicationDraft) -> Result<bool, Error> {
        self.service.create(draft).await
    }
}

/// Updates a publication.
pub struct UpdatePublication {
    service: Arc<PublicationService>,
}

impl UpdatePublication {
    pub fn new(service: Arc<PublicationService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, patch: &PublicationPatch) -> Result<bool, Error> {
        self.service.update(patch).await
    }
}

/// Archives a publication.
pub struct ArchivePublication {
    service: Arc<PublicationService>,
}

impl ArchivePublication {
    pub fn new(service: Arc<PublicationService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, id: u64) -> Result<bool, Error> {
        self.service.archive(id).await
    }
}

/// Lists articles, optionally scoped to one publication.
pub struct GetArticles {
    service: Arc<PublicationService>,
}

impl GetArticles {
    pub fn new(service: Arc<PublicationService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, publication_id: Option<u64>) -> Result<Option<Vec<Article>>, Error> {
        self.service.articles(publication_id).await
    }
}

/// Fetches one article.
pub struct GetArticleById {
    service: Arc<PublicationService>,
}

impl GetArticleById {
    pub fn new(service: Arc<PublicationService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, id: u64) -> Result<Option<Article>, Error> {
        self.service.article(id).await
    }
}

// Supplements

/// Lists all supplement categories.
pub struct GetSupplementCategories {
    service: Arc<SupplementService>,
}

impl GetSupplementCategories {
    pub fn new(service: Arc<SupplementService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self) -> Result<Option<Vec<SupplementCategory>>, Error> {
        self.service.categories().await
    }
}

/// Fetches one supplement category.
pub struct GetSupplementCategoryById {
    service: Arc<SupplementService>,
}

impl GetSupplementCategoryById {
    pub fn new(service: Arc<SupplementService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, id: u64) -> Result<Option<SupplementCategory>, Error> {
        self.service.category(id).await
    }
}

/// Creates a supplement category.
pub struct CreateSupplementCategory {
    service: Arc<SupplementService>,
}

impl CreateSupplementCategory {
    pub fn new(service: Arc<SupplementService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, draft: &SupplementCategoryDraft) -> Result<bool, Error> {
        self.service.create_category(draft).await
    }
}

/// Updates a supplement category.
pub struct UpdateSupplementCategory {
    service: Arc<SupplementService>,
}

impl UpdateSupplementCategory {
    pub fn new(service: Arc<SupplementService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, patch: &SupplementCategoryPatch) -> Result<bool, Error> {
        self.service.update_category(patch).await
    }
}

/// Archives a supplement category.
pub struct ArchiveSupplementCategory {
    service: Arc<SupplementService>,
}

impl ArchiveSupplementCategory {
    pub fn new(service: Arc<SupplementService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, id: u64) -> Result<bool, Error> {
        self.service.archive_category(id).await
    }
}

/// Lists every supplement document across categories.
pub struct GetSupplementDocuments {
    service: Arc<SupplementService>,
}

impl GetSupplementDocuments {
    pub fn new(service: Arc<SupplementService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self) -> Result<Option<Vec<SupplementDocument>>, Error> {
        self.service.documents().await
    }
}

/// Lists the documents of one category.
pub struct GetCategoryDocuments {
    service: Arc<SupplementService>,
}

impl GetCategoryDocuments {
    pub fn new(service: Arc<SupplementService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, category_id: u64) -> Result<Option<Vec<SupplementDocument>>, Error> {
        self.service.documents_in_category(category_id).await
    }
}

/// Fetches one supplement document.
pub struct GetSupplementDocumentById {
    service: Arc<SupplementService>,
}

impl GetSupplementDocumentById {
    pub fn new(service: Arc<SupplementService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, id: u64) -> Result<Option<SupplementDocument>, Error> {
        self.service.document(id).await
    }
}

/// Creates a supplement document.
pub struct CreateSupplementDocument {
    service: Arc<SupplementService>,
}

impl CreateSupplementDocument {
    pub fn new(service: Arc<SupplementService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, draft: &SupplementDocumentDraft) -> Result<bool, Error> {
        self.service.create_document(draft).await
    }
}

/// Updates a supplement document.
pub struct UpdateSupplementDocument {
    service: Arc<SupplementService>,
}

impl UpdateSupplementDocument {
    pub fn new(service: Arc<SupplementService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, patch: &SupplementDocumentPatch) -> Result<bool, Error> {
        self.service.update_document(patch).await
    }
}

/// Archives a supplement document.
pub struct ArchiveSupplementDocument {
    service: Arc<SupplementService>,
}

impl ArchiveSupplementDocument {
    pub fn new(service: Arc<SupplementService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, id: u64) -> Result<bool, Error> {
        self.service.archive_document(id).await
    }
}

// Editor customization

/// Fetches the newsstand settings record.
pub struct GetEditorSettings {
    service: Arc<EditorService>,
}

impl GetEditorSettings {
    pub fn new(service: Arc<EditorService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self) -> Result<Option<EditorSettings>, Error> {
        self.service.settings().await
    }
}

/// Replaces the newsstand color set.
pub struct UpdateEditorColors {
    service: Arc<EditorService>,
}

impl UpdateEditorColors {
    pub fn new(service: Arc<EditorService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, colors: &EditorColors) -> Result<bool, Error> {
        self.service.update_colors(colors).await
    }
}

/// Uploads a logo already encoded as base64.
pub struct UpdateEditorLogo {
    service: Arc<EditorService>,
}

impl UpdateEditorLogo {
    pub fn new(service: Arc<EditorService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, name: &str, content: &str) -> Result<bool, Error> {
        self.service.update_logo(name, content).await
    }
}

/// Fetches an image URL and uploads it as the newsstand logo.
pub struct UpdateEditorLogoFromUrl {
    service: Arc<EditorService>,
}

impl UpdateEditorLogoFromUrl {
    pub fn new(service: Arc<EditorService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, name: &str, url: &str) -> Result<bool, Error> {
        self.service.update_logo_from_url(name, url).await
    }
}

/// Lists the front-page pods.
pub struct GetPods {
    service: Arc<EditorService>,
}

impl GetPods {
    pub fn new(service: Arc<EditorService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self) -> Result<Option<Vec<Pod>>, Error> {
        self.service.pods().await
    }
}

/// Updates one pod.
pub struct UpdatePod {
    service: Arc<EditorService>,
}

impl UpdatePod {
    pub fn new(service: Arc<EditorService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, patch: &PodPatch) -> Result<bool, Error> {
        self.service.update_pod(patch).await
    }
}

/// Lists the sidebar blocks.
pub struct GetSidebars {
    service: Arc<EditorService>,
}

impl GetSidebars {
    pub fn new(service: Arc<EditorService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self) -> Result<Option<Vec<Sidebar>>, Error> {
        self.service.sidebars().await
    }
}

/// Updates one sidebar block.
pub struct UpdateSidebar {
    service: Arc<EditorService>,
}

impl UpdateSidebar {
    pub fn new(service: Arc<EditorService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, patch: &SidebarPatch) -> Result<bool, Error> {
        self.service.update_sidebar(patch).await
    }
}

// Exports

/// Fetches the readership statistics export.
pub struct ExportStatistics {
    service: Arc<ExportService>,
}

impl ExportStatistics {
    pub fn new(service: Arc<ExportService>) -> Self {
        Self { service }
    }

    pub async fn handle(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<ExportFile, Error> {
        self.service.statistics(from, to).await
    }
}

/// Fetches the registrants export.
pub struct ExportRegistrants {
    service: Arc<ExportService>,
}

impl ExportRegistrants {
    pub fn new(service: Arc<ExportService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self) -> Result<ExportFile, Error> {
        self.service.registrants().await
    }
}
