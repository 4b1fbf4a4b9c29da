//! Domain entities.
//!
//! Plain data records mirroring the server's resources. The server assigns
//! every `id`; records carry `0` before creation. The one client-side
//! addition is [`LinkType`], a convenience classification of the mutually
//! exclusive link fields on adverts and highlights — the exclusivity
//! invariant itself is enforced server-side, the client only infers and
//! displays it.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "entities_tests.rs"]
mod tests;

/// Classification of which link field is populated on a record.
///
/// Not present on the wire; derived by the services after deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkType {
    /// The record links to an external URL.
    Url,
    /// The record links to an article within a publication.
    Article,
    /// The record carries no link.
    #[default]
    None,
}

impl LinkType {
    /// Derives the classification from the optional link fields.
    ///
    /// A populated URL takes precedence; the server guarantees at most one
    /// field is set, so the precedence only matters for malformed records.
    pub fn classify(link_url: Option<&str>, article_id: Option<u64>) -> Self {
        match (link_url, article_id) {
            (Some(url), _) if !url.is_empty() => LinkType::Url,
            (_, Some(_)) => LinkType::Article,
            _ => LinkType::None,
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LinkType::Url => "url",
            LinkType::Article => "article",
            LinkType::None => "none",
        };
        f.write_str(label)
    }
}

/// A reader-facing promotional campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub starts_on: Option<NaiveDate>,
    #[serde(default)]
    pub ends_on: Option<NaiveDate>,
    /// Locked campaigns cannot be edited by newsroom staff.
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub is_archived: bool,
}

/// Values for creating a campaign.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<NaiveDate>,
}

/// Partial value set for updating a campaign; absent fields are untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPatch {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
}

/// A banner advert placed on the newsstand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advert {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub article_id: Option<u64>,
    #[serde(default)]
    pub is_archived: bool,
    /// Derived client-side; never serialized.
    #[serde(skip)]
    pub link_type: LinkType,
}

impl Advert {
    /// Populates [`Advert::link_type`] from the wire link fields.
    pub fn classify_link(&mut self) {
        self.link_type = LinkType::classify(self.link_url.as_deref(), self.article_id);
    }
}

/// Values for creating an advert.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<u64>,
}

/// Partial value set for updating an advert.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertPatch {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<u64>,
}

/// A highlighted story pinned to the newsstand front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub article_id: Option<u64>,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub is_archived: bool,
    /// Derived client-side; never serialized.
    #[serde(skip)]
    pub link_type: LinkType,
}

impl Highlight {
    /// Populates [`Highlight::link_type`] from the wire link fields.
    pub fn classify_link(&mut self) {
        self.link_type = LinkType::classify(self.link_url.as_deref(), self.article_id);
    }
}

/// Values for creating a highlight.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

/// Partial value set for updating a highlight.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightPatch {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

/// A reader game or contest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub game_url: Option<String>,
    #[serde(default)]
    pub starts_on: Option<NaiveDate>,
    #[serde(default)]
    pub ends_on: Option<NaiveDate>,
    #[serde(default)]
    pub is_archived: bool,
}

/// Values for creating a game.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<NaiveDate>,
}

/// Partial value set for updating a game.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePatch {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<NaiveDate>,
}

/// A publication (newspaper or magazine edition) on the newsstand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub published_on: Option<NaiveDate>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub is_archived: bool,
}

/// Values for creating a publication.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

/// Partial value set for updating a publication.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationPatch {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

/// An article inside a publication. Read-only from the console; articles
/// are produced by the editorial pipeline and referenced by adverts and
/// highlights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub publication_id: u64,
    pub title: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
}

/// A supplement category grouping downloadable documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementCategory {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub position: u32,
}

/// Values for creating a supplement category.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementCategoryDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

/// Partial value set for updating a supplement category.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementCategoryPatch {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

/// A downloadable supplement document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementDocument {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub category_id: u64,
    pub title: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub published_on: Option<NaiveDate>,
}

/// Values for creating a supplement document.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementDocumentDraft {
    pub category_id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_on: Option<NaiveDate>,
}

/// Partial value set for updating a supplement document.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementDocumentPatch {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_on: Option<NaiveDate>,
}

/// Newsstand look-and-feel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSettings {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Color set accepted by the settings update endpoint.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorColors {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
}

/// A content pod on the customized newsstand front page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pod {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    /// Pod content kind as reported by the server, e.g. `latest`,
    /// `supplements`, `games`.
    pub kind: String,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub is_enabled: bool,
}

/// Partial value set for updating a pod.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodPatch {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

/// A sidebar block on the customized newsstand layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidebar {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub is_enabled: bool,
}

/// Partial value set for updating a sidebar.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarPatch {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}
