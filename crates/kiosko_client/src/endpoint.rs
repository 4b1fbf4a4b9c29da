//! Endpoint descriptors for the Kiosko admin API.
//!
//! Every operation the client can perform is declared here as a static
//! [`Endpoint`]: an HTTP method, a path template, and whether the operation
//! expects the session token. Path templates use `{name}` placeholders that
//! are resolved from the caller's parameters at request time.

use reqwest::Method;

#[cfg(test)]
#[path = "endpoint_tests.rs"]
mod tests;

/// A statically configured HTTP operation descriptor.
///
/// Endpoints are declared as `const` items in [`endpoints`] and passed by
/// reference to [`ApiClient::request`](crate::ApiClient::request). The path
/// is a template; placeholders such as `{id}` are substituted from the
/// request parameters before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// HTTP method used for the operation.
    pub method: Method,
    /// Path template relative to the API base URL, e.g. `/campaigns/{id}`.
    pub path: &'static str,
    /// Whether the session token should be attached as a query parameter.
    ///
    /// Operations default to `true`; only the unauthenticated session
    /// endpoints opt out. When `false`, the token middleware never attaches
    /// a token, even if one is stored.
    pub requires_token: bool,
}

impl Endpoint {
    const fn get(path: &'static str) -> Self {
        Self {
            method: Method::GET,
            path,
            requires_token: true,
        }
    }

    const fn post(path: &'static str) -> Self {
        Self {
            method: Method::POST,
            path,
            requires_token: true,
        }
    }

    const fn put(path: &'static str) -> Self {
        Self {
            method: Method::PUT,
            path,
            requires_token: true,
        }
    }

    const fn delete(path: &'static str) -> Self {
        Self {
            method: Method::DELETE,
            path,
            requires_token: true,
        }
    }

    /// A POST endpoint that must never carry the session token.
    const fn public_post(path: &'static str) -> Self {
        Self {
            method: Method::POST,
            path,
            requires_token: false,
        }
    }
}

/// The endpoint table: one descriptor per logical operation, grouped by
/// domain area.
pub mod endpoints {
    use super::Endpoint;

    // Session
    pub static LOGIN: Endpoint = Endpoint::public_post("/auth/login");
    pub static RESET_PASSWORD: Endpoint = Endpoint::public_post("/auth/reset-password");

    // Campaigns
    pub static CAMPAIGN_LIST: Endpoint = Endpoint::get("/campaigns");
    pub static CAMPAIGN_DETAIL: Endpoint = Endpoint::get("/campaigns/{id}");
    pub static CAMPAIGN_CREATE: Endpoint = Endpoint::post("/campaigns");
    pub static CAMPAIGN_UPDATE: Endpoint = Endpoint::put("/campaigns/{id}");
    pub static CAMPAIGN_ARCHIVE: Endpoint = Endpoint::delete("/campaigns/{id}");

    // Adverts
    pub static ADVERT_LIST: Endpoint = Endpoint::get("/adverts");
    pub static ADVERT_DETAIL: Endpoint = Endpoint::get("/adverts/{id}");
    pub static ADVERT_CREATE: Endpoint = Endpoint::post("/adverts");
    pub static ADVERT_UPDATE: Endpoint = Endpoint::put("/adverts/{id}");
    pub static ADVERT_ARCHIVE: Endpoint = Endpoint::delete("/adverts/{id}");

    // Highlights
    pub static HIGHLIGHT_LIST: Endpoint = Endpoint::get("/highlights");
    pub static HIGHLIGHT_DETAIL: Endpoint = Endpoint::get("/highlights/{id}");
    pub static HIGHLIGHT_CREATE: Endpoint = Endpoint::post("/highlights");
    pub static HIGHLIGHT_UPDATE: Endpoint = Endpoint::put("/highlights/{id}");
    pub static HIGHLIGHT_ARCHIVE: Endpoint = Endpoint::delete("/highlights/{id}");

    // Games
    pub static GAME_LIST: Endpoint = Endpoint::get("/games");
    pub static GAME_DETAIL: Endpoint = Endpoint::get("/games/{id}");
    pub static GAME_CREATE: Endpoint = Endpoint::post("/games");
    pub static GAME_UPDATE: Endpoint = Endpoint::put("/games/{id}");
    pub static GAME_ARCHIVE: Endpoint = Endpoint::delete("/games/{id}");

    // Publications and their articles
    pub static PUBLICATION_LIST: Endpoint = Endpoint::get("/publications");
    pub static PUBLICATION_DETAIL: Endpoint = Endpoint::get("/publications/{id}");
    pub static PUBLICATION_CREATE: Endpoint = Endpoint::post("/publications");
    pub static PUBLICATION_UPDATE: Endpoint = Endpoint::put("/publications/{id}");
    pub static PUBLICATION_ARCHIVE: Endpoint = Endpoint::delete("/publications/{id}");
    pub static ARTICLE_LIST: Endpoint = Endpoint::get("/articles");
    pub static ARTICLE_DETAIL: Endpoint = Endpoint::get("/articles/{id}");

    // Supplements
    pub static SUPPLEMENT_CATEGORY_LIST: Endpoint = Endpoint::get("/supplements/categories");
    pub static SUPPLEMENT_CATEGORY_DETAIL: Endpoint = Endpoint::get("/supplements/categories/{id}");
    pub static SUPPLEMENT_CATEGORY_CREATE: Endpoint = Endpoint::post("/supplements/categories");
    pub static SUPPLEMENT_CATEGORY_UPDATE: Endpoint = Endpoint::put("/supplements/categories/{id}");
    pub static SUPPLEMENT_CATEGORY_ARCHIVE: Endpoint =
        Endpoint::delete("/supplements/categories/{id}");
    pub static SUPPLEMENT_DOCUMENT_LIST_ALL: Endpoint = Endpoint::get("/supplements/documents");
    pub static SUPPLEMENT_DOCUMENT_LIST: Endpoint =
        Endpoint::get("/supplements/categories/{categoryId}/documents");
    pub static SUPPLEMENT_DOCUMENT_DETAIL: Endpoint = Endpoint::get("/supplements/documents/{id}");
    pub static SUPPLEMENT_DOCUMENT_CREATE: Endpoint = Endpoint::post("/supplements/documents");
    pub static SUPPLEMENT_DOCUMENT_UPDATE: Endpoint = Endpoint::put("/supplements/documents/{id}");
    pub static SUPPLEMENT_DOCUMENT_ARCHIVE: Endpoint =
        Endpoint::delete("/supplements/documents/{id}");

    // Editor customization
    pub static EDITOR_SETTINGS: Endpoint = Endpoint::get("/editor/settings");
    pub static EDITOR_SETTINGS_UPDATE: Endpoint = Endpoint::put("/editor/settings");
    pub static EDITOR_LOGO_UPDATE: Endpoint = Endpoint::put("/editor/logo");
    pub static POD_LIST: Endpoint = Endpoint::get("/editor/pods");
    pub static POD_UPDATE: Endpoint = Endpoint::put("/editor/pods/{id}");
    pub static SIDEBAR_LIST: Endpoint = Endpoint::get("/editor/sidebars");
    pub static SIDEBAR_UPDATE: Endpoint = Endpoint::put("/editor/sidebars/{id}");

    // Exports
    pub static EXPORT_STATISTICS: Endpoint = Endpoint::get("/exports/statistics");
    pub static EXPORT_REGISTRANTS: Endpoint = Endpoint::get("/exports/registrants");
}
