//! Unit tests for highlight access.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kiosko_client::ApiClient;

use super::{HighlightRepository, HighlightService};
use crate::entities::{HighlightPatch, LinkType};
use crate::repository::CrudRepository;

fn service(base: &str) -> HighlightService {
    let client = ApiClient::new(base).expect("valid base url");
    HighlightService::new(Arc::new(HighlightRepository::new(Arc::new(client))))
}

#[tokio::test]
async fn listing_preserves_position_and_classifies_links() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/highlights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "highlights": [
                { "id": 4, "title": "Front page", "position": 1, "articleId": 12 }
            ]
        })))
        .mount(&mock_server)
        .await;

    let highlights = service(&mock_server.uri())
        .highlights()
        .await
        .expect("call succeeds")
        .expect("listing present");

    assert_eq!(highlights[0].position, 1);
    assert_eq!(highlights[0].link_type, LinkType::Article);
}

#[tokio::test]
async fn update_reports_server_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/highlights/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).expect("valid base url");
    let repo = HighlightRepository::new(Arc::new(client));
    let patch = HighlightPatch {
        id: 4,
        position: Some(2),
        ..Default::default()
    };

    assert!(!repo.update(&patch).await.expect("call succeeds"));
}
