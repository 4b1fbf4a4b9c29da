//! Unit tests for supplement access.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kiosko_client::ApiClient;

use super::{SupplementCategoryRepository, SupplementDocumentRepository, SupplementService};
use crate::entities::SupplementCategoryDraft;
use crate::repository::CrudRepository;

fn service(base: &str) -> SupplementService {
    let client = Arc::new(ApiClient::new(base).expect("valid base url"));
    SupplementService::new(
        Arc::new(SupplementCategoryRepository::new(Arc::clone(&client))),
        Arc::new(SupplementDocumentRepository::new(client)),
    )
}

#[tokio::test]
async fn documents_are_listed_per_category() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/supplements/categories/3/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [{
                "id": 21,
                "categoryId": 3,
                "title": "Weekend magazine",
                "fileUrl": "https://cdn.kiosko.test/weekend.pdf"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let documents = service(&mock_server.uri())
        .documents_in_category(3)
        .await
        .expect("call succeeds")
        .expect("listing present");

    assert_eq!(documents[0].category_id, 3);
}

#[tokio::test]
async fn category_create_reads_the_status_acknowledgement() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/supplements/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "created",
            "success": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).expect("valid base url");
    let repo = SupplementCategoryRepository::new(Arc::new(client));
    let draft = SupplementCategoryDraft {
        name: "Magazines".to_string(),
        ..Default::default()
    };

    assert!(repo.create(&draft).await.expect("call succeeds"));
}

#[tokio::test]
async fn archive_reports_server_refusal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/supplements/documents/21"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "locked",
            "success": false
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).expect("valid base url");
    let repo = SupplementDocumentRepository::new(Arc::new(client));

    assert!(!repo.remove(21).await.expect("call succeeds"));
}
