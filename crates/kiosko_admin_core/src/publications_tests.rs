//! Unit tests for publication and article access.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kiosko_client::ApiClient;

use super::{ArticleRepository, PublicationRepository, PublicationService};

fn service(base: &str) -> PublicationService {
    let client = Arc::new(ApiClient::new(base).expect("valid base url"));
    PublicationService::new(
        Arc::new(PublicationRepository::new(Arc::clone(&client))),
        Arc::new(ArticleRepository::new(client)),
    )
}

#[tokio::test]
async fn article_listing_can_be_scoped_to_a_publication() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .and(query_param("publicationId", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "articles": [{ "id": 1, "publicationId": 9, "title": "Front", "page": 1 }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let articles = service(&mock_server.uri())
        .articles(Some(9))
        .await
        .expect("call succeeds")
        .expect("listing present");

    assert_eq!(articles[0].publication_id, 9);
}

#[tokio::test]
async fn unscoped_article_listing_sends_no_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .and(query_param_is_missing("publicationId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "articles": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let articles = service(&mock_server.uri())
        .articles(None)
        .await
        .expect("call succeeds");

    assert_eq!(articles, Some(vec![]));
}

#[tokio::test]
async fn publication_detail_decodes_the_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/publications/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "publication": {
                "id": 9,
                "title": "Morning Edition",
                "slug": "morning-edition",
                "publishedOn": "2026-08-01"
            }
        })))
        .mount(&mock_server)
        .await;

    let publication = service(&mock_server.uri())
        .publication(9)
        .await
        .expect("call succeeds")
        .expect("publication present");

    assert_eq!(publication.slug.as_deref(), Some("morning-edition"));
}
