//! Unit tests for advert link classification and CRUD plumbing.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kiosko_client::ApiClient;

use super::{AdvertRepository, AdvertService};
use crate::entities::{AdvertDraft, LinkType};
use crate::repository::CrudRepository;

fn service(base: &str) -> AdvertService {
    let client = ApiClient::new(base).expect("valid base url");
    AdvertService::new(Arc::new(AdvertRepository::new(Arc::new(client))))
}

#[tokio::test]
async fn listing_classifies_every_advert() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/adverts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "adverts": [
                { "id": 1, "title": "External", "linkUrl": "https://example.com" },
                { "id": 2, "title": "Editorial", "articleId": 99 },
                { "id": 3, "title": "Plain" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let adverts = service(&mock_server.uri())
        .adverts()
        .await
        .expect("call succeeds")
        .expect("listing present");

    assert_eq!(adverts[0].link_type, LinkType::Url);
    assert_eq!(adverts[1].link_type, LinkType::Article);
    assert_eq!(adverts[2].link_type, LinkType::None);
}

#[tokio::test]
async fn detail_classifies_the_single_advert() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/adverts/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "advert": { "id": 2, "title": "Editorial", "articleId": 99 }
        })))
        .mount(&mock_server)
        .await;

    let advert = service(&mock_server.uri())
        .advert(2)
        .await
        .expect("call succeeds")
        .expect("advert present");

    assert_eq!(advert.link_type, LinkType::Article);
}

#[tokio::test]
async fn absent_listing_stays_distinct_from_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/adverts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "adverts": null })))
        .mount(&mock_server)
        .await;

    let listing = service(&mock_server.uri()).adverts().await.expect("call succeeds");
    assert!(listing.is_none());
}

#[tokio::test]
async fn create_posts_only_populated_link_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/adverts"))
        .and(body_json(json!({
            "title": "External",
            "linkUrl": "https://example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).expect("valid base url");
    let repo = AdvertRepository::new(Arc::new(client));
    let draft = AdvertDraft {
        title: "External".to_string(),
        link_url: Some("https://example.com".to_string()),
        ..Default::default()
    };

    assert!(repo.create(&draft).await.expect("call succeeds"));
}
