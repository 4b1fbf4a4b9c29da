//! Unit tests for game access.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kiosko_client::ApiClient;

use super::GameRepository;
use crate::entities::GameDraft;
use crate::repository::CrudRepository;

fn repository(base: &str) -> GameRepository {
    let client = ApiClient::new(base).expect("valid base url");
    GameRepository::new(Arc::new(client))
}

#[tokio::test]
async fn listing_decodes_game_dates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "games": [{
                "id": 3,
                "title": "Summer quiz",
                "gameUrl": "https://games.kiosko.test/quiz",
                "startsOn": "2026-06-01",
                "endsOn": "2026-08-31"
            }]
        })))
        .mount(&mock_server)
        .await;

    let games = repository(&mock_server.uri())
        .get_all()
        .await
        .expect("call succeeds")
        .expect("listing present");

    assert_eq!(games[0].title, "Summer quiz");
    assert_eq!(
        games[0].starts_on,
        chrono::NaiveDate::from_ymd_opt(2026, 6, 1)
    );
}

#[tokio::test]
async fn create_serializes_dates_in_iso_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/games"))
        .and(body_json(json!({
            "title": "Summer quiz",
            "startsOn": "2026-06-01"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let draft = GameDraft {
        title: "Summer quiz".to_string(),
        starts_on: chrono::NaiveDate::from_ymd_opt(2026, 6, 1),
        ..Default::default()
    };

    assert!(repository(&mock_server.uri())
        .create(&draft)
        .await
        .expect("call succeeds"));
}
