//! Unit tests for the session service.

use std::sync::Arc;

use kiosko_client::{ApiClient, TokenMiddleware, TokenProvider};
use secrecy::ExposeSecret;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{SessionService, StoredTokenProvider, TOKEN_KEY};
use crate::storage::{KeyValueStore, MemoryStore};

fn service(base: &str, store: Arc<MemoryStore>) -> SessionService {
    let client = ApiClient::new(base).expect("valid base url");
    SessionService::new(Arc::new(client), store)
}

#[tokio::test]
async fn login_persists_the_issued_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "op@kiosko.test",
            "password": "hunter2"
        })))
        .and(query_param_is_missing("token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "abc123" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let session = service(&mock_server.uri(), Arc::clone(&store));

    let logged_in = session
        .login("op@kiosko.test", "hunter2")
        .await
        .expect("login call succeeds");

    assert!(logged_in);
    assert_eq!(
        store.get_item(TOKEN_KEY).expect("read store"),
        Some("abc123".to_string())
    );
    let token = session.current_token().expect("read token");
    assert_eq!(token.expect("token present").expose_secret(), "abc123");
}

#[tokio::test]
async fn rejected_login_stores_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": null })))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let session = service(&mock_server.uri(), Arc::clone(&store));

    let logged_in = session
        .login("op@kiosko.test", "wrong")
        .await
        .expect("login call succeeds");

    assert!(!logged_in);
    assert_eq!(store.get_item(TOKEN_KEY).expect("read store"), None);
}

#[tokio::test]
async fn logout_forgets_the_token() {
    let mock_server = MockServer::start().await;
    let store = Arc::new(MemoryStore::new());
    store.set_item(TOKEN_KEY, "abc123").expect("seed token");

    let session = service(&mock_server.uri(), Arc::clone(&store));
    session.logout().expect("logout");

    assert_eq!(store.get_item(TOKEN_KEY).expect("read store"), None);
    assert!(session.current_token().expect("read token").is_none());
}

#[tokio::test]
async fn reset_password_reports_server_outcome() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/reset-password"))
        .and(body_json(json!({ "email": "op@kiosko.test" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let session = service(&mock_server.uri(), store);

    let accepted = session
        .reset_password("op@kiosko.test")
        .await
        .expect("reset call succeeds");
    assert!(accepted);
}

#[tokio::test]
async fn stored_token_rides_along_on_authenticated_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/campaigns"))
        .and(query_param("token", "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "campaigns": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    store.set_item(TOKEN_KEY, "abc123").expect("seed token");

    let client = ApiClient::new(&mock_server.uri())
        .expect("valid base url")
        .with_middleware(TokenMiddleware::new(Arc::new(StoredTokenProvider::new(
            Arc::clone(&store),
        ))));

    let body: serde_json::Value = client
        .request(&kiosko_client::endpoints::CAMPAIGN_LIST)
        .send(kiosko_client::Params::new())
        .await
        .expect("request succeeds");

    assert_eq!(body["campaigns"], json!([]));
}

#[test]
fn provider_returns_none_when_no_token_is_stored() {
    let provider = StoredTokenProvider::new(Arc::new(MemoryStore::new()));
    assert!(provider.token().is_none());
}
