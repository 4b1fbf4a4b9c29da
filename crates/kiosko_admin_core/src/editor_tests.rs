//! Unit tests for customization access.

use std::sync::Arc;

use base64::prelude::{Engine as _, BASE64_STANDARD};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kiosko_client::ApiClient;

use super::{EditorRepository, EditorService};
use crate::entities::{EditorColors, PodPatch};
use crate::files::FileService;

fn service(base: &str) -> EditorService {
    let client = ApiClient::new(base).expect("valid base url");
    EditorService::new(
        Arc::new(EditorRepository::new(Arc::new(client))),
        Arc::new(FileService::new()),
    )
}

#[tokio::test]
async fn settings_decode_the_singleton_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/editor/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "settings": {
                "primaryColor": "#aa2222",
                "secondaryColor": "#222222",
                "backgroundColor": "#ffffff",
                "logoUrl": "https://cdn.kiosko.test/logo.png"
            }
        })))
        .mount(&mock_server)
        .await;

    let settings = service(&mock_server.uri())
        .settings()
        .await
        .expect("call succeeds")
        .expect("settings present");

    assert_eq!(settings.primary_color, "#aa2222");
    assert_eq!(settings.logo_url.as_deref(), Some("https://cdn.kiosko.test/logo.png"));
}

#[tokio::test]
async fn color_update_sends_the_full_set() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/editor/settings"))
        .and(body_json(json!({
            "primaryColor": "#aa2222",
            "secondaryColor": "#222222",
            "backgroundColor": "#ffffff"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let colors = EditorColors {
        primary_color: "#aa2222".to_string(),
        secondary_color: "#222222".to_string(),
        background_color: "#ffffff".to_string(),
    };

    assert!(service(&mock_server.uri())
        .update_colors(&colors)
        .await
        .expect("call succeeds"));
}

#[tokio::test]
async fn logo_from_url_downloads_then_uploads_base64() {
    let mock_server = MockServer::start().await;
    let encoded = BASE64_STANDARD.encode("pngbytes");

    Mock::given(method("GET"))
        .and(path("/assets/logo.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"pngbytes".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/editor/logo"))
        .and(body_json(json!({ "name": "logo.png", "content": encoded })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let uploaded = service(&mock_server.uri())
        .update_logo_from_url("logo.png", &format!("{}/assets/logo.png", mock_server.uri()))
        .await
        .expect("call succeeds");

    assert!(uploaded);
}

#[tokio::test]
async fn pod_update_targets_the_pod_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/editor/pods/6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).expect("valid base url");
    let repo = EditorRepository::new(Arc::new(client));
    let patch = PodPatch {
        id: 6,
        is_enabled: Some(false),
        ..Default::default()
    };

    assert!(repo.update_pod(&patch).await.expect("call succeeds"));
}
