//! Unit tests for use-case delegation.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kiosko_client::{ApiClient, Error as ApiError};

use super::{GetCampaigns, UpdateCampaign};
use crate::campaigns::{CampaignRepository, CampaignService};
use crate::entities::CampaignPatch;
use crate::registry::Registry;
use crate::Error;

fn campaign_service(base: &str) -> Arc<CampaignService> {
    let client = Arc::new(ApiClient::new(base).expect("valid base url"));
    Arc::new(CampaignService::new(Arc::new(CampaignRepository::new(
        client,
    ))))
}

#[tokio::test]
async fn update_campaign_reports_both_server_outcomes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/campaigns/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&mock_server)
        .await;

    let usecase = UpdateCampaign::new(campaign_service(&mock_server.uri()));
    let patch = CampaignPatch {
        id: 7,
        is_locked: Some(true),
        ..Default::default()
    };

    assert!(usecase.handle(&patch).await.expect("call succeeds"));

    mock_server.reset().await;
    Mock::given(method("PUT"))
        .and(path("/campaigns/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&mock_server)
        .await;

    assert!(!usecase.handle(&patch).await.expect("call succeeds"));
}

#[tokio::test]
async fn update_campaign_does_not_catch_transport_failures() {
    // Nothing listens here; the rejection must reach the caller.
    let usecase = UpdateCampaign::new(campaign_service("http://127.0.0.1:9"));
    let patch = CampaignPatch {
        id: 7,
        is_locked: Some(true),
        ..Default::default()
    };

    let result = usecase.handle(&patch).await;
    assert!(matches!(result, Err(Error::Api(ApiError::Transport(_)))));
}

#[tokio::test]
async fn usecases_resolve_as_singletons_through_the_registry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/campaigns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "campaigns": [] })))
        .mount(&mock_server)
        .await;

    let registry = Registry::new();
    let service = campaign_service(&mock_server.uri());

    let first = registry.resolve(|| GetCampaigns::new(Arc::clone(&service)));
    let second = registry.resolve(|| GetCampaigns::new(Arc::clone(&service)));
    assert!(Arc::ptr_eq(&first, &second));

    let listing = first.handle().await.expect("call succeeds");
    assert_eq!(listing, Some(vec![]));
}
