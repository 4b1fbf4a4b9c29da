//! Unit tests for the endpoint table.

use reqwest::Method;

use super::endpoints;

#[test]
fn crud_endpoints_use_expected_methods() {
    assert_eq!(endpoints::CAMPAIGN_LIST.method, Method::GET);
    assert_eq!(endpoints::CAMPAIGN_CREATE.method, Method::POST);
    assert_eq!(endpoints::CAMPAIGN_UPDATE.method, Method::PUT);
    assert_eq!(endpoints::CAMPAIGN_ARCHIVE.method, Method::DELETE);
}

#[test]
fn endpoints_require_token_by_default() {
    assert!(endpoints::CAMPAIGN_LIST.requires_token);
    assert!(endpoints::ADVERT_CREATE.requires_token);
    assert!(endpoints::EDITOR_SETTINGS.requires_token);
    assert!(endpoints::EXPORT_STATISTICS.requires_token);
}

#[test]
fn session_endpoints_opt_out_of_token() {
    assert!(!endpoints::LOGIN.requires_token);
    assert!(!endpoints::RESET_PASSWORD.requires_token);
}

#[test]
fn detail_endpoints_carry_id_placeholder() {
    assert!(endpoints::CAMPAIGN_DETAIL.path.contains("{id}"));
    assert!(endpoints::SUPPLEMENT_DOCUMENT_LIST.path.contains("{categoryId}"));
}
