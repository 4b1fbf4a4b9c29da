//! Unit tests for entity shapes and link classification.

use serde_json::json;

use super::{Advert, Campaign, LinkType};

#[test]
fn link_type_prefers_a_populated_url() {
    assert_eq!(
        LinkType::classify(Some("https://example.com"), None),
        LinkType::Url
    );
    assert_eq!(LinkType::classify(None, Some(7)), LinkType::Article);
    assert_eq!(LinkType::classify(None, None), LinkType::None);
}

#[test]
fn empty_url_counts_as_unpopulated() {
    assert_eq!(LinkType::classify(Some(""), Some(7)), LinkType::Article);
    assert_eq!(LinkType::classify(Some(""), None), LinkType::None);
}

#[test]
fn link_type_displays_as_lowercase_labels() {
    assert_eq!(LinkType::Url.to_string(), "url");
    assert_eq!(LinkType::Article.to_string(), "article");
    assert_eq!(LinkType::None.to_string(), "none");
}

#[test]
fn advert_classification_fills_the_derived_field() {
    let mut advert: Advert = serde_json::from_value(json!({
        "id": 3,
        "title": "Editorial",
        "articleId": 12
    }))
    .expect("valid advert");

    // Freshly deserialized records default to no link.
    assert_eq!(advert.link_type, LinkType::None);
    advert.classify_link();
    assert_eq!(advert.link_type, LinkType::Article);
}

#[test]
fn records_default_their_id_before_creation() {
    let campaign: Campaign =
        serde_json::from_value(json!({ "name": "Draft campaign" })).expect("valid campaign");
    assert_eq!(campaign.id, 0);
    assert!(!campaign.is_archived);
}

#[test]
fn campaign_wire_fields_use_camel_case() {
    let campaign: Campaign = serde_json::from_value(json!({
        "id": 5,
        "name": "Locked",
        "isLocked": true,
        "startsOn": "2026-01-01"
    }))
    .expect("valid campaign");

    assert!(campaign.is_locked);
    assert_eq!(
        campaign.starts_on,
        chrono::NaiveDate::from_ymd_opt(2026, 1, 1)
    );
}
