//! Unit tests for the client error taxonomy.

use super::Error;

#[test]
fn unresolved_placeholder_names_the_placeholder() {
    let error = Error::UnresolvedPlaceholder("categoryId".to_string());
    assert_eq!(
        error.to_string(),
        "Unresolved path placeholder: {categoryId}"
    );
}

#[test]
fn status_error_carries_the_code() {
    let error = Error::Status(503);
    assert_eq!(error.to_string(), "Server returned status 503");
}

#[test]
fn deserialization_error_converts_from_serde() {
    let serde_error =
        serde_json::from_str::<serde_json::Value>("not json").expect_err("must not parse");
    let error: Error = serde_error.into();
    assert!(matches!(error, Error::Deserialization(_)));
}

#[test]
fn base_url_error_converts_from_url_parse() {
    let parse_error = url::Url::parse("::not a url::").expect_err("must not parse");
    let error: Error = parse_error.into();
    assert!(matches!(error, Error::InvalidBaseUrl(_)));
}
