//! Unit tests for console error rendering.

use super::Error;

#[test]
fn rejected_operations_name_the_operation() {
    let error = Error::Rejected("campaign update");
    assert_eq!(
        error.to_string(),
        "The server rejected the campaign update operation"
    );
}

#[test]
fn api_errors_render_transparently() {
    let error: Error = kiosko_client::Error::Status(401).into();
    assert_eq!(error.to_string(), "Server returned status 401");
}

#[test]
fn config_errors_are_prefixed() {
    let error = Error::Config("missing field".to_string());
    assert!(error.to_string().starts_with("Configuration error"));
}
