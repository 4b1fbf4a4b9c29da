//! Unit tests for the domain error type.

use super::Error;

#[test]
fn api_errors_pass_through_transparently() {
    let inner = kiosko_client::Error::Status(401);
    let error: Error = inner.into();

    // Transparent wrapping: the message is the client error's own.
    assert_eq!(error.to_string(), "Server returned status 401");
}

#[test]
fn encoding_errors_name_the_problem() {
    use base64::prelude::{Engine as _, BASE64_STANDARD};

    let decode_error = BASE64_STANDARD
        .decode("!!! not base64 !!!")
        .expect_err("must not decode");
    let error: Error = decode_error.into();

    assert!(error.to_string().starts_with("File content is not valid base64"));
}
