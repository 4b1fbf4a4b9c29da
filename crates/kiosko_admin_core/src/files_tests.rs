//! Unit tests for file operations.

use base64::prelude::{Engine as _, BASE64_STANDARD};
use temp_dir::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{ExportFile, FileService};
use crate::Error;

#[test]
fn save_decodes_content_and_writes_the_named_file() {
    let dir = TempDir::new().expect("temp dir");
    let file = ExportFile {
        name: "statistics.csv".to_string(),
        content: BASE64_STANDARD.encode("date,reads\n2026-08-01,120\n"),
    };

    let written = FileService::new()
        .save(&file, dir.path())
        .expect("save succeeds");

    assert_eq!(written.file_name().and_then(|n| n.to_str()), Some("statistics.csv"));
    let body = std::fs::read_to_string(written).expect("read back");
    assert!(body.starts_with("date,reads"));
}

#[test]
fn save_rejects_content_that_is_not_base64() {
    let dir = TempDir::new().expect("temp dir");
    let file = ExportFile {
        name: "broken.bin".to_string(),
        content: "!!! not base64 !!!".to_string(),
    };

    let result = FileService::new().save(&file, dir.path());
    assert!(matches!(result, Err(Error::Encoding(_))));
}

#[test]
fn size_check_compares_decoded_bytes() {
    let files = FileService::new();
    let content = BASE64_STANDARD.encode(vec![0_u8; 1024]);

    assert!(files.is_larger_than(&content, 1023).expect("valid base64"));
    assert!(!files.is_larger_than(&content, 1024).expect("valid base64"));
}

#[tokio::test]
async fn url_to_base64_encodes_the_fetched_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/logo.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"pngbytes".to_vec()))
        .mount(&mock_server)
        .await;

    let encoded = FileService::new()
        .url_to_base64(&format!("{}/logo.png", mock_server.uri()))
        .await
        .expect("download succeeds");

    assert_eq!(encoded, BASE64_STANDARD.encode("pngbytes"));
}

#[tokio::test]
async fn url_to_base64_surfaces_missing_assets() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = FileService::new()
        .url_to_base64(&format!("{}/gone.png", mock_server.uri()))
        .await;

    assert!(matches!(result, Err(Error::DownloadStatus(404))));
}
