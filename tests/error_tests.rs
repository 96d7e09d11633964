// Error handling tests

use axum::http::StatusCode;
use axum::response::IntoResponse;
use cam2gpt::error::RelayError;
use http_body_util::BodyExt;
use serde_json::{json, Value};

async fn response_parts(error: RelayError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_error_display_messages() {
    let errors = vec![
        RelayError::MissingImage,
        RelayError::Upstream("HTTP 500".to_string()),
        RelayError::Config("bad config".to_string()),
        RelayError::Internal("boom".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[tokio::test]
async fn test_missing_image_maps_to_400() {
    let (status, body) = response_parts(RelayError::MissingImage).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No image data received." }));
}

#[tokio::test]
async fn test_upstream_error_maps_to_generic_500() {
    let (status, body) =
        response_parts(RelayError::Upstream("HTTP 429: quota exceeded".to_string())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to process the image." }));
}

#[tokio::test]
async fn test_internal_error_maps_to_generic_500() {
    let (status, body) = response_parts(RelayError::Internal("boom".to_string())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to process the image." }));
}

#[test]
fn test_upstream_error_display_carries_detail() {
    let error = RelayError::Upstream("HTTP 503".to_string());
    assert!(format!("{}", error).contains("HTTP 503"));
}
