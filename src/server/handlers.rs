// HTTP request handlers

use super::routes::AppState;
use crate::error::RelayError;
use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::{extract::State, response::Response, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Inbound body for `POST /process_image`. A missing `image` field is
/// coalesced to an empty string and rejected by the handler.
#[derive(Debug, Deserialize)]
pub struct ProcessImageRequest {
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    // Check API credential
    let credential_check = if state.config.openai.is_placeholder_key() {
        overall_status = HealthStatus::Degraded;
        HealthCheck {
            status: "warning".to_string(),
            message: "No API key configured; upstream calls will fail".to_string(),
        }
    } else {
        HealthCheck {
            status: "ok".to_string(),
            message: "API key configured".to_string(),
        }
    };
    checks.insert("credential".to_string(), credential_check);

    // Check configuration
    let config_check = HealthCheck {
        status: "ok".to_string(),
        message: format!("API base: {}", state.config.openai.api_base_url),
    };
    checks.insert("configuration".to_string(), config_check);

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for the `/process_image` relay endpoint.
///
/// Validates that an image payload is present, forwards it upstream with the
/// fixed describe prompt, and relays the upstream success body byte-for-byte.
/// No outbound call is made when the payload is missing or empty.
pub async fn process_image_handler(
    State(state): State<AppState>,
    Json(req): Json<ProcessImageRequest>,
) -> Result<Response, RelayError> {
    if req.image.is_empty() {
        warn!("Rejected request with no image data");
        return Err(RelayError::MissingImage);
    }

    info!("Processing image ({} base64 chars)", req.image.len());

    let upstream_body = state.openai_client.describe_image(&req.image).await?;

    debug!("Relaying {} byte upstream response", upstream_body.len());

    // Upstream body is relayed verbatim; no re-serialization.
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(upstream_body))
        .map_err(|e| RelayError::Internal(format!("Failed to build response: {}", e)))
}
