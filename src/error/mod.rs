// Error types for the cam2gpt relay

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("No image data received")]
    MissingImage,

    #[error("Upstream API error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

// Convert RelayError to HTTP responses for Axum.
//
// The caller-visible surface is deliberately narrow: a missing image is the
// only client error, and every upstream or transport failure collapses into
// one generic 500 body. Upstream error details are never relayed.
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RelayError::MissingImage => {
                (StatusCode::BAD_REQUEST, "No image data received.")
            }
            _ => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to process the image.")
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
