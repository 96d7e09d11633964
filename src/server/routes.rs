// HTTP routes configuration

use super::handlers::{health_handler, process_image_handler};
use super::middleware::request_id_layers;
use crate::config::AppConfig;
use crate::error::Result;
use crate::openai::OpenAiClient;
use axum::{routing::{get, post}, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub openai_client: Arc<OpenAiClient>,
}

pub fn create_router(config: AppConfig, openai_client: OpenAiClient) -> Result<Router> {
    let state = AppState {
        config,
        openai_client: Arc::new(openai_client),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/process_image", post(process_image_handler))
        // Allow large request bodies for base64-encoded images
        // 7MB JPEG = ~9.5MB base64, so allow up to 50MB to be safe
        .layer(tower_http::limit::RequestBodyLimitLayer::new(50 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
