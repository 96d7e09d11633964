//! Axum-based HTTP server for the cam2gpt relay.
//!
//! This module sets up the HTTP server, configures routes, and handles the
//! inbound requests from the webcam frontend, forwarding each image to the
//! OpenAI vision API.
//!
//! # Components
//!
//! - `handlers`: Implementation of the individual endpoints (process_image, health).
//! - `middleware`: Custom tower/axum middleware for request ID tracking.
//! - `routes`: The main router configuration that ties everything together.

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState};
