//! Upstream OpenAI API integration.
//!
//! # Components
//!
//! - `client`: The HTTP client that performs the single outbound call per request.
//! - `models`: Serde wire types for the chat-completions vision request.

mod client;
pub mod models;

pub use client::OpenAiClient;
