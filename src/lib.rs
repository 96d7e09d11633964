// cam2gpt - Webcam snapshot to OpenAI Vision relay server

pub mod config;
pub mod error;
pub mod openai;
pub mod server;
pub mod utils;
