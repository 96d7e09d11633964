//! Configuration data structures for the relay server.
//!
//! Defines the schema for application settings: HTTP server parameters,
//! upstream OpenAI API settings, and logging.

use serde::{Deserialize, Serialize};

/// Placeholder used when no API key is configured. Upstream authentication
/// will fail and surface to callers as the generic 500 response.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_DEFAULT_API_KEY";

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port, workers).
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream OpenAI API settings.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `3000`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads for the Axum server.
    /// Default: Number of logical CPU cores.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Settings for the upstream OpenAI API connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// Base URL for the OpenAI API.
    /// Default: `https://api.openai.com/v1`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// API key presented as a bearer credential on every upstream call.
    /// Default: the `OPENAI_API_KEY` environment variable, read once at
    /// load time, or a placeholder value when unset.
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Vision-capable model used to describe images.
    /// Default: `gpt-4-vision-preview`
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum number of tokens the model may generate.
    /// Default: `300`
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Connection and request timeout in seconds.
    /// Default: `60`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl OpenAiConfig {
    /// True when no real credential was configured.
    pub fn is_placeholder_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY || self.api_key.is_empty()
    }
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to mask API keys and bearer credentials in logs.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub sanitize_tokens: bool,
}

// Default trait implementations linking to custom logic

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: default_api_key(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            sanitize_tokens: true,
        }
    }
}

// Helper functions for serde defaults and shared constants

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_api_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_api_key() -> String {
    std::env::var("OPENAI_API_KEY").unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string())
}

fn default_model() -> String {
    "gpt-4-vision-preview".to_string()
}

fn default_max_tokens() -> u32 {
    300
}

fn default_timeout() -> u64 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_defaults_match_upstream_contract() {
        let config = OpenAiConfig::default();
        assert_eq!(config.api_base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4-vision-preview");
        assert_eq!(config.max_tokens, 300);
    }

    #[test]
    fn test_placeholder_key_detection() {
        let mut config = OpenAiConfig::default();
        config.api_key = PLACEHOLDER_API_KEY.to_string();
        assert!(config.is_placeholder_key());

        config.api_key = "sk-test-key".to_string();
        assert!(!config.is_placeholder_key());
    }

    #[test]
    fn test_server_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }
}
