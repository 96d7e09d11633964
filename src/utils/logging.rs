//! Structured logging and security-focused trace utilities.
//!
//! Configures the `tracing` ecosystem for the application, supporting multiple
//! output formats and providing utilities to prevent sensitive data (like API
//! keys) from leaking into logs.

use crate::config::LoggingConfig;
use crate::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    // Configure filter from environment or config file
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

/// Sanitizes sensitive information from log messages.
///
/// Scans strings for OpenAI API key patterns (`sk-` prefixed secrets) and
/// bearer authorization values, replacing them with a redaction placeholder
/// so secrets are never persisted in log sinks.
pub fn sanitize(input: &str) -> String {
    let mut result = input.to_string();

    // Pattern 1: OpenAI API keys, which start with "sk-"
    if let Some(pos) = result.find("sk-") {
        let start = pos;
        // Search for the end of the key (delimiter or end of string)
        let end = result[start..].find(|c: char| c.is_whitespace() || c == '"' || c == '\'')
            .map(|i| start + i)
            .unwrap_or(result.len());
        result.replace_range(start..end, "[REDACTED_API_KEY]");
    }

    // Pattern 2: Bearer authorization values
    if let Some(pos) = result.find("Bearer ") {
        let start = pos + "Bearer ".len();
        let end = result[start..].find(|c: char| c.is_whitespace() || c == '"' || c == '\'')
            .map(|i| start + i)
            .unwrap_or(result.len());
        result.replace_range(start..end, "[REDACTED_CREDENTIAL]");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_api_key() {
        let input = "api_key: sk-proj-a0AfH6SMC...";
        let output = sanitize(input);
        assert!(output.contains("[REDACTED_API_KEY]"));
        assert!(!output.contains("sk-proj-a0AfH6SMC"));
    }

    #[test]
    fn test_sanitize_bearer_credential() {
        let input = "Authorization: Bearer some-opaque-secret";
        let output = sanitize(input);
        assert!(output.contains("[REDACTED_CREDENTIAL]"));
        assert!(!output.contains("some-opaque-secret"));
    }
}
