//! Chat client configuration.
//!
//! `ChatConfig` is what `config.toml` deserializes into. Every field has a
//! default, so an empty file (or no file at all) yields a working setup
//! pointed at a local Ollama-style endpoint.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest accepted `max_history_pairs`.
pub const MAX_HISTORY_PAIRS_LIMIT: usize = 10_000;

/// Top-level configuration for the chat client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Completion endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Number of user/assistant pairs kept in history.
    #[serde(default = "default_max_history_pairs")]
    pub max_history_pairs: usize,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Stop sequences passed to the endpoint.
    #[serde(default = "default_stop_tokens")]
    pub stop_tokens: Vec<String>,

    /// Optional request timeout. `None` waits forever.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Spinner frame interval.
    #[serde(default = "default_spinner_interval_ms")]
    pub spinner_interval_ms: u64,
}

fn default_endpoint() -> String {
    "http://localhost:11434/v1/completions".to_string()
}

fn default_model() -> String {
    "llama3".to_string()
}

fn default_max_history_pairs() -> usize {
    5
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f64 {
    0.7
}

fn default_stop_tokens() -> Vec<String> {
    vec!["User:".to_string(), "Assistant:".to_string()]
}

fn default_spinner_interval_ms() -> u64 {
    80
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            max_history_pairs: default_max_history_pairs(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            stop_tokens: default_stop_tokens(),
            request_timeout_secs: None,
            spinner_interval_ms: default_spinner_interval_ms(),
        }
    }
}

impl ChatConfig {
    /// Maximum number of exchange lines the history may hold.
    pub fn history_capacity(&self) -> usize {
        self.max_history_pairs.saturating_mul(2)
    }

    /// Check the merged configuration before the session starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint must not be empty".into()));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::Invalid("model must not be empty".into()));
        }
        if self.max_history_pairs == 0 {
            return Err(ConfigError::Invalid(
                "max_history_pairs must be at least 1".into(),
            ));
        }
        if self.max_history_pairs > MAX_HISTORY_PAIRS_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_history_pairs must be at most {MAX_HISTORY_PAIRS_LIMIT}, got {}",
                self.max_history_pairs
            )));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::Invalid("max_tokens must be at least 1".into()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Invalid(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }
        if self.spinner_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "spinner_interval_ms must be at least 1".into(),
            ));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be at least 1 when set".into(),
            ));
        }
        Ok(())
    }
}
