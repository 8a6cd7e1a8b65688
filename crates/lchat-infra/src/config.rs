//! Configuration loader for lchat.
//!
//! Sources, lowest priority first:
//! 1. compiled-in defaults ([`ChatConfig::default()`])
//! 2. `config.toml` in the data directory, or an explicit `--config` path
//! 3. `LCHAT_*` environment variables
//!
//! CLI flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use lchat_types::config::ChatConfig;
use lchat_types::error::ConfigError;

/// File name looked up inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const ENV_DATA_DIR: &str = "LCHAT_DATA_DIR";
pub const ENV_ENDPOINT: &str = "LCHAT_ENDPOINT";
pub const ENV_MODEL: &str = "LCHAT_MODEL";
pub const ENV_MAX_HISTORY: &str = "LCHAT_MAX_HISTORY";
pub const ENV_MAX_TOKENS: &str = "LCHAT_MAX_TOKENS";
pub const ENV_TEMPERATURE: &str = "LCHAT_TEMPERATURE";
pub const ENV_STOP: &str = "LCHAT_STOP";
pub const ENV_TIMEOUT_SECS: &str = "LCHAT_TIMEOUT_SECS";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `LCHAT_DATA_DIR` environment variable
/// 2. `~/.lchat`
/// 3. `.lchat` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".lchat");
    }

    PathBuf::from(".lchat")
}

/// Load the full configuration: file, then environment overrides.
///
/// With `explicit_path` set, a missing or malformed file is an error. The
/// default `{data_dir}/config.toml` is optional and falls back to defaults.
pub async fn load_chat_config(explicit_path: Option<&Path>) -> Result<ChatConfig, ConfigError> {
    let mut config = match explicit_path {
        Some(path) => read_config_file(path).await?,
        None => load_config_or_default(&resolve_data_dir().join(CONFIG_FILE_NAME)).await,
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

/// Read and parse a config file, reporting every failure.
pub async fn read_config_file(path: &Path) -> Result<ChatConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    toml::from_str::<ChatConfig>(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`ChatConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
pub async fn load_config_or_default(path: &Path) -> ChatConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return ChatConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ChatConfig::default();
        }
    };

    match toml::from_str::<ChatConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ChatConfig::default()
        }
    }
}

/// Apply `LCHAT_*` overrides from `lookup` (usually `std::env::var`).
///
/// Values that fail to parse are ignored with a warning.
pub fn apply_env_overrides<F>(config: &mut ChatConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(endpoint) = lookup(ENV_ENDPOINT) {
        config.endpoint = endpoint;
    }
    if let Some(model) = lookup(ENV_MODEL) {
        config.model = model;
    }
    if let Some(pairs) = parse_env(&lookup, ENV_MAX_HISTORY) {
        config.max_history_pairs = pairs;
    }
    if let Some(max_tokens) = parse_env(&lookup, ENV_MAX_TOKENS) {
        config.max_tokens = max_tokens;
    }
    if let Some(temperature) = parse_env(&lookup, ENV_TEMPERATURE) {
        config.temperature = temperature;
    }
    if let Some(stop) = lookup(ENV_STOP) {
        config.stop_tokens = stop
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }
    if let Some(secs) = parse_env(&lookup, ENV_TIMEOUT_SECS) {
        config.request_timeout_secs = Some(secs);
    }
}

fn parse_env<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("Ignoring {key}={raw:?}: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config_or_default(&tmp.path().join(CONFIG_FILE_NAME)).await;
        assert_eq!(config, ChatConfig::default());
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(CONFIG_FILE_NAME);
        tokio::fs::write(
            &config_path,
            r#"
model = "mistral"
max_history_pairs = 2
"#,
        )
        .await
        .unwrap();

        let config = load_config_or_default(&config_path).await;
        assert_eq!(config.model, "mistral");
        assert_eq!(config.max_history_pairs, 2);
        assert_eq!(config.max_tokens, 500);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(CONFIG_FILE_NAME);
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config_or_default(&config_path).await;
        assert_eq!(config, ChatConfig::default());
    }

    #[tokio::test]
    async fn read_config_file_reports_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = read_config_file(&tmp.path().join("nope.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[tokio::test]
    async fn read_config_file_reports_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.toml");
        tokio::fs::write(&config_path, "max_tokens = \"lots\"").await.unwrap();

        let err = read_config_file(&config_path).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[tokio::test]
    async fn load_chat_config_explicit_missing_path_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.toml");
        assert!(load_chat_config(Some(&missing)).await.is_err());
    }

    #[test]
    fn env_overrides_replace_values() {
        let mut config = ChatConfig::default();
        apply_env_overrides(
            &mut config,
            env(&[
                (ENV_ENDPOINT, "http://other:9000/v1/completions"),
                (ENV_MODEL, "phi3"),
                (ENV_MAX_HISTORY, "8"),
                (ENV_MAX_TOKENS, "128"),
                (ENV_TEMPERATURE, "0.1"),
                (ENV_STOP, "###, User:,"),
                (ENV_TIMEOUT_SECS, "15"),
            ]),
        );

        assert_eq!(config.endpoint, "http://other:9000/v1/completions");
        assert_eq!(config.model, "phi3");
        assert_eq!(config.max_history_pairs, 8);
        assert_eq!(config.max_tokens, 128);
        assert_eq!(config.temperature, 0.1);
        assert_eq!(config.stop_tokens, vec!["###", "User:"]);
        assert_eq!(config.request_timeout_secs, Some(15));
    }

    #[test]
    fn env_overrides_ignore_unparseable_numbers() {
        let mut config = ChatConfig::default();
        apply_env_overrides(
            &mut config,
            env(&[(ENV_MAX_HISTORY, "many"), (ENV_TEMPERATURE, "warm")]),
        );
        assert_eq!(config.max_history_pairs, 5);
        assert_eq!(config.temperature, 0.7);
    }

    #[test]
    fn env_overrides_absent_keep_defaults() {
        let mut config = ChatConfig::default();
        apply_env_overrides(&mut config, env(&[]));
        assert_eq!(config, ChatConfig::default());
    }
}
