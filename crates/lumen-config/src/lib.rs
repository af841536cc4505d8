//! Lumen configuration system.
//!
//! Provides TOML-based configuration for the Gemini provider, attachment
//! limits and logging. All config sections use sensible defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lumen_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::LumenConfig;

use lumen_common::ConfigError;
use std::path::Path;

/// Environment variable consulted when `provider.api_key` is empty.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Load config from `path` if given, otherwise from the platform default.
///
/// An empty `provider.api_key` is filled from `GEMINI_API_KEY`, and the
/// result is validated.
pub fn load_config(path: Option<&Path>) -> Result<LumenConfig, ConfigError> {
    let mut config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Fill an empty `provider.api_key` from `GEMINI_API_KEY`.
pub fn apply_env_overrides(config: &mut LumenConfig) {
    if config.provider.api_key.trim().is_empty() {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            tracing::debug!("using api key from {API_KEY_ENV}");
            config.provider.api_key = key;
        }
    }
}

/// Serialize a config to a pretty-printed JSON string with the key masked.
pub fn config_to_json(config: &LumenConfig) -> String {
    let mut redacted = config.clone();
    if !redacted.provider.api_key.is_empty() {
        redacted.provider.api_key = "[REDACTED]".into();
    }
    serde_json::to_string_pretty(&redacted)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = LumenConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"provider\""));
        assert!(json.contains("\"attachments\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"gemini-1.5-flash\""));
    }

    #[test]
    fn config_to_json_masks_api_key() {
        let mut config = LumenConfig::default();
        config.provider.api_key = "AIzaSecretValue".into();
        let json = config_to_json(&config);
        assert!(!json.contains("AIzaSecretValue"));
        assert!(json.contains("[REDACTED]"));
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[provider]
api_key = "from-file"
model = "gemini-1.5-pro"
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.provider.api_key, "from-file");
        assert_eq!(config.provider.model, "gemini-1.5-pro");
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[provider]
api_key = "k"
timeout_secs = 0
"#,
        )
        .unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("provider.timeout_secs"));
    }
}
