//! Reading `config.toml` from an explicit path or the per-user location.

use crate::schema::LumenConfig;
use crate::validation;
use lumen_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse the TOML file at `path` into a `LumenConfig`.
///
/// Sections and keys the file leaves out keep their defaults. A missing
/// file is `FileNotFound` so the caller can decide whether to create one.
/// Out-of-range values are only logged here; `load_config` rejects them
/// after the `GEMINI_API_KEY` fallback has been applied.
pub fn load_from_path(path: &Path) -> Result<LumenConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: LumenConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config has invalid values: {e}");
    }

    info!(path = %path.display(), model = %config.provider.model, "config loaded");
    Ok(config)
}

/// Load `<config dir>/lumen/config.toml`.
///
/// On first run the commented template is written there and the built-in
/// defaults are returned, so a fresh install starts with an empty API key
/// and relies on `GEMINI_API_KEY`.
pub fn load_default() -> Result<LumenConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "first run, writing config template");
            create_default_config(&path)?;
            Ok(LumenConfig::default())
        }
        other => other,
    }
}
