//! Full configuration validation.
//!
//! Validates numeric ranges and the provider endpoint, collecting every
//! problem into a single `ConfigError`.

mod helpers;


use crate::schema::LumenConfig;
use lumen_common::ConfigError;

use helpers::{validate_non_empty, validate_range};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LumenConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_provider(&mut errors, config);
    validate_range(
        &mut errors,
        "attachments.max_file_size_mb",
        config.attachments.max_file_size_mb,
        1,
        20,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_provider(errors: &mut Vec<String>, config: &LumenConfig) {
    let provider = &config.provider;
    validate_non_empty(errors, "provider.model", &provider.model);
    validate_non_empty(errors, "provider.base_url", &provider.base_url);
    if !provider.base_url.is_empty()
        && !(provider.base_url.starts_with("https://") || provider.base_url.starts_with("http://"))
    {
        errors.push(format!(
            "provider.base_url = {:?} must be an http(s) URL",
            provider.base_url
        ));
    }
    validate_range(errors, "provider.timeout_secs", provider.timeout_secs, 5, 600);
    validate_range(
        errors,
        "provider.connect_timeout_secs",
        provider.connect_timeout_secs,
        1,
        60,
    );
}
