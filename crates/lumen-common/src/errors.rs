use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure to turn a local file into an attachment.
#[derive(Debug, thiserror::Error)]
pub enum LumenError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("attachment error: {0}")]
    Attachment(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("provider.timeout_secs out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: provider.timeout_secs out of range"
        );
    }

    #[test]
    fn lumen_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "photo.png missing");
        let err: LumenError = io_err.into();
        assert!(matches!(err, LumenError::Io(_)));
        assert!(err.to_string().contains("photo.png missing"));
    }

    #[test]
    fn attachment_error_display() {
        let err = LumenError::Attachment("file too large".into());
        assert_eq!(err.to_string(), "attachment error: file too large");
    }
}
