use serde::{Deserialize, Serialize};

/// Limits applied before a selected file reaches the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentsConfig {
    /// Largest file accepted for attachment, in MiB (valid range: 1-20).
    pub max_file_size_mb: u32,
}

impl AttachmentsConfig {
    pub fn max_file_size_bytes(&self) -> u64 {
        u64::from(self.max_file_size_mb) * 1024 * 1024
    }
}

impl Default for AttachmentsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 5,
        }
    }
}
