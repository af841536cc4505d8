//! Configuration schema types for Lumen.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod attachments;
mod provider;
mod system;

pub use attachments::*;
pub use provider::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Lumen.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LumenConfig {
    pub provider: ProviderConfig,
    pub attachments: AttachmentsConfig,
    pub logging: LoggingConfig,
}
