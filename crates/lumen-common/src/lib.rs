pub mod errors;
pub mod id;

pub use errors::{ConfigError, LumenError};
pub use id::SessionId;
