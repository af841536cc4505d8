//! Chat engine for Lumen.
//!
//! Provides:
//! - A `ConversationSession` that stages attachments, composes user turns
//!   and reconciles provider replies with the transcript
//! - The `AiClient` seam for the network collaborator
//! - A Gemini `generateContent` client implementing it

pub mod attachment;
pub mod gemini;
pub mod session;
pub mod turn;

use async_trait::async_trait;

pub use attachment::{AttachmentKind, AttachmentState, ReadTicket, SelectedFile};
pub use gemini::{GeminiClient, GeminiConfig, ModelInfo};
pub use session::{ChatView, Composition, ConversationSession, SubmitOutcome};
pub use turn::{Role, Segment, Turn};

/// Network collaborator: sends the whole transcript, returns the parsed reply.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send(&self, transcript: &[Turn]) -> Result<AiResponse, AiError>;
}

/// What the provider answered. A response with no `text` is still a
/// successful exchange at the transport level; the session decides what
/// it means.
#[derive(Debug, Clone, Default)]
pub struct AiResponse {
    pub text: Option<String>,
    /// Error message reported in the provider's payload, if any.
    pub error_message: Option<String>,
    pub usage: TokenUsage,
}

impl AiResponse {
    pub fn reply(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// Failures of the network collaborator itself.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("not configured: {0}")]
    NotConfigured(String),
    /// The provider rejected the request with an error payload.
    #[error("API error: {0}")]
    ApiError(String),
    #[error("network error: {0}")]
    NetworkError(String),
    #[error("parse error: {0}")]
    ParseError(String),
    #[error("request timed out")]
    Timeout,
}

/// Errors surfaced to the user. None of them end the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The selected file does not match the attachment policy.
    #[error("{0}")]
    Validation(String),
    /// The provider answered with an error payload or an empty reply.
    #[error("{0}")]
    Provider(String),
    /// The provider could not be reached or its answer could not be read.
    #[error("Failed to connect to Gemini: {0}")]
    Transport(String),
}

impl From<AiError> for ChatError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::NotConfigured(msg) | AiError::ApiError(msg) => ChatError::Provider(msg),
            other => ChatError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display_names_cause() {
        let err: ChatError = AiError::NetworkError("connection refused".into()).into();
        assert!(matches!(err, ChatError::Transport(_)));
        assert_eq!(
            err.to_string(),
            "Failed to connect to Gemini: network error: connection refused"
        );
    }

    #[test]
    fn timeout_is_transport() {
        let err: ChatError = AiError::Timeout.into();
        assert_eq!(err, ChatError::Transport("request timed out".into()));
    }

    #[test]
    fn not_configured_is_provider_error() {
        let err: ChatError = AiError::NotConfigured("missing key".into()).into();
        assert_eq!(err, ChatError::Provider("missing key".into()));
    }

    #[test]
    fn api_error_keeps_provider_message() {
        let err: ChatError = AiError::ApiError("API key not valid.".into()).into();
        assert_eq!(err.to_string(), "API key not valid.");
    }

    #[test]
    fn usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 1,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }
}
