//! Folding the provider's answer back into the transcript.

use tracing::{debug, warn};

use crate::turn::Turn;
use crate::{AiError, AiResponse, ChatError};

use super::manager::ConversationSession;

/// Shown when the provider answered without text or an error message.
pub const NO_RESPONSE_MESSAGE: &str = "No response or unexpected format from Gemini.";

impl ConversationSession {
    /// Apply the outcome of the network call for the in-flight turn.
    ///
    /// Only a non-empty reply touches the transcript. The in-flight flag is
    /// cleared whatever the outcome.
    pub fn reconcile(&mut self, result: Result<AiResponse, AiError>) -> Result<String, ChatError> {
        self.in_flight = false;

        match result {
            Ok(AiResponse {
                text: Some(text),
                usage,
                ..
            }) if !text.is_empty() => {
                debug!(
                    input_tokens = usage.input_tokens,
                    output_tokens = usage.output_tokens,
                    total_tokens = usage.total_tokens(),
                    "reply received"
                );
                self.commit_assistant_reply(text.clone());
                Ok(text)
            }
            Ok(response) => {
                let message = response
                    .error_message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| NO_RESPONSE_MESSAGE.to_string());
                warn!("provider returned no reply: {message}");
                Err(ChatError::Provider(message))
            }
            Err(e) => {
                warn!("provider call failed: {e}");
                Err(e.into())
            }
        }
    }

    /// Append an assistant turn holding `text`.
    pub fn commit_assistant_reply(&mut self, text: impl Into<String>) {
        self.transcript.push(Turn::assistant_text(text));
        self.in_flight = false;
        debug!(turns = self.transcript.len(), "assistant turn committed");
    }
}
