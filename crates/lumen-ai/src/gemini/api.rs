//! AiClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::turn::Turn;
use crate::{AiClient, AiError, AiResponse};

use super::client::GeminiClient;

#[async_trait]
impl AiClient for GeminiClient {
    async fn send(&self, transcript: &[Turn]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(transcript);
        let url = self.api_url();

        debug!(model = %self.config.model, turns = transcript.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Gemini API returned an error status");
        }

        // Error statuses still carry a JSON payload with the reason.
        let json: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                AiError::Timeout
            } else {
                AiError::ParseError(e.to_string())
            }
        })?;

        let parsed = self.parse_response(&json);
        debug!(
            status = status.as_u16(),
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            "Gemini API response"
        );
        Ok(parsed)
    }
}

pub(crate) fn map_transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}
