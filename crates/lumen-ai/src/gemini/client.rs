//! Gemini API client struct, request building, and response parsing.

use crate::turn::{Role, Segment, Turn};
use crate::{AiError, AiResponse, TokenUsage};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        if config.api_key.trim().is_empty() {
            return Err(AiError::NotConfigured(
                "Gemini API key missing. Set provider.api_key in the config file \
                 or the GEMINI_API_KEY environment variable."
                    .into(),
            ));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, transcript: &[Turn]) -> serde_json::Value {
        let contents: Vec<_> = transcript
            .iter()
            .map(|turn| {
                let role = match turn.role() {
                    Role::User => "user",
                    Role::Assistant => "model",
                };
                let parts: Vec<_> = turn.segments().iter().map(part_json).collect();
                serde_json::json!({ "role": role, "parts": parts })
            })
            .collect();

        serde_json::json!({ "contents": contents })
    }

    /// Parse a Gemini response body.
    ///
    /// The body is read whatever the HTTP status: error payloads carry a
    /// message under `error.message` that the user should see.
    pub(crate) fn parse_response(&self, json: &serde_json::Value) -> AiResponse {
        let text = json["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<String>()
            })
            .filter(|t| !t.is_empty());

        let error_message = json["error"]["message"].as_str().map(str::to_string);

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        AiResponse {
            text,
            error_message,
            usage,
        }
    }
}

fn part_json(segment: &Segment) -> serde_json::Value {
    match segment {
        Segment::Text { value } => serde_json::json!({ "text": value }),
        Segment::InlineBinary { mime_type, data } => serde_json::json!({
            "inlineData": { "mimeType": mime_type, "data": data }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> GeminiClient {
        GeminiClient::new(GeminiConfig::new("test-key").with_base_url("http://localhost:9/v1beta"))
            .unwrap()
    }

    #[test]
    fn missing_key_is_not_configured() {
        let err = GeminiClient::new(GeminiConfig::new("  ")).err().unwrap();
        assert!(matches!(err, AiError::NotConfigured(_)));
    }

    #[test]
    fn url_targets_generate_content() {
        assert_eq!(
            client().api_url(),
            "http://localhost:9/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn request_maps_roles_and_parts() {
        let image = Turn::new(
            Role::User,
            vec![
                Segment::text("what is this?"),
                Segment::inline_binary("image/png", "iVBORw0K"),
            ],
        )
        .unwrap();
        let transcript = vec![
            Turn::user_text("Hello"),
            Turn::assistant_text("Hi there"),
            image,
        ];

        let body = client().build_request_body(&transcript);
        assert_eq!(
            body,
            json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "Hello" }] },
                    { "role": "model", "parts": [{ "text": "Hi there" }] },
                    { "role": "user", "parts": [
                        { "text": "what is this?" },
                        { "inlineData": { "mimeType": "image/png", "data": "iVBORw0K" } }
                    ]}
                ]
            })
        );
    }

    #[test]
    fn parses_reply_text_and_usage() {
        let body = json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Hi there" }] }
            }],
            "usageMetadata": { "promptTokenCount": 4, "candidatesTokenCount": 3 }
        });

        let response = client().parse_response(&body);
        assert_eq!(response.text.as_deref(), Some("Hi there"));
        assert!(response.error_message.is_none());
        assert_eq!(response.usage.total_tokens(), 7);
    }

    #[test]
    fn joins_split_text_parts() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hi " }, { "text": "there" }] }
            }]
        });
        assert_eq!(
            client().parse_response(&body).text.as_deref(),
            Some("Hi there")
        );
    }

    #[test]
    fn parses_error_payload() {
        let body = json!({
            "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
        });

        let response = client().parse_response(&body);
        assert!(response.text.is_none());
        assert_eq!(response.error_message.as_deref(), Some("API key not valid."));
    }

    #[test]
    fn unexpected_shape_has_no_text() {
        let response = client().parse_response(&json!({ "candidates": [] }));
        assert!(response.text.is_none());
        assert!(response.error_message.is_none());

        let response = client().parse_response(&json!({
            "candidates": [{ "content": { "parts": [{ "text": "" }] } }]
        }));
        assert!(response.text.is_none());
    }
}
