//! Model listing, used as a connectivity and key check.

use serde::Deserialize;
use tracing::debug;

use crate::AiError;

use super::api::map_transport_error;
use super::client::GeminiClient;

/// A model that can serve `generateContent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    /// Resource name, e.g. `models/gemini-1.5-flash`.
    pub name: String,
    pub display_name: String,
}

impl ModelInfo {
    /// The name as accepted by `provider.model`.
    pub fn id(&self) -> &str {
        self.name.strip_prefix("models/").unwrap_or(&self.name)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawModel {
    name: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

impl GeminiClient {
    /// List the models this key may call `generateContent` on.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, AiError> {
        let url = format!("{}/models", self.config.base_url);
        debug!(%url, "listing Gemini models");

        let json: serde_json::Value = self
            .http
            .get(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .send()
            .await
            .map_err(map_transport_error)?
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        parse_model_list(json)
    }
}

pub(crate) fn parse_model_list(json: serde_json::Value) -> Result<Vec<ModelInfo>, AiError> {
    if let Some(message) = json["error"]["message"].as_str() {
        return Err(AiError::ApiError(message.to_string()));
    }

    let raw: Vec<RawModel> = match json.get("models") {
        Some(models) => serde_json::from_value(models.clone())
            .map_err(|e| AiError::ParseError(e.to_string()))?,
        None => Vec::new(),
    };

    Ok(raw
        .into_iter()
        .filter(|m| {
            m.supported_generation_methods
                .iter()
                .any(|method| method == "generateContent")
        })
        .map(|m| ModelInfo {
            name: m.name,
            display_name: m.display_name,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_only_generate_content_models() {
        let models = parse_model_list(json!({
            "models": [
                {
                    "name": "models/gemini-1.5-flash",
                    "displayName": "Gemini 1.5 Flash",
                    "supportedGenerationMethods": ["generateContent", "countTokens"]
                },
                {
                    "name": "models/text-embedding-004",
                    "displayName": "Text Embedding 004",
                    "supportedGenerationMethods": ["embedContent"]
                }
            ]
        }))
        .unwrap();

        assert_eq!(models.len(), 1);
        assert_eq!(models[0].id(), "gemini-1.5-flash");
        assert_eq!(models[0].display_name, "Gemini 1.5 Flash");
    }

    #[test]
    fn error_payload_is_api_error() {
        let err = parse_model_list(json!({
            "error": { "code": 403, "message": "Permission denied" }
        }))
        .unwrap_err();
        assert!(matches!(err, AiError::ApiError(ref m) if m == "Permission denied"));
    }

    #[test]
    fn missing_models_is_empty() {
        assert!(parse_model_list(json!({})).unwrap().is_empty());
    }
}
