// src/llm/gemini.rs
// Generative-language gateway using the Google AI API

use anyhow::{Result, anyhow};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::{AiError, AiResult};
use crate::config::CONFIG;

/// Substituted when a 2xx body parses but carries no generated text.
/// Degrade-to-message policy: the caller still gets displayable output.
const NO_RESPONSE_FALLBACK: &str = "No response found";

/// Client for the `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Result<Self> {
        if api_key.is_empty() {
            return Err(anyhow!("Google API key is required"));
        }

        Ok(GeminiClient {
            client: Client::builder()
                .timeout(CONFIG.http_timeout_secs())
                .build()?,
            api_key,
            base_url,
            model,
        })
    }

    /// Construct from the global config.
    pub fn from_config() -> Result<Self> {
        Self::new(
            CONFIG.gemini_api_key.clone(),
            CONFIG.gemini_base_url.clone(),
            CONFIG.gemini_model.clone(),
        )
    }

    /// Build the API URL for a given method
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.base_url, self.model, method, self.api_key
        )
    }

    /// Send a prompt and return the generated text.
    ///
    /// Non-2xx statuses and transport failures surface as typed errors; they
    /// are never folded into the returned text.
    pub async fn generate(&self, prompt: &str) -> AiResult<String> {
        debug!("Sending {}-char prompt to {}", prompt.len(), self.model);

        let request_body = serde_json::json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }]
        });

        let response = self
            .client
            .post(self.api_url("generateContent"))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(AiError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Gemini API returned {}: {}", status, error_text);
            return Err(AiError::UpstreamError {
                status: status.as_u16(),
            });
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|_| AiError::MalformedResponse)?;

        Ok(extract_generated_text(&response_body)
            .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string()))
    }
}

/// Walk `candidates[0].content.parts[0].text` out of a response body.
fn extract_generated_text(response: &Value) -> Option<String> {
    response
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(|t| t.as_str())
        .map(|t| t.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_text_from_well_formed_response() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "1. Inception\n2. Looper"}]
                }
            }]
        });
        assert_eq!(
            extract_generated_text(&body).as_deref(),
            Some("1. Inception\n2. Looper")
        );
    }

    #[test]
    fn missing_candidates_yields_none() {
        assert_eq!(extract_generated_text(&json!({})), None);
    }

    #[test]
    fn missing_parts_yields_none() {
        let body = json!({
            "candidates": [{"content": {}}]
        });
        assert_eq!(extract_generated_text(&body), None);
    }

    #[test]
    fn non_string_text_yields_none() {
        let body = json!({
            "candidates": [{
                "content": {"parts": [{"text": 42}]}
            }]
        });
        assert_eq!(extract_generated_text(&body), None);
    }

    #[test]
    fn empty_key_is_rejected_at_construction() {
        let result = GeminiClient::new(
            String::new(),
            "https://example.invalid".to_string(),
            "gemini-2.0-flash".to_string(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn api_url_embeds_model_and_key() {
        let client = GeminiClient::new(
            "test-key".to_string(),
            "https://example.invalid/v1beta".to_string(),
            "gemini-2.0-flash".to_string(),
        )
        .unwrap();
        assert_eq!(
            client.api_url("generateContent"),
            "https://example.invalid/v1beta/models/gemini-2.0-flash:generateContent?key=test-key"
        );
    }
}
