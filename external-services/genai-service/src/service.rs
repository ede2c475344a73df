// Generation client trait and Gemini implementation
use crate::config::GenAiConfig;
use crate::error::{GenAiError, GenAiResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Opaque text-completion capability.
///
/// The prescription workflow only ever sees this trait; which model runs
/// behind it is deployment configuration.
#[async_trait]
pub trait GenAiClient: Send + Sync {
    /// Generate a completion for the given prompt.
    ///
    /// # Errors
    ///
    /// Any transport, authentication, or service-side failure. Callers
    /// treat these as upstream errors; no retry is attempted here.
    async fn complete(&self, prompt: &str) -> GenAiResult<String>;
}

/// Gemini `generateContent` request payload
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Gemini `generateContent` response payload
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("");
        Some(text)
    }
}

/// Gemini REST client
pub struct GeminiClient {
    config: GenAiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: GenAiConfig) -> GenAiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(model = %config.model, "Generation client initialized");

        Ok(Self { config, http })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl GenAiClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> GenAiResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(prompt_len = prompt.len(), "Dispatching generation request");

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        payload.text().ok_or(GenAiError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_joins_first_candidate_parts() {
        let payload: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Paracetamol "},{"text":"500mg"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(payload.text().unwrap(), "Paracetamol 500mg");
    }

    #[test]
    fn empty_candidate_set_yields_none() {
        let payload: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(payload.text().is_none());

        let payload: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(payload.text().is_none());
    }

    #[test]
    fn endpoint_embeds_configured_model() {
        let client = GeminiClient::new(GenAiConfig::with_api_key("k")).unwrap();
        assert!(client.endpoint().ends_with("/models/gemini-1.5-flash:generateContent"));
    }
}
