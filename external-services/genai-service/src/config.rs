// Generation service configuration
use crate::error::{GenAiError, GenAiResult};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Generation service configuration
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// API credential, required at startup
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Endpoint base URL
    pub base_url: String,
    /// Upper bound on a single generation call, in seconds
    pub timeout_secs: u64,
}

impl GenAiConfig {
    /// Load generation configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError::MissingCredential`] when `GEMINI_API_KEY` is
    /// absent; the process must treat this as fatal at startup.
    pub fn from_env() -> GenAiResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| GenAiError::MissingCredential)?;

        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = std::env::var("GENAI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout_secs,
        })
    }

    /// Configuration with an explicit key, defaults elsewhere.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
