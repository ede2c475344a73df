// Server startup configuration
use crate::error::{McpError, McpResult};
use std::path::PathBuf;

const DEFAULT_LEDGER_PATH: &str = "past_prescriptions.txt";

/// Configuration required to start the MCP server.
///
/// Collected once in `main`; a missing required variable is a fatal startup
/// error, never a per-call one. The generation credential is validated
/// separately by `genai_service::GenAiConfig`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Patient directory connection string
    pub database_url: String,
    /// History ledger file path
    pub ledger_path: PathBuf,
}

impl ServerConfig {
    /// Load server configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`McpError::Config`] when `DATABASE_URL` is absent.
    pub fn from_env() -> McpResult<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| McpError::Config("Missing DATABASE_URL environment variable".to_string()))?;

        let ledger_path = std::env::var("PRESCRIPTION_LOG_PATH")
            .unwrap_or_else(|_| DEFAULT_LEDGER_PATH.to_string())
            .into();

        Ok(Self {
            database_url,
            ledger_path,
        })
    }
}
