// Proxy state and configuration
use mcp_server::{McpClient, McpResult};
use std::sync::Arc;
use tracing::info;

const DEFAULT_HTTP_PORT: u16 = 4000;
const DEFAULT_MCP_SERVER_BIN: &str = "prescribe-mcp";

/// Proxy configuration
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Port the HTTP listener binds
    pub http_port: u16,
    /// Command used to spawn the MCP server process
    pub mcp_command: String,
}

impl ProxyConfig {
    /// Load proxy configuration from environment variables.
    pub fn from_env() -> Self {
        let http_port = std::env::var("HTTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HTTP_PORT);

        let mcp_command = std::env::var("MCP_SERVER_BIN")
            .unwrap_or_else(|_| DEFAULT_MCP_SERVER_BIN.to_string());

        Self {
            http_port,
            mcp_command,
        }
    }
}

/// Shared proxy state: one long-lived MCP channel reused by every request.
#[derive(Clone)]
pub struct ProxyState {
    pub mcp: Arc<McpClient>,
}

impl ProxyState {
    /// Spawn the MCP server and establish the channel once.
    ///
    /// # Errors
    ///
    /// Fails when the server process cannot be spawned or refuses the
    /// initialize exchange; the proxy treats this as fatal at startup.
    pub async fn connect(config: &ProxyConfig) -> McpResult<Self> {
        let mcp = McpClient::spawn(&config.mcp_command, &[]).await?;
        info!(command = %config.mcp_command, "MCP server attached");
        Ok(Self { mcp: Arc::new(mcp) })
    }
}
