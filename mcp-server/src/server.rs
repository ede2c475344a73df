//! MCP server implementation
//!
//! Newline-delimited JSON-RPC over stdio. Each request is handled in its own
//! task so one slow generation call never blocks unrelated calls; responses
//! funnel through a single writer task, which keeps message boundaries
//! intact on stdout. Logging goes to stderr because stdout is the protocol
//! channel.
use crate::error::McpResult;
use crate::protocol::{error_codes, methods, McpRequest, McpResponse, ToolInput};
use crate::registry::ToolRegistry;
use crate::tools::{ServiceContext, ToolDispatcher};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// MCP server
#[derive(Clone)]
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    dispatcher: Arc<ToolDispatcher>,
}

impl McpServer {
    /// Create a server around an explicitly constructed service context.
    pub fn new(ctx: ServiceContext) -> Self {
        info!("Initializing MCP server");

        let registry = Arc::new(ToolRegistry::new());
        let dispatcher = Arc::new(ToolDispatcher::new(Arc::clone(&registry), Arc::new(ctx)));

        Self {
            registry,
            dispatcher,
        }
    }

    /// Run the server, reading requests from stdin and writing responses to
    /// stdout until stdin closes.
    ///
    /// # Errors
    ///
    /// Returns an error only when stdin itself fails; per-request faults are
    /// answered in-band.
    pub async fn run(&self) -> McpResult<()> {
        let stdin = tokio::io::stdin();
        let mut lines = BufReader::new(stdin).lines();

        let (tx, mut rx) = mpsc::channel::<String>(64);
        let writer = tokio::spawn(async move {
            let mut stdout = tokio::io::stdout();
            while let Some(line) = rx.recv().await {
                if stdout.write_all(line.as_bytes()).await.is_err()
                    || stdout.write_all(b"\n").await.is_err()
                    || stdout.flush().await.is_err()
                {
                    break;
                }
            }
        });

        info!("MCP server ready, waiting for requests");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let server = self.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let Some(response) = server.handle_request(&line).await else {
                    return;
                };
                match serde_json::to_string(&response) {
                    Ok(serialized) => {
                        let _ = tx.send(serialized).await;
                    }
                    Err(e) => error!(error = %e, "Failed to serialize response"),
                }
            });
        }

        drop(tx);
        let _ = writer.await;

        info!("MCP server shutting down");
        Ok(())
    }

    /// Handle a single JSON-RPC request line.
    ///
    /// Returns `None` for notifications, which take no response.
    pub async fn handle_request(&self, input: &str) -> Option<McpResponse> {
        let request: McpRequest = match serde_json::from_str(input) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Failed to parse request");
                return Some(McpResponse::error(
                    None,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {e}"),
                ));
            }
        };

        if request.jsonrpc != "2.0" {
            return Some(McpResponse::error(
                request.id,
                error_codes::INVALID_REQUEST,
                "Invalid JSON-RPC version",
            ));
        }

        let is_notification = request.id.is_none();
        let id = request.id.clone();
        debug!(method = %request.method, "Handling MCP request");

        let response = match request.method.as_str() {
            methods::INITIALIZE => McpResponse::success(id, self.initialize_payload()),
            methods::LIST_TOOLS => {
                McpResponse::success(id, serde_json::json!({ "tools": self.registry.list() }))
            }
            methods::CALL_TOOL => {
                let input: ToolInput = match serde_json::from_value(request.params) {
                    Ok(input) => input,
                    Err(e) => {
                        return Some(McpResponse::error(
                            id,
                            error_codes::INVALID_PARAMS,
                            format!("Invalid tool call parameters: {e}"),
                        ))
                    }
                };
                let result = self.dispatcher.dispatch(input).await;
                match serde_json::to_value(result) {
                    Ok(value) => McpResponse::success(id, value),
                    Err(e) => McpResponse::error(
                        id,
                        error_codes::INTERNAL_ERROR,
                        format!("Failed to serialize tool result: {e}"),
                    ),
                }
            }
            other => McpResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Unknown method: {other}"),
            ),
        };

        if is_notification {
            debug!("Notification handled, no response needed");
            return None;
        }
        Some(response)
    }

    fn initialize_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "protocol_version": "2024-11-05",
            "server_info": {
                "name": "prescribe-mcp",
                "version": env!("CARGO_PKG_VERSION")
            },
            "capabilities": {
                "tools": {}
            }
        })
    }
}
