//! MCP client over a spawned server process
//!
//! The client side of the transport binding: spawns the server binary,
//! speaks newline-delimited JSON-RPC over its stdio, and correlates
//! responses to pending requests by id. Multiple calls may be in flight at
//! once over the one long-lived connection; a slow call never blocks an
//! unrelated one.
use crate::error::{McpError, McpResult};
use crate::protocol::{methods, McpRequest, McpResponse, ToolDescriptor, ToolInput, ToolResult};
use std::collections::HashMap;
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, Command};
use tokio::sync::{oneshot, Mutex};
use tracing::{debug, info, warn};
use uuid::Uuid;

type PendingMap = Arc<Mutex<HashMap<String, oneshot::Sender<McpResponse>>>>;

/// MCP client holding one spawned server process.
pub struct McpClient {
    // Held so the server lives as long as the client; killed on drop.
    _child: Child,
    stdin: Mutex<ChildStdin>,
    pending: PendingMap,
}

impl McpClient {
    /// Spawn the server process and establish the channel.
    ///
    /// Connection setup happens once: the `initialize` exchange runs before
    /// this returns, and every subsequent tool call reuses the channel.
    ///
    /// # Errors
    ///
    /// Fails when the process cannot be spawned, its stdio cannot be wired
    /// up, or the initialize exchange fails.
    pub async fn spawn(command: &str, args: &[String]) -> McpResult<Self> {
        let mut child = Command::new(command)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| McpError::Transport(format!("Failed to spawn {command}: {e}")))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| McpError::Transport("Server stdin unavailable".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| McpError::Transport("Server stdout unavailable".to_string()))?;

        let pending: PendingMap = Arc::new(Mutex::new(HashMap::new()));
        let routing = Arc::clone(&pending);

        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if line.trim().is_empty() {
                    continue;
                }
                let response: McpResponse = match serde_json::from_str(&line) {
                    Ok(response) => response,
                    Err(e) => {
                        warn!(error = %e, "Discarding unparseable server line");
                        continue;
                    }
                };
                let Some(id) = response.id.clone() else {
                    debug!("Discarding response without id");
                    continue;
                };
                match routing.lock().await.remove(&id) {
                    Some(sender) => {
                        let _ = sender.send(response);
                    }
                    None => warn!(id = %id, "No pending request for response"),
                }
            }
            // Server went away: dropping the senders wakes every waiter
            // with a transport error.
            routing.lock().await.clear();
            debug!("Server stdout closed");
        });

        let client = Self {
            _child: child,
            stdin: Mutex::new(stdin),
            pending,
        };

        client.request(methods::INITIALIZE, serde_json::json!({})).await?;
        info!(command = command, "MCP channel established");

        Ok(client)
    }

    /// Fetch the server's tool catalog.
    ///
    /// # Errors
    ///
    /// Transport or protocol failures.
    pub async fn list_tools(&self) -> McpResult<Vec<ToolDescriptor>> {
        let result = self.request(methods::LIST_TOOLS, serde_json::json!({})).await?;
        let tools = result
            .get("tools")
            .cloned()
            .ok_or_else(|| McpError::Protocol("tools/list result missing tools".to_string()))?;
        Ok(serde_json::from_value(tools)?)
    }

    /// Invoke one tool and return its result envelope.
    ///
    /// A failure *envelope* is a successful call here; only transport and
    /// protocol faults surface as `Err`.
    ///
    /// # Errors
    ///
    /// Transport or protocol failures.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> McpResult<ToolResult> {
        let params = serde_json::to_value(ToolInput {
            name: name.to_string(),
            arguments,
        })?;
        let result = self.request(methods::CALL_TOOL, params).await?;
        Ok(serde_json::from_value(result)?)
    }

    async fn request(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> McpResult<serde_json::Value> {
        let id = Uuid::new_v4().to_string();
        let (tx, rx) = oneshot::channel();
        self.pending.lock().await.insert(id.clone(), tx);

        let request = McpRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(id.clone()),
            method: method.to_string(),
            params,
        };
        let mut line = serde_json::to_string(&request)?;
        line.push('\n');

        let write_result = {
            let mut stdin = self.stdin.lock().await;
            match stdin.write_all(line.as_bytes()).await {
                Ok(()) => stdin.flush().await,
                Err(e) => Err(e),
            }
        };
        if let Err(e) = write_result {
            self.pending.lock().await.remove(&id);
            return Err(e.into());
        }

        let response = rx
            .await
            .map_err(|_| McpError::Transport("Server closed before responding".to_string()))?;

        if let Some(err) = response.error {
            return Err(McpError::Protocol(format!(
                "{} (code {})",
                err.message, err.code
            )));
        }
        response
            .result
            .ok_or_else(|| McpError::Protocol("Response missing result".to_string()))
    }
}
