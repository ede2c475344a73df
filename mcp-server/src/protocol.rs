//! MCP protocol definitions (JSON-RPC based)
use error_common::{ErrorKind, ServiceError};
use serde::{Deserialize, Serialize};

/// MCP JSON-RPC request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpRequest {
    /// JSON-RPC version
    #[serde(default = "default_jsonrpc_version")]
    pub jsonrpc: String,
    /// Request ID; absent for notifications
    pub id: Option<String>,
    /// Method name
    pub method: String,
    /// Method parameters
    #[serde(default)]
    pub params: serde_json::Value,
}

fn default_jsonrpc_version() -> String {
    "2.0".to_string()
}

/// MCP JSON-RPC response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResponse {
    /// JSON-RPC version
    #[serde(default = "default_jsonrpc_version")]
    pub jsonrpc: String,
    /// Request ID (echoes request)
    pub id: Option<String>,
    /// Result payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Error payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpProtocolError>,
}

impl McpResponse {
    /// Build a success response echoing the request id.
    pub fn success(id: Option<String>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: default_jsonrpc_version(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Build an error response echoing the request id.
    pub fn error(id: Option<String>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: default_jsonrpc_version(),
            id,
            result: None,
            error: Some(McpProtocolError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// MCP JSON-RPC error structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpProtocolError {
    /// Error code
    pub code: i32,
    /// Error message
    pub message: String,
}

/// JSON-RPC error codes
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// MCP tool descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Tool name, unique within the registry
    pub name: String,
    /// Tool description
    pub description: String,
    /// Input schema (JSON Schema)
    pub input_schema: serde_json::Value,
}

/// Tool execution input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInput {
    /// Tool name
    pub name: String,
    /// Tool arguments
    #[serde(default)]
    pub arguments: serde_json::Value,
}

/// One block of tool result content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Raw text payload (the history ledger blob, error messages)
    Text { text: String },
    /// Structured payload with deterministic serialization
    Json { json: serde_json::Value },
}

/// Tool execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Success,
    Error,
}

/// Failure detail carried in an error envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolError {
    /// Failure classification callers can branch on
    pub kind: ErrorKind,
    /// Human-readable message
    pub message: String,
}

/// The uniform envelope returned by every tool call.
///
/// Exactly one of the two shapes is produced: success content blocks, or an
/// error with kind and message. Dispatch never returns anything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Execution status
    pub status: ToolStatus,
    /// Result content blocks, empty on failure
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    /// Failure detail, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
}

impl ToolResult {
    /// Success envelope with a single structured block.
    pub fn success_json(json: serde_json::Value) -> Self {
        Self {
            status: ToolStatus::Success,
            content: vec![ContentBlock::Json { json }],
            error: None,
        }
    }

    /// Success envelope with a single text block.
    pub fn success_text(text: impl Into<String>) -> Self {
        Self {
            status: ToolStatus::Success,
            content: vec![ContentBlock::Text { text: text.into() }],
            error: None,
        }
    }

    /// Failure envelope.
    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            status: ToolStatus::Error,
            content: Vec::new(),
            error: Some(ToolError {
                kind,
                message: message.into(),
            }),
        }
    }

    /// True when the call succeeded.
    pub fn is_success(&self) -> bool {
        self.status == ToolStatus::Success
    }
}

impl From<ServiceError> for ToolResult {
    fn from(err: ServiceError) -> Self {
        Self::failure(err.kind(), err.to_string())
    }
}

/// List of supported MCP methods
pub mod methods {
    pub const INITIALIZE: &str = "initialize";
    pub const LIST_TOOLS: &str = "tools/list";
    pub const CALL_TOOL: &str = "tools/call";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parses_with_defaults() {
        let req: McpRequest =
            serde_json::from_str(r#"{"id":"1","method":"tools/list"}"#).unwrap();
        assert_eq!(req.jsonrpc, "2.0");
        assert_eq!(req.method, methods::LIST_TOOLS);
        assert!(req.params.is_null());
    }

    #[test]
    fn failure_envelope_serializes_kind() {
        let result = ToolResult::failure(ErrorKind::NotFound, "Patient not found: NOPE");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"]["kind"], "not_found");
    }

    #[test]
    fn success_envelope_round_trips() {
        let result = ToolResult::success_text("No history found.");
        let json = serde_json::to_string(&result).unwrap();
        let back: ToolResult = serde_json::from_str(&json).unwrap();
        assert!(back.is_success());
        assert!(matches!(back.content.first(), Some(ContentBlock::Text { text }) if text == "No history found."));
    }
}
