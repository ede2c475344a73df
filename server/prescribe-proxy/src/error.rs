// API error and response envelope types
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error_common::ErrorKind;
use mcp_server::ToolError;
use serde::Serialize;
use thiserror::Error;

/// API-level error, mapped onto an HTTP status by kind
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Tool failure envelopes carry their classification; the proxy branches on
/// the kind rather than parsing message text.
impl From<ToolError> for ApiError {
    fn from(err: ToolError) -> Self {
        match err.kind {
            ErrorKind::Validation => Self::Validation(err.message),
            ErrorKind::NotFound => Self::NotFound(err.message),
            ErrorKind::Upstream => Self::Upstream(err.message),
            ErrorKind::Internal => Self::Internal(err.message),
        }
    }
}

/// Transport and protocol faults on the MCP channel are proxy-internal.
impl From<mcp_server::McpError> for ApiError {
    fn from(err: mcp_server::McpError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(self.to_string()),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Uniform response wrapper for JSON endpoints
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Wrap a payload in a success response
pub fn api_success<T>(data: T) -> ApiResponse<T> {
    ApiResponse {
        success: true,
        data: Some(data),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool_error(kind: ErrorKind) -> ToolError {
        ToolError {
            kind,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn envelope_kinds_map_to_http_statuses() {
        assert_eq!(
            ApiError::from(tool_error(ErrorKind::Validation)).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(tool_error(ErrorKind::NotFound)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(tool_error(ErrorKind::Upstream)).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::from(tool_error(ErrorKind::Internal)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn success_wrapper_omits_error_field() {
        let json = serde_json::to_value(api_success(serde_json::json!({"ok": true}))).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("error").is_none());
    }
}
