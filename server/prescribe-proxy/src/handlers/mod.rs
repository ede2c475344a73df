pub mod health;
pub mod patients;
pub mod prescriptions;

use crate::error::ApiError;
use mcp_server::{ContentBlock, ToolResult};

/// Unwrap a tool envelope into its structured payload, translating failure
/// envelopes into API errors by kind.
pub(crate) fn into_json_payload(result: ToolResult) -> Result<serde_json::Value, ApiError> {
    if let Some(error) = result.error {
        return Err(error.into());
    }
    match result.content.into_iter().next() {
        Some(ContentBlock::Json { json }) => Ok(json),
        Some(ContentBlock::Text { .. }) | None => {
            Err(ApiError::internal("Tool returned no structured payload"))
        }
    }
}

/// Unwrap a tool envelope into its text payload.
pub(crate) fn into_text_payload(result: ToolResult) -> Result<String, ApiError> {
    if let Some(error) = result.error {
        return Err(error.into());
    }
    match result.content.into_iter().next() {
        Some(ContentBlock::Text { text }) => Ok(text),
        Some(ContentBlock::Json { .. }) | None => {
            Err(ApiError::internal("Tool returned no text payload"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use error_common::ErrorKind;

    #[test]
    fn failure_envelopes_become_api_errors() {
        let result = ToolResult::failure(ErrorKind::NotFound, "Patient not found: NOPE");
        let err = into_json_payload(result).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn json_payload_is_extracted() {
        let result = ToolResult::success_json(serde_json::json!({"id": "P1"}));
        let payload = into_json_payload(result).unwrap();
        assert_eq!(payload["id"], "P1");
    }

    #[test]
    fn text_payload_is_extracted() {
        let result = ToolResult::success_text("No history found.");
        assert_eq!(into_text_payload(result).unwrap(), "No history found.");
    }

    #[test]
    fn wrong_block_shape_is_internal() {
        let result = ToolResult::success_text("blob");
        assert!(matches!(
            into_json_payload(result).unwrap_err(),
            ApiError::Internal(_)
        ));
    }
}
