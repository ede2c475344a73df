use crate::error::{api_success, ApiError, ApiResponse};
use crate::handlers::{into_json_payload, into_text_payload};
use crate::state::ProxyState;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

/// Generate prescription request body
#[derive(Debug, Deserialize)]
pub struct GeneratePrescriptionRequest {
    pub patient_id: String,
    pub symptoms: String,
    pub final_prescription: Option<String>,
}

/// Run the generation workflow for one patient.
///
/// The body is forwarded as-is; argument validation is the dispatcher's
/// job and comes back as a validation-kind envelope when it fails.
pub async fn generate_prescription(
    State(state): State<ProxyState>,
    Json(req): Json<GeneratePrescriptionRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let result = state
        .mcp
        .call_tool(
            "generate_prescription",
            serde_json::json!({
                "patient_id": req.patient_id,
                "symptoms": req.symptoms,
                "final_prescription": req.final_prescription,
            }),
        )
        .await?;
    let outcome = into_json_payload(result)?;
    Ok(Json(api_success(outcome)))
}

/// Read the prescription ledger as plain text
pub async fn prescription_history(State(state): State<ProxyState>) -> Result<String, ApiError> {
    let result = state
        .mcp
        .call_tool("get_prescription_history", serde_json::json!({}))
        .await?;
    into_text_payload(result)
}
