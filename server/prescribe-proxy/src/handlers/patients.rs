use crate::error::{api_success, ApiError, ApiResponse};
use crate::handlers::into_json_payload;
use crate::state::ProxyState;
use axum::extract::{Path, State};
use axum::Json;
use database_layer::Patient;

/// List all patients
pub async fn list_patients(
    State(state): State<ProxyState>,
) -> Result<Json<ApiResponse<Vec<Patient>>>, ApiError> {
    let result = state
        .mcp
        .call_tool("get_all_patients", serde_json::json!({}))
        .await?;
    let payload = into_json_payload(result)?;
    let patients: Vec<Patient> =
        serde_json::from_value(payload).map_err(|e| ApiError::internal(e.to_string()))?;
    Ok(Json(api_success(patients)))
}

/// Get one patient by id
pub async fn get_patient(
    State(state): State<ProxyState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Patient>>, ApiError> {
    let result = state
        .mcp
        .call_tool("get_patient_by_id", serde_json::json!({ "patient_id": id }))
        .await?;
    let payload = into_json_payload(result)?;
    let patient: Patient =
        serde_json::from_value(payload).map_err(|e| ApiError::internal(e.to_string()))?;
    Ok(Json(api_success(patient)))
}
