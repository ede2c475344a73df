//! Typed tool dispatch
//!
//! Arguments arrive as a loose JSON mapping; they are validated exactly once
//! here, at the dispatch boundary, into a [`ToolRequest`] variant per tool.
//! Handlers downstream only ever see well-formed requests.
use crate::protocol::{ToolInput, ToolResult};
use crate::registry::{tool_names, ToolRegistry};
use error_common::{ErrorKind, ServiceError, ServiceResult};
use database_layer::PatientRepository;
use genai_service::GenAiClient;
use history_ledger::HistoryLedger;
use prescription_engine::{PrescriptionEngine, PrescriptionRequest};
use std::sync::Arc;
use tracing::{debug, warn};

const NO_HISTORY: &str = "No history found.";

/// A validated tool call, one variant per registered tool.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolRequest {
    GetAllPatients,
    GetPatientById {
        patient_id: String,
    },
    GeneratePrescription {
        patient_id: String,
        symptoms: String,
        final_prescription: Option<String>,
    },
    GetPrescriptionHistory,
}

impl ToolRequest {
    /// Validate a raw tool input into a typed request.
    ///
    /// # Errors
    ///
    /// `ServiceError::Validation` naming the missing parameter, or the
    /// unknown tool when the name is not in the catalog.
    pub fn parse(input: &ToolInput) -> ServiceResult<Self> {
        let args = &input.arguments;
        match input.name.as_str() {
            tool_names::GET_ALL_PATIENTS => Ok(Self::GetAllPatients),
            tool_names::GET_PATIENT_BY_ID => Ok(Self::GetPatientById {
                patient_id: require_str(args, "patient_id")?,
            }),
            tool_names::GENERATE_PRESCRIPTION => Ok(Self::GeneratePrescription {
                patient_id: require_str(args, "patient_id")?,
                symptoms: require_str(args, "symptoms")?,
                final_prescription: optional_str(args, "final_prescription"),
            }),
            tool_names::GET_PRESCRIPTION_HISTORY => Ok(Self::GetPrescriptionHistory),
            unknown => Err(ServiceError::Validation(format!("Unknown tool: {unknown}"))),
        }
    }
}

fn require_str(args: &serde_json::Value, key: &str) -> ServiceResult<String> {
    match args.get(key).and_then(serde_json::Value::as_str) {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(ServiceError::Validation(format!("{key} is required"))),
    }
}

fn optional_str(args: &serde_json::Value, key: &str) -> Option<String> {
    args.get(key)
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

/// Process-wide service state handed to the dispatcher at startup.
///
/// Built once in `main` from explicit configuration and torn down with the
/// process; handlers receive it by reference instead of reaching for
/// module-level singletons.
pub struct ServiceContext {
    pub patients: Arc<dyn PatientRepository>,
    pub ledger: HistoryLedger,
    pub engine: PrescriptionEngine,
}

impl ServiceContext {
    pub fn new(
        patients: Arc<dyn PatientRepository>,
        ledger: HistoryLedger,
        genai: Arc<dyn GenAiClient>,
    ) -> Self {
        let engine = PrescriptionEngine::new(Arc::clone(&patients), ledger.clone(), genai);
        Self {
            patients,
            ledger,
            engine,
        }
    }
}

/// Routes validated tool calls to their handlers and normalizes every
/// outcome into the uniform envelope.
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
    ctx: Arc<ServiceContext>,
}

impl ToolDispatcher {
    pub fn new(registry: Arc<ToolRegistry>, ctx: Arc<ServiceContext>) -> Self {
        Self { registry, ctx }
    }

    /// Dispatch one tool call.
    ///
    /// Never returns an error and never panics: every fault, from an unknown
    /// name to a handler failure, comes back as a failure envelope so the
    /// transport always has a well-formed response to deliver.
    pub async fn dispatch(&self, input: ToolInput) -> ToolResult {
        debug!(tool = %input.name, "Dispatching tool call");

        if !self.registry.contains(&input.name) {
            return ToolResult::failure(
                ErrorKind::Validation,
                format!("Unknown tool: {}", input.name),
            );
        }

        let request = match ToolRequest::parse(&input) {
            Ok(request) => request,
            Err(e) => return e.into(),
        };

        match self.execute(request).await {
            Ok(result) => result,
            Err(e) => {
                warn!(tool = %input.name, error = %e, "Tool call failed");
                e.into()
            }
        }
    }

    async fn execute(&self, request: ToolRequest) -> ServiceResult<ToolResult> {
        match request {
            ToolRequest::GetAllPatients => {
                let patients = self.ctx.patients.list_all().await?;
                Ok(ToolResult::success_json(to_json(&patients)?))
            }
            ToolRequest::GetPatientById { patient_id } => {
                let patient = self.ctx.patients.find_by_id(&patient_id).await?;
                Ok(ToolResult::success_json(to_json(&patient)?))
            }
            ToolRequest::GeneratePrescription {
                patient_id,
                symptoms,
                final_prescription,
            } => {
                let outcome = self
                    .ctx
                    .engine
                    .generate(PrescriptionRequest {
                        patient_id,
                        symptoms,
                        final_prescription,
                    })
                    .await?;
                Ok(ToolResult::success_json(to_json(&outcome)?))
            }
            ToolRequest::GetPrescriptionHistory => {
                let log = self.ctx.ledger.read_all().await?;
                if log.is_empty() {
                    Ok(ToolResult::success_text(NO_HISTORY))
                } else {
                    Ok(ToolResult::success_text(log))
                }
            }
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> ServiceResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| ServiceError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, arguments: serde_json::Value) -> ToolInput {
        ToolInput {
            name: name.to_string(),
            arguments,
        }
    }

    #[test]
    fn parse_accepts_all_registered_tools() {
        let req = ToolRequest::parse(&input("get_all_patients", serde_json::json!({}))).unwrap();
        assert_eq!(req, ToolRequest::GetAllPatients);

        let req = ToolRequest::parse(&input(
            "generate_prescription",
            serde_json::json!({"patient_id": "P1", "symptoms": "fever"}),
        ))
        .unwrap();
        assert_eq!(
            req,
            ToolRequest::GeneratePrescription {
                patient_id: "P1".to_string(),
                symptoms: "fever".to_string(),
                final_prescription: None,
            }
        );
    }

    #[test]
    fn parse_names_the_missing_parameter() {
        let err =
            ToolRequest::parse(&input("get_patient_by_id", serde_json::json!({}))).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "patient_id is required"));

        let err = ToolRequest::parse(&input(
            "generate_prescription",
            serde_json::json!({"patient_id": "P1"}),
        ))
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "symptoms is required"));
    }

    #[test]
    fn parse_rejects_non_string_arguments() {
        let err = ToolRequest::parse(&input(
            "get_patient_by_id",
            serde_json::json!({"patient_id": 42}),
        ))
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn parse_tolerates_null_arguments_for_parameterless_tools() {
        let req = ToolRequest::parse(&input(
            "get_prescription_history",
            serde_json::Value::Null,
        ))
        .unwrap();
        assert_eq!(req, ToolRequest::GetPrescriptionHistory);
    }
}
