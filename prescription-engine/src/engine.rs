// Prescription generation workflow
use crate::error::EngineResult;
use crate::prompt::build_prompt;
use database_layer::{Patient, PatientRepository};
use genai_service::GenAiClient;
use history_ledger::{HistoryEntry, HistoryLedger};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// One prescription request.
#[derive(Debug, Clone, Deserialize)]
pub struct PrescriptionRequest {
    pub patient_id: String,
    pub symptoms: String,
    /// Reviewer override; when present and non-empty it replaces the machine
    /// draft before logging.
    pub final_prescription: Option<String>,
}

/// What the workflow hands back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct PrescriptionOutcome {
    pub patient: Patient,
    pub generated: String,
    pub prescription: String,
}

/// Orchestrates the patient directory, the history ledger, and the
/// generation capability. Collaborators are injected at startup; the engine
/// itself holds no mutable state.
#[derive(Clone)]
pub struct PrescriptionEngine {
    patients: Arc<dyn PatientRepository>,
    ledger: HistoryLedger,
    genai: Arc<dyn GenAiClient>,
}

impl PrescriptionEngine {
    pub fn new(
        patients: Arc<dyn PatientRepository>,
        ledger: HistoryLedger,
        genai: Arc<dyn GenAiClient>,
    ) -> Self {
        Self {
            patients,
            ledger,
            genai,
        }
    }

    /// Run the full workflow for one request.
    ///
    /// # Errors
    ///
    /// - Unknown patient id: fails before any side effect
    /// - Generation failure: fails with no ledger entry written
    /// - Ledger append failure: fails after generation; nothing partial is
    ///   returned
    ///
    /// A ledger *read* failure never fails the call: history is best-effort
    /// context and degrades to "no history".
    pub async fn generate(&self, req: PrescriptionRequest) -> EngineResult<PrescriptionOutcome> {
        let patient = self.patients.find_by_id(&req.patient_id).await?;

        let past_data = match self.ledger.read_all().await {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "History ledger unreadable, generating without past data");
                String::new()
            }
        };

        let prompt = build_prompt(&patient, &req.symptoms, &past_data);
        let generated = self.genai.complete(&prompt).await?.trim().to_string();

        let prescription = match req.final_prescription {
            Some(ref overridden) if !overridden.trim().is_empty() => overridden.clone(),
            _ => generated.clone(),
        };

        let entry = HistoryEntry::new(&req.patient_id, &req.symptoms, &prescription);
        self.ledger.append(&entry).await?;

        info!(patient_id = %req.patient_id, "Prescription generated and logged");

        Ok(PrescriptionOutcome {
            patient,
            generated,
            prescription,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use database_layer::InMemoryPatientRepository;
    use genai_service::{GenAiError, GenAiResult};

    struct FixedCompletion(&'static str);

    #[async_trait]
    impl GenAiClient for FixedCompletion {
        async fn complete(&self, _prompt: &str) -> GenAiResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingGenAi;

    #[async_trait]
    impl GenAiClient for FailingGenAi {
        async fn complete(&self, _prompt: &str) -> GenAiResult<String> {
            Err(GenAiError::EmptyResponse)
        }
    }

    fn repo() -> Arc<InMemoryPatientRepository> {
        Arc::new(InMemoryPatientRepository::new(vec![Patient {
            id: "P1".to_string(),
            name: "Asha Rao".to_string(),
            age: 30,
            diagnosis: "flu".to_string(),
            history: vec!["asthma".to_string()],
        }]))
    }

    fn engine_with(
        dir: &tempfile::TempDir,
        genai: Arc<dyn GenAiClient>,
    ) -> (PrescriptionEngine, HistoryLedger) {
        let ledger = HistoryLedger::new(dir.path().join("past_prescriptions.txt"));
        let engine = PrescriptionEngine::new(repo(), ledger.clone(), genai);
        (engine, ledger)
    }

    fn request(final_prescription: Option<&str>) -> PrescriptionRequest {
        PrescriptionRequest {
            patient_id: "P1".to_string(),
            symptoms: "fever, cough".to_string(),
            final_prescription: final_prescription.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn generated_draft_is_trimmed_and_logged() {
        let dir = tempfile::tempdir().unwrap();
        let (engine, ledger) = engine_with(&dir, Arc::new(FixedCompletion("  Ibuprofen 200mg \n")));

        let outcome = engine.generate(request(None)).await.unwrap();
        assert_eq!(outcome.generated, "Ibuprofen 200mg");
        assert_eq!(outcome.prescription, "Ibuprofen 200mg");
        assert_eq!(outcome.patient.id, "P1");

        let content = ledger.read_all().await.unwrap();
        assert!(content.contains("Patient:P1 Symptoms:fever, cough → Ibuprofen 200mg"));
    }

    #[tokio::test]
    async fn reviewer_override_wins_and_is_logged() {
        let dir = tempfile::tempdir().unwrap();
        let (engine, ledger) = engine_with(&dir, Arc::new(FixedCompletion("machine draft")));

        let outcome = engine
            .generate(request(Some("Paracetamol 500mg")))
            .await
            .unwrap();
        assert_eq!(outcome.prescription, "Paracetamol 500mg");
        assert_eq!(outcome.generated, "machine draft");

        let content = ledger.read_all().await.unwrap();
        assert!(content.contains("→ Paracetamol 500mg"));
        assert!(!content.contains("machine draft"));
    }

    #[tokio::test]
    async fn blank_override_falls_back_to_draft() {
        let dir = tempfile::tempdir().unwrap();
        let (engine, _) = engine_with(&dir, Arc::new(FixedCompletion("machine draft")));

        let outcome = engine.generate(request(Some("   "))).await.unwrap();
        assert_eq!(outcome.prescription, "machine draft");
    }

    #[tokio::test]
    async fn unknown_patient_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (engine, ledger) = engine_with(&dir, Arc::new(FixedCompletion("draft")));

        let before = ledger.read_all().await.unwrap();
        let err = engine
            .generate(PrescriptionRequest {
                patient_id: "NOPE".to_string(),
                symptoms: "fever".to_string(),
                final_prescription: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, crate::EngineError::Database(_)));

        let after = ledger.read_all().await.unwrap();
        assert_eq!(before, after, "ledger must be untouched on failed lookup");
    }

    #[tokio::test]
    async fn generation_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (engine, ledger) = engine_with(&dir, Arc::new(FailingGenAi));

        let err = engine.generate(request(None)).await.unwrap_err();
        assert!(matches!(err, crate::EngineError::Generation(_)));
        assert_eq!(ledger.read_all().await.unwrap(), "");
    }

    #[tokio::test]
    async fn history_context_reaches_the_prompt() {
        struct CapturePrompt(tokio::sync::Mutex<Option<String>>);

        #[async_trait]
        impl GenAiClient for CapturePrompt {
            async fn complete(&self, prompt: &str) -> GenAiResult<String> {
                *self.0.lock().await = Some(prompt.to_string());
                Ok("draft".to_string())
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let capture = Arc::new(CapturePrompt(tokio::sync::Mutex::new(None)));
        let (engine, _ledger) = engine_with(&dir, capture.clone());

        // Seed the ledger, then generate again: the second prompt must carry
        // the first entry as past data.
        engine.generate(request(Some("Cetirizine 10mg"))).await.unwrap();
        engine.generate(request(None)).await.unwrap();

        let prompt = capture.0.lock().await.clone().unwrap();
        assert!(prompt.contains("Past data:"));
        assert!(prompt.contains("Cetirizine 10mg"));
    }
}
