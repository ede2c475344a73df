// In-memory patient repository for tests and local development
use crate::error::{DatabaseError, DatabaseResult};
use crate::models::Patient;
use crate::repository::PatientRepository;
use async_trait::async_trait;

/// Patient directory held in memory.
///
/// Records are fixed at construction, matching the directory's read-only
/// contract; listing preserves insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPatientRepository {
    patients: Vec<Patient>,
}

impl InMemoryPatientRepository {
    pub fn new(patients: Vec<Patient>) -> Self {
        Self { patients }
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn list_all(&self) -> DatabaseResult<Vec<Patient>> {
        Ok(self.patients.clone())
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Patient> {
        self.patients
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DatabaseError::PatientNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InMemoryPatientRepository {
        InMemoryPatientRepository::new(vec![
            Patient {
                id: "P1".to_string(),
                name: "Asha Rao".to_string(),
                age: 30,
                diagnosis: "flu".to_string(),
                history: vec!["asthma".to_string()],
            },
            Patient {
                id: "P2".to_string(),
                name: "Liam Chen".to_string(),
                age: 52,
                diagnosis: "hypertension".to_string(),
                history: vec![],
            },
        ])
    }

    #[tokio::test]
    async fn list_all_is_idempotent() {
        let repo = sample();
        let first = repo.list_all().await.unwrap();
        let second = repo.list_all().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[tokio::test]
    async fn find_by_id_matches_exactly() {
        let repo = sample();
        let patient = repo.find_by_id("P1").await.unwrap();
        assert_eq!(patient.name, "Asha Rao");

        // Case-sensitive: "p1" is a different identifier.
        let err = repo.find_by_id("p1").await.unwrap_err();
        assert!(matches!(err, DatabaseError::PatientNotFound(_)));
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let repo = sample();
        let err = repo.find_by_id("NOPE").await.unwrap_err();
        assert!(matches!(err, DatabaseError::PatientNotFound(ref id) if id == "NOPE"));
    }
}
