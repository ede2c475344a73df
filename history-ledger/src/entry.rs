// History entry types and structures
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One prescription event, flattened to a single ledger line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub patient_id: String,
    pub symptoms: String,
    pub prescription: String,
}

impl HistoryEntry {
    /// Create an entry stamped with the current UTC time.
    pub fn new(
        patient_id: impl Into<String>,
        symptoms: impl Into<String>,
        prescription: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            patient_id: patient_id.into(),
            symptoms: symptoms.into(),
            prescription: prescription.into(),
        }
    }

    /// Render the entry as its ledger line, leading newline included.
    pub fn to_line(&self) -> String {
        format!(
            "\n[{}] Patient:{} Symptoms:{} → {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.patient_id,
            self.symptoms,
            self.prescription
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_carries_all_fields_verbatim() {
        let entry = HistoryEntry::new("P1", "fever, cough", "Paracetamol 500mg");
        let line = entry.to_line();
        assert!(line.starts_with('\n'));
        assert!(line.contains("Patient:P1"));
        assert!(line.contains("Symptoms:fever, cough"));
        assert!(line.ends_with("→ Paracetamol 500mg"));
        assert!(line.contains(&entry.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)));
    }
}
