// Clinical prompt construction
use database_layer::Patient;

/// Persona and safety framing for the generation model.
///
/// This phrasing is a configuration constant of the product, not a derived
/// value; changing it changes the tone and constraints of every generated
/// prescription.
pub const PRESCRIBER_PERSONA: &str = "You are a licensed doctor. Based on the following \
patient details and symptoms, write a professional, short, and safe prescription using \
only generic medicine names.";

const CLOSING_INSTRUCTION: &str =
    "Start the prescription directly. Do not include disclaimers or introductions.";

/// Build the generation prompt from patient record, current symptoms, and
/// the raw history blob. Past data is embedded only when non-empty.
pub fn build_prompt(patient: &Patient, symptoms: &str, past_data: &str) -> String {
    let mut prompt = format!(
        "{PRESCRIBER_PERSONA}\n\n\
         Patient Details:\n\
         - Age: {}\n\
         - Diagnosis: {}\n\
         - History: {}\n\n\
         Current Symptoms: {}\n",
        patient.age,
        patient.diagnosis,
        patient.history.join(", "),
        symptoms
    );

    let past_data = past_data.trim();
    if !past_data.is_empty() {
        prompt.push_str(&format!("\nPast data:\n{past_data}\n"));
    }

    prompt.push('\n');
    prompt.push_str(CLOSING_INSTRUCTION);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient() -> Patient {
        Patient {
            id: "P1".to_string(),
            name: "Asha Rao".to_string(),
            age: 30,
            diagnosis: "flu".to_string(),
            history: vec!["asthma".to_string()],
        }
    }

    #[test]
    fn prompt_embeds_patient_details_and_symptoms() {
        let prompt = build_prompt(&patient(), "fever, cough", "");
        assert!(prompt.contains("Age: 30"));
        assert!(prompt.contains("Diagnosis: flu"));
        assert!(prompt.contains("asthma"));
        assert!(prompt.contains("fever, cough"));
        assert!(prompt.contains("licensed doctor"));
        assert!(!prompt.contains("Past data:"));
    }

    #[test]
    fn past_data_included_only_when_present() {
        let prompt = build_prompt(&patient(), "fever", "[2024] Patient:P1 ...");
        assert!(prompt.contains("Past data:\n[2024] Patient:P1 ..."));

        let without = build_prompt(&patient(), "fever", "   \n ");
        assert!(!without.contains("Past data:"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let a = build_prompt(&patient(), "fever", "blob");
        let b = build_prompt(&patient(), "fever", "blob");
        assert_eq!(a, b);
    }
}
