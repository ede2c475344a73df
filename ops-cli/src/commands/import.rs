// Bulk patient import
use anyhow::{bail, Context};
use colored::Colorize;
use database_layer::{Patient, PostgresPatientRepository};
use std::collections::HashSet;
use std::path::Path;

pub async fn run(file: &Path, database_url: &str) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let patients: Vec<Patient> =
        serde_json::from_str(&raw).context("Patient file is not a JSON array of records")?;

    validate_patients(&patients)?;

    let repo = PostgresPatientRepository::connect(database_url).await?;
    repo.ensure_schema().await?;
    let count = repo.replace_all(&patients).await?;

    println!("{} Patients imported: {count}", "✓".green());
    Ok(())
}

/// Reject records the directory contract cannot hold: ids must be unique and
/// non-empty, names non-empty, ages non-negative.
fn validate_patients(patients: &[Patient]) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for patient in patients {
        if patient.id.trim().is_empty() {
            bail!("Patient record with empty id");
        }
        if patient.name.trim().is_empty() {
            bail!("Patient {} has an empty name", patient.id);
        }
        if patient.age < 0 {
            bail!("Patient {} has a negative age", patient.id);
        }
        if !seen.insert(patient.id.as_str()) {
            bail!("Duplicate patient id: {}", patient.id);
        }
    }
    Ok(())
}
