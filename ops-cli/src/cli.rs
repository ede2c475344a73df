// CLI argument definitions
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prescribe", about = "Operations CLI for Prescribe Engine", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bulk-load patient records into the directory, replacing any prior
    /// contents
    ImportPatients {
        /// JSON file holding an array of patient records
        #[arg(long, default_value = "app/data/patients.json")]
        file: PathBuf,
        /// Patient directory connection string
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
    /// Verify the patient directory is reachable
    CheckConnection {
        /// Patient directory connection string
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
    /// Generate a prescription for a patient from free-text symptoms
    Prescribe {
        /// Patient identifier
        patient_id: String,
        /// Free-text symptoms; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        symptoms: Vec<String>,
        /// Reviewer override logged in place of the machine draft
        #[arg(long)]
        final_prescription: Option<String>,
        /// Command used to spawn the MCP server
        #[arg(long, env = "MCP_SERVER_BIN", default_value = "prescribe-mcp")]
        server_bin: String,
    },
}
