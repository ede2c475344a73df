//! Operations CLI for Prescribe Engine management
//!
//! # Command Categories
//!
//! - **Data**: `import-patients` bulk-loads the patient directory from a
//!   JSON file, replacing any prior contents
//! - **System**: `check-connection` verifies the patient directory is
//!   reachable before anything else depends on it
//! - **Clinical**: `prescribe` runs one generation workflow end to end
//!   through the MCP channel
mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::ImportPatients { file, database_url } => {
            commands::import::run(&file, &database_url).await
        }
        Commands::CheckConnection { database_url } => commands::check::run(&database_url).await,
        Commands::Prescribe {
            patient_id,
            symptoms,
            final_prescription,
            server_bin,
        } => {
            commands::prescribe::run(
                &server_bin,
                &patient_id,
                &symptoms.join(" "),
                final_prescription.as_deref(),
            )
            .await
        }
    }
}
