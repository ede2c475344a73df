//! MCP server binary (`prescribe-mcp`)
use database_layer::PostgresPatientRepository;
use genai_service::{GeminiClient, GenAiConfig};
use history_ledger::HistoryLedger;
use mcp_server::{McpServer, ServerConfig, ServiceContext};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the protocol; all logging goes to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_env()?;
    let genai_config = GenAiConfig::from_env()?;

    let patients = PostgresPatientRepository::connect(&config.database_url).await?;
    info!("Patient directory connected");

    let genai = GeminiClient::new(genai_config)?;
    let ledger = HistoryLedger::new(&config.ledger_path);

    let ctx = ServiceContext::new(Arc::new(patients), ledger, Arc::new(genai));
    let server = McpServer::new(ctx);

    server.run().await?;
    Ok(())
}
