// Patient directory connectivity probe
use anyhow::bail;
use colored::Colorize;
use database_layer::PostgresPatientRepository;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn run(database_url: &str) -> anyhow::Result<()> {
    let connect = PostgresPatientRepository::connect(database_url);
    let repo = match tokio::time::timeout(CONNECT_TIMEOUT, connect).await {
        Ok(Ok(repo)) => repo,
        Ok(Err(e)) => {
            println!("{} Patient directory connection failed: {e}", "✗".red());
            bail!("connection failed");
        }
        Err(_) => {
            println!(
                "{} Patient directory connection timed out after {}s",
                "✗".red(),
                CONNECT_TIMEOUT.as_secs()
            );
            bail!("connection timed out");
        }
    };

    if repo.is_healthy().await {
        println!("{} Patient directory connected successfully", "✓".green());
        Ok(())
    } else {
        println!("{} Patient directory probe query failed", "✗".red());
        bail!("probe query failed");
    }
}
