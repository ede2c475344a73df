//! REST proxy binary (`prescribe-proxy`)
use prescribe_proxy::{create_app, ProxyConfig, ProxyState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ProxyConfig::from_env();
    let state = ProxyState::connect(&config).await?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.http_port)).await?;
    info!(port = config.http_port, "Prescribe proxy listening");
    axum::serve(listener, app).await?;

    Ok(())
}
