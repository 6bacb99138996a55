use anyhow::Result;
use clap::Parser;
use morse_core::config::ServerConfig;
use morse_core::server::api_server::start_api_server;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "morse_core=info,morse_server=info".into()),
        )
        .init();

    let config = ServerConfig::parse();
    start_api_server(config).await?;
    Ok(())
}
