use anyhow::Result;
use localized_router::config::Config;
use localized_router::server;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("localized_router=info".parse()?),
        )
        .init();

    info!("Starting localized router");

    // Load configuration from environment; invalid locale settings stop here
    let config = Config::from_env()?;

    server::serve(&config).await
}
