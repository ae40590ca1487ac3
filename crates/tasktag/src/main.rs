use tasktag::server::Server;
use tasktag::{ServiceConfig, TagError, TagResult, Tagger};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    if let Err(error) = run().await {
        eprintln!("tasktag: {error}");
        std::process::exit(1);
    }
}

async fn run() -> TagResult<()> {
    let config = ServiceConfig::from_env()?;
    let tagger = Tagger::from_config(&config);
    let mut server = Server::start(&config, tagger).await?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|error| TagError::Internal(format!("failed to listen for shutdown: {error}")))?;
    info!("shutting down");
    server.shutdown()
}
