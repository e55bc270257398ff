use anyhow::Context;
use dotenv::dotenv;
use shardgrid::{create_app, AppState, Config};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        error!("Failure: {:#}", e);
        return Err(e);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = Config::init().context("invalid configuration")?;
    let port = config.port;
    let cluster_url = config.cluster_url.clone();

    let state = AppState::from_config(config).context("failed to set up cluster client")?;
    let app = create_app(state).context("failed to build router")?;

    info!("🚀 Server started successfully on port {}", port);
    info!("🔗 Cluster API: {}", cluster_url);
    info!("📊 Shard grid: http://localhost:{}/api/v1/shards_grid", port);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;
    axum::serve(listener, app).await?;

    Ok(())
}
