//! Shard grid - consolidated topology and health view of a search cluster
//!
//! This library fuses the cluster's index, shard, node and health listings
//! into one nested structure for a monitoring dashboard.

use axum::{
    http::{header::ACCEPT, HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod infrastructure;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};

use infrastructure::{AliasResolver, ClusterAliasResolver, ClusterClient, HttpClusterClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub env: Arc<Config>,
    pub cluster: Arc<dyn ClusterClient>,
    pub aliases: Arc<dyn AliasResolver>,
}

impl AppState {
    pub fn new(
        env: Config,
        cluster: Arc<dyn ClusterClient>,
        aliases: Arc<dyn AliasResolver>,
    ) -> Self {
        Self {
            env: Arc::new(env),
            cluster,
            aliases,
        }
    }

    /// State backed by the HTTP cluster client, with aliases resolved through the same cluster
    pub fn from_config(env: Config) -> Result<Self> {
        let cluster: Arc<dyn ClusterClient> = Arc::new(HttpClusterClient::from_config(&env)?);
        let aliases: Arc<dyn AliasResolver> = Arc::new(ClusterAliasResolver::new(cluster.clone()));
        Ok(Self::new(env, cluster, aliases))
    }
}

/// Full application router with CORS, compression and request tracing
pub fn create_app(state: AppState) -> Result<Router> {
    let origin = state
        .env
        .client_origin
        .parse::<HeaderValue>()
        .map_err(|e| AppError::ConfigError(format!("CLIENT_ORIGIN is not a valid origin: {}", e)))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET])
        .allow_headers([ACCEPT]);

    Ok(Router::new()
        .nest("/api", routes::api_router())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
