use crate::{
    handlers::{cluster_summary_handler, health_checker_handler, shards_grid_handler},
    AppState,
};
use axum::{routing::get, Router};

/// Read-only dashboard API, mounted under `/api/v1`
pub fn grid_router() -> Router<AppState> {
    Router::new()
        .route("/shards_grid", get(shards_grid_handler))
        .route("/cluster", get(cluster_summary_handler))
}

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/healthchecker", get(health_checker_handler))
        .nest("/v1", grid_router())
}
