use crate::{
    domain::entities::ClusterSummary,
    error::Result,
    services::{ShardGridResponse, ShardGridService},
    AppState,
};
use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use tracing::{error, info_span, Instrument};
use uuid::Uuid;

fn grid_service(state: &AppState) -> ShardGridService {
    ShardGridService::new(
        state.cluster.clone(),
        state.aliases.clone(),
        state.env.query_timeout(),
    )
}

/// Consolidated node x index x shard view plus cluster summary
pub async fn shards_grid_handler(State(state): State<AppState>) -> Result<Json<ShardGridResponse>> {
    let span = info_span!("shards_grid", request_id = %Uuid::new_v4());
    let response = grid_service(&state)
        .shards_grid()
        .instrument(span)
        .await
        .map_err(|e| {
            error!("Shard grid request failed: {}", e);
            e
        })?;
    Ok(Json(response))
}

/// Cluster summary without the grid, for lightweight polling
pub async fn cluster_summary_handler(State(state): State<AppState>) -> Result<Json<ClusterSummary>> {
    let span = info_span!("cluster_summary", request_id = %Uuid::new_v4());
    let summary = grid_service(&state)
        .cluster_summary()
        .instrument(span)
        .await
        .map_err(|e| {
            error!("Cluster summary request failed: {}", e);
            e
        })?;
    Ok(Json(summary))
}

pub async fn health_checker_handler() -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "Shard grid server is running",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
