use std::collections::BTreeSet;
use std::sync::Arc;

use axum::Router;
use shardgrid::infrastructure::IndexAliases;
use shardgrid::{create_app, AppState, Config};

// Test utilities and common setup
pub mod fixtures;
pub mod mocks;

pub use mocks::*;

/// Mock cluster loaded with the default fixture set
pub async fn create_mock_cluster() -> MockClusterClient {
    let cluster = MockClusterClient::new();
    cluster.set_response("cat_indices", fixtures::cat_indices()).await;
    cluster.set_response("cat_shards", fixtures::cat_shards()).await;
    cluster.set_response("nodes_stats", fixtures::nodes_stats()).await;
    cluster.set_response("nodes_os_info", fixtures::nodes_os_info()).await;
    cluster.set_response("cat_master", fixtures::cat_master()).await;
    cluster.set_response("cat_health", fixtures::cat_health()).await;
    cluster.set_response("cat_count", fixtures::cat_count()).await;
    cluster.set_response("cluster_settings", fixtures::cluster_settings()).await;
    cluster.set_response("cat_recovery", fixtures::cat_recovery()).await;
    cluster
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "QUERY_TIMEOUT_SECONDS" => Some("1".to_string()),
        _ => None,
    })
    .expect("default test config")
}

pub fn test_aliases() -> IndexAliases {
    let mut aliases = IndexAliases::new();
    aliases.insert(
        "logs-2024".to_string(),
        BTreeSet::from(["logs-current".to_string()]),
    );
    aliases
}

pub fn create_test_app(cluster: &MockClusterClient) -> Router {
    let state = AppState::new(
        test_config(),
        Arc::new(cluster.clone()),
        Arc::new(MockAliasResolver::new(test_aliases())),
    );
    create_app(state).expect("test app")
}
