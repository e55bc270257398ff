use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use shardgrid::infrastructure::cluster_client::{
    CatAlias, CatCount, CatHealth, CatIndex, CatMaster, CatRecovery, CatShard, ClusterClient,
    ClusterSettingsResponse, NodesInfoResponse, NodesStatsResponse,
};
use shardgrid::infrastructure::{AliasResolver, IndexAliases};
use shardgrid::{AppError, Result};

/// Mock cluster API serving canned JSON per query
#[derive(Clone, Default)]
pub struct MockClusterClient {
    responses: Arc<RwLock<HashMap<String, Value>>>,
    call_count: Arc<RwLock<HashMap<String, usize>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    hanging: Arc<RwLock<HashSet<String>>>,
    recovery_requests: Arc<RwLock<Vec<Vec<String>>>>,
}

impl MockClusterClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, query: &str, response: Value) {
        self.responses
            .write()
            .await
            .insert(query.to_string(), response);
    }

    pub async fn get_call_count(&self, query: &str) -> usize {
        self.call_count
            .read()
            .await
            .get(query)
            .copied()
            .unwrap_or(0)
    }

    pub async fn set_failing(&self, query: &str) {
        self.failing.write().await.insert(query.to_string());
    }

    /// Make a query never answer, to exercise the timeout path
    pub async fn set_hanging(&self, query: &str) {
        self.hanging.write().await.insert(query.to_string());
    }

    pub async fn recovery_requests(&self) -> Vec<Vec<String>> {
        self.recovery_requests.read().await.clone()
    }

    async fn respond<T: DeserializeOwned>(&self, query: &str) -> Result<T> {
        {
            let mut counts = self.call_count.write().await;
            *counts.entry(query.to_string()).or_insert(0) += 1;
        }

        if self.failing.read().await.contains(query) {
            return Err(AppError::UpstreamFetch {
                query: query.to_string(),
                message: "connection refused".to_string(),
            });
        }

        if self.hanging.read().await.contains(query) {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }

        let value = self
            .responses
            .read()
            .await
            .get(query)
            .cloned()
            .unwrap_or_else(|| panic!("no mock response for {}", query));

        serde_json::from_value(value).map_err(|e| AppError::UpstreamFetch {
            query: query.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ClusterClient for MockClusterClient {
    async fn cat_indices(&self) -> Result<Vec<CatIndex>> {
        self.respond("cat_indices").await
    }

    async fn cat_shards(&self) -> Result<Vec<CatShard>> {
        self.respond("cat_shards").await
    }

    async fn nodes_stats(&self) -> Result<NodesStatsResponse> {
        self.respond("nodes_stats").await
    }

    async fn nodes_os_info(&self) -> Result<NodesInfoResponse> {
        self.respond("nodes_os_info").await
    }

    async fn cat_master(&self) -> Result<Vec<CatMaster>> {
        self.respond("cat_master").await
    }

    async fn cat_health(&self) -> Result<Vec<CatHealth>> {
        self.respond("cat_health").await
    }

    async fn cat_count(&self) -> Result<Vec<CatCount>> {
        self.respond("cat_count").await
    }

    async fn cluster_settings(&self) -> Result<ClusterSettingsResponse> {
        self.respond("cluster_settings").await
    }

    async fn cat_recovery(&self, indices: &[String]) -> Result<Vec<CatRecovery>> {
        self.recovery_requests.write().await.push(indices.to_vec());
        self.respond("cat_recovery").await
    }

    async fn cat_aliases(&self) -> Result<Vec<CatAlias>> {
        self.respond("cat_aliases").await
    }
}

/// Alias resolver returning a fixed mapping
pub struct MockAliasResolver {
    aliases: IndexAliases,
}

impl MockAliasResolver {
    pub fn new(aliases: IndexAliases) -> Self {
        Self { aliases }
    }
}

#[async_trait]
impl AliasResolver for MockAliasResolver {
    async fn index_aliases(&self) -> Result<IndexAliases> {
        Ok(self.aliases.clone())
    }
}
