//! Read-only client for the cluster REST API
//!
//! `ClusterClient` is the seam between the aggregation services and the
//! transport. The payload types mirror the upstream JSON; `_cat` endpoints
//! report numbers as strings, which the consuming services parse.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, error};
use url::Url;

use crate::config::Config;
use crate::domain::entities::ShardState;
use crate::error::{utils::ErrorUtils, AppError, Result};

/// Row of `_cat/indices`
#[derive(Debug, Clone, Deserialize)]
pub struct CatIndex {
    pub index: String,
    pub status: String,
    pub pri: Option<String>,
    pub rep: Option<String>,
    #[serde(rename = "docs.count")]
    pub docs_count: Option<String>,
    #[serde(rename = "docs.deleted")]
    pub docs_deleted: Option<String>,
    #[serde(rename = "store.size")]
    pub store_size: Option<String>,
}

/// Row of `_cat/shards`
#[derive(Debug, Clone, Deserialize)]
pub struct CatShard {
    pub index: String,
    pub shard: String,
    pub prirep: String,
    pub state: ShardState,
    /// Absent for unassigned copies; `"source -> target"` for relocating ones
    pub node: Option<String>,
}

/// Response of `_nodes/stats/jvm,os,fs`
#[derive(Debug, Clone, Deserialize)]
pub struct NodesStatsResponse {
    pub nodes: HashMap<String, NodeStats>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeStats {
    pub name: String,
    pub ip: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub os: OsStats,
    pub jvm: JvmStats,
    pub fs: FsStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsStats {
    pub cpu: CpuStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CpuStats {
    pub percent: f64,
    pub load_average: LoadAverage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoadAverage {
    #[serde(rename = "1m")]
    pub one_minute: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JvmStats {
    pub mem: JvmMemStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JvmMemStats {
    pub heap_used_percent: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FsStats {
    pub total: FsTotals,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FsTotals {
    pub total_in_bytes: u64,
    pub available_in_bytes: u64,
}

/// Response of `_nodes/os`
#[derive(Debug, Clone, Deserialize)]
pub struct NodesInfoResponse {
    pub nodes: HashMap<String, NodeInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeInfo {
    pub os: Option<NodeOsInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeOsInfo {
    pub available_processors: Option<u32>,
    pub allocated_processors: Option<u32>,
}

impl NodeOsInfo {
    /// Cores the node actually schedules on
    pub fn core_count(&self) -> Option<u32> {
        self.allocated_processors.or(self.available_processors)
    }
}

/// Row of `_cat/master`
#[derive(Debug, Clone, Deserialize)]
pub struct CatMaster {
    pub id: String,
    pub node: String,
}

/// Row of `_cat/health`
#[derive(Debug, Clone, Deserialize)]
pub struct CatHealth {
    pub cluster: String,
    pub status: String,
    #[serde(rename = "node.total")]
    pub node_total: String,
    pub shards: String,
    pub pri: String,
    pub relo: String,
    pub init: String,
    pub unassign: String,
}

/// Row of `_cat/count`
#[derive(Debug, Clone, Deserialize)]
pub struct CatCount {
    pub count: String,
}

/// Response of `_cluster/settings?flat_settings=true`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClusterSettingsResponse {
    #[serde(default)]
    pub transient: TransientSettings,
}

/// Transient settings the dashboard cares about; absent keys take their cluster defaults
#[derive(Debug, Clone, Deserialize)]
pub struct TransientSettings {
    #[serde(rename = "cluster.routing.allocation.enable", default = "default_allocation")]
    pub allocation_enable: String,
}

fn default_allocation() -> String {
    "all".to_string()
}

impl Default for TransientSettings {
    fn default() -> Self {
        Self {
            allocation_enable: default_allocation(),
        }
    }
}

/// Row of `_cat/recovery`
#[derive(Debug, Clone, Deserialize)]
pub struct CatRecovery {
    pub index: String,
    pub shard: String,
    pub stage: String,
    pub bytes_recovered: String,
    pub bytes_total: String,
}

/// Row of `_cat/aliases`
#[derive(Debug, Clone, Deserialize)]
pub struct CatAlias {
    pub alias: String,
    pub index: String,
}

/// Read-only view of the cluster API used by the aggregation services
#[async_trait]
pub trait ClusterClient: Send + Sync {
    async fn cat_indices(&self) -> Result<Vec<CatIndex>>;
    async fn cat_shards(&self) -> Result<Vec<CatShard>>;
    async fn nodes_stats(&self) -> Result<NodesStatsResponse>;
    async fn nodes_os_info(&self) -> Result<NodesInfoResponse>;
    async fn cat_master(&self) -> Result<Vec<CatMaster>>;
    async fn cat_health(&self) -> Result<Vec<CatHealth>>;
    async fn cat_count(&self) -> Result<Vec<CatCount>>;
    async fn cluster_settings(&self) -> Result<ClusterSettingsResponse>;
    /// Recovery detail scoped to exactly the given indices
    async fn cat_recovery(&self, indices: &[String]) -> Result<Vec<CatRecovery>>;
    async fn cat_aliases(&self) -> Result<Vec<CatAlias>>;
}

/// `ClusterClient` over the cluster's HTTP API
pub struct HttpClusterClient {
    client: Client,
    base_url: Url,
    username: Option<String>,
    password: Option<String>,
}

impl HttpClusterClient {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self {
            client,
            base_url,
            username: None,
            password: None,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent("shardgrid/0.1")
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        let mut cluster = Self::new(client, config.cluster_url.clone());
        cluster.username = config.cluster_username.clone();
        cluster.password = config.cluster_password.clone();
        Ok(cluster)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, query: &str, path: &str) -> Result<T> {
        let started = Instant::now();
        let url = self.endpoint(path);

        let mut request = self.client.get(&url);
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_ref());
        }

        let response = request.send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            ErrorUtils::upstream_error(query, e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Cluster returned {} for {}: {}", status, url, error_text);
            return Err(ErrorUtils::upstream_error(
                query,
                format!("HTTP {}: {}", status.as_u16(), error_text),
            ));
        }

        let payload = response
            .json::<T>()
            .await
            .map_err(|e| ErrorUtils::upstream_error(query, format!("Invalid response body: {}", e)))?;

        debug!("{} completed in {}ms", query, started.elapsed().as_millis());
        Ok(payload)
    }
}

/// Longest index list put in one recovery path. Keeps the request line well
/// under the 4KB limit most HTTP front ends put on it.
pub const MAX_INDEX_PATH_LEN: usize = 3000;

/// Url-encode the index names and comma-join them into path segments of at
/// most `max_len` bytes each. A single name longer than `max_len` gets a
/// segment of its own.
pub fn index_path_segments(indices: &[String], max_len: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for index in indices {
        let encoded = urlencoding::encode(index);
        if !current.is_empty() && current.len() + 1 + encoded.len() > max_len {
            segments.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(',');
        }
        current.push_str(&encoded);
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[async_trait]
impl ClusterClient for HttpClusterClient {
    async fn cat_indices(&self) -> Result<Vec<CatIndex>> {
        self.get_json("cat_indices", "_cat/indices?format=json").await
    }

    async fn cat_shards(&self) -> Result<Vec<CatShard>> {
        self.get_json("cat_shards", "_cat/shards?format=json").await
    }

    async fn nodes_stats(&self) -> Result<NodesStatsResponse> {
        self.get_json("nodes_stats", "_nodes/stats/jvm,os,fs").await
    }

    async fn nodes_os_info(&self) -> Result<NodesInfoResponse> {
        self.get_json("nodes_os_info", "_nodes/os").await
    }

    async fn cat_master(&self) -> Result<Vec<CatMaster>> {
        self.get_json("cat_master", "_cat/master?format=json").await
    }

    async fn cat_health(&self) -> Result<Vec<CatHealth>> {
        self.get_json("cat_health", "_cat/health?format=json").await
    }

    async fn cat_count(&self) -> Result<Vec<CatCount>> {
        self.get_json("cat_count", "_cat/count?format=json").await
    }

    async fn cluster_settings(&self) -> Result<ClusterSettingsResponse> {
        self.get_json("cluster_settings", "_cluster/settings?flat_settings=true")
            .await
    }

    async fn cat_recovery(&self, indices: &[String]) -> Result<Vec<CatRecovery>> {
        // An empty index list would turn into an unscoped, cluster-wide recovery scan
        if indices.is_empty() {
            return Ok(Vec::new());
        }
        let segments = index_path_segments(indices, MAX_INDEX_PATH_LEN);
        if segments.len() > 1 {
            debug!(
                "Splitting recovery query for {} indices into {} requests",
                indices.len(),
                segments.len()
            );
        }

        let mut rows = Vec::new();
        for segment in segments {
            let path = format!("_cat/recovery/{}?format=json&bytes=b", segment);
            rows.extend(self.get_json::<Vec<CatRecovery>>("cat_recovery", &path).await?);
        }
        Ok(rows)
    }

    async fn cat_aliases(&self) -> Result<Vec<CatAlias>> {
        self.get_json("cat_aliases", "_cat/aliases?format=json").await
    }
}
