//! Shard grid request orchestration
//!
//! Phase one fans out the independent queries and waits for all of them; any
//! failure fails the whole request. The recovery query is chained onto the
//! shard listing, so it starts as soon as the shards are known and is scoped
//! to the relocating indices found there.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::cluster_summary::ClusterSummaryBuilder;
use super::index_formatter::IndexDescriptorFormatter;
use super::nodes::NodeAssembler;
use super::relocation::{RelocationProgress, RelocationProgressTracker};
use super::shard_grid::ShardGridAggregator;
use super::upstream::timed;
use crate::domain::entities::{ClusterSummary, IndexRecord, NodeRecord};
use crate::error::Result;
use crate::infrastructure::cluster_client::{CatIndex, CatShard, ClusterClient};
use crate::infrastructure::{AliasResolver, IndexAliases};

/// Body of `GET /api/v1/shards_grid`
#[derive(Debug, Serialize)]
pub struct ShardGridResponse {
    /// Ordered by node name
    pub nodes: Vec<NodeRecord>,
    pub indices: BTreeMap<String, IndexRecord>,
    pub cluster: ClusterSummary,
}

pub struct ShardGridService {
    cluster: Arc<dyn ClusterClient>,
    aliases: Arc<dyn AliasResolver>,
    query_timeout: Duration,
}

impl ShardGridService {
    pub fn new(
        cluster: Arc<dyn ClusterClient>,
        aliases: Arc<dyn AliasResolver>,
        query_timeout: Duration,
    ) -> Self {
        Self {
            cluster,
            aliases,
            query_timeout,
        }
    }

    pub async fn shards_grid(&self) -> Result<ShardGridResponse> {
        let started = Instant::now();

        let (index_rows, aliases, (shards, progress), mut nodes, mut cluster) = tokio::try_join!(
            self.fetch_indices(),
            self.fetch_aliases(),
            self.fetch_shards_with_progress(),
            self.fetch_nodes(),
            self.fetch_cluster_summary(),
        )?;
        debug!("Upstream fetch finished in {}ms", started.elapsed().as_millis());

        cluster.num_of_indices = index_rows.len();

        let grid = ShardGridAggregator::aggregate(&shards, &progress)?;
        ShardGridAggregator::attach_to_nodes(&mut nodes, grid.by_node);
        let indices = IndexDescriptorFormatter::format_all(&index_rows, &aliases, grid.unassigned)?;

        info!(
            "Built shard grid: {} nodes, {} indices, {} shards, {} relocating indices in {}ms",
            nodes.len(),
            indices.len(),
            shards.len(),
            RelocationProgressTracker::relocating_indices(&shards).len(),
            started.elapsed().as_millis()
        );

        Ok(ShardGridResponse {
            nodes,
            indices,
            cluster,
        })
    }

    /// Cluster summary on its own, including the index count
    pub async fn cluster_summary(&self) -> Result<ClusterSummary> {
        let (index_rows, mut cluster) =
            tokio::try_join!(self.fetch_indices(), self.fetch_cluster_summary())?;
        cluster.num_of_indices = index_rows.len();
        Ok(cluster)
    }

    async fn fetch_indices(&self) -> Result<Vec<CatIndex>> {
        timed("cat_indices", self.query_timeout, self.cluster.cat_indices()).await
    }

    async fn fetch_aliases(&self) -> Result<IndexAliases> {
        timed("index_aliases", self.query_timeout, self.aliases.index_aliases()).await
    }

    /// Shard listing, then recovery detail for whatever is relocating in it
    async fn fetch_shards_with_progress(&self) -> Result<(Vec<CatShard>, RelocationProgress)> {
        let shards = timed("cat_shards", self.query_timeout, self.cluster.cat_shards()).await?;
        let progress =
            RelocationProgressTracker::track(self.cluster.as_ref(), &shards, self.query_timeout).await?;
        Ok((shards, progress))
    }

    async fn fetch_nodes(&self) -> Result<Vec<NodeRecord>> {
        let (stats, info, master) = tokio::try_join!(
            timed("nodes_stats", self.query_timeout, self.cluster.nodes_stats()),
            timed("nodes_os_info", self.query_timeout, self.cluster.nodes_os_info()),
            timed("cat_master", self.query_timeout, self.cluster.cat_master()),
        )?;
        Ok(NodeAssembler::assemble(stats, &info, &master))
    }

    async fn fetch_cluster_summary(&self) -> Result<ClusterSummary> {
        let (health, count, settings) = tokio::try_join!(
            timed("cat_health", self.query_timeout, self.cluster.cat_health()),
            timed("cat_count", self.query_timeout, self.cluster.cat_count()),
            timed("cluster_settings", self.query_timeout, self.cluster.cluster_settings()),
        )?;
        ClusterSummaryBuilder::build(&health, &count, &settings)
    }
}
