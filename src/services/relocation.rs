//! Recovery progress for shards that are moving between nodes
//!
//! Only indices with at least one relocating shard are ever queried, since an
//! unscoped recovery listing is expensive on large clusters.

use std::collections::{BTreeSet, HashMap};
use std::time::Duration;
use tracing::debug;

use super::upstream::timed;
use crate::domain::entities::ShardState;
use crate::error::{utils::ErrorUtils, Result};
use crate::infrastructure::cluster_client::{CatRecovery, CatShard, ClusterClient};

const RECOVERY_QUERY: &str = "cat_recovery";

/// (index, shard number) to completion percentage
pub type RelocationProgress = HashMap<(String, u32), u8>;

pub struct RelocationProgressTracker;

impl RelocationProgressTracker {
    /// Deduplicated, sorted names of indices with a relocating shard
    pub fn relocating_indices(shards: &[CatShard]) -> Vec<String> {
        shards
            .iter()
            .filter(|shard| shard.state == ShardState::Relocating)
            .map(|shard| shard.index.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Query recovery detail for the relocating indices and build the progress map
    pub async fn track(
        client: &dyn ClusterClient,
        shards: &[CatShard],
        query_timeout: Duration,
    ) -> Result<RelocationProgress> {
        let indices = Self::relocating_indices(shards);
        if indices.is_empty() {
            debug!("No relocating shards, skipping recovery query");
            return Ok(RelocationProgress::new());
        }

        debug!("Fetching recovery detail for {} relocating indices", indices.len());
        let rows = timed(RECOVERY_QUERY, query_timeout, client.cat_recovery(&indices)).await?;
        Self::progress_from_recovery(&rows)
    }

    /// Map every recovery that has not reached the "done" stage to its percentage
    pub fn progress_from_recovery(rows: &[CatRecovery]) -> Result<RelocationProgress> {
        let mut progress = RelocationProgress::new();
        for row in rows.iter().filter(|row| row.stage != "done") {
            let shard: u32 = ErrorUtils::parse_cat_number(&row.shard, "shard", RECOVERY_QUERY)?;
            let recovered: f64 =
                ErrorUtils::parse_cat_number(&row.bytes_recovered, "bytes_recovered", RECOVERY_QUERY)?;
            let total: f64 =
                ErrorUtils::parse_cat_number(&row.bytes_total, "bytes_total", RECOVERY_QUERY)?;

            progress.insert((row.index.clone(), shard), Self::percent(recovered, total));
        }
        Ok(progress)
    }

    /// Truncated completion, clamped to 0..=100. A recovery that has not sized
    /// its files yet reports a zero total and counts as not started.
    pub fn percent(recovered: f64, total: f64) -> u8 {
        if total <= 0.0 {
            return 0;
        }
        (recovered * 100.0 / total).trunc().clamp(0.0, 100.0) as u8
    }
}
