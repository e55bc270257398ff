//! Node x index x shard-type grid
//!
//! A single pass over the shard listing places every copy in the bucket of the
//! node that holds it. Unassigned copies have no node: they are collected per
//! index instead and never appear under a node key.

use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

use super::relocation::RelocationProgress;
use crate::domain::entities::{NodeRecord, ShardBuckets, ShardEntry, ShardRecord, ShardState, ShardType};
use crate::error::{utils::ErrorUtils, Result};
use crate::infrastructure::cluster_client::CatShard;

/// Index name to its shard buckets, ordered by index name
pub type IndexBuckets = BTreeMap<String, ShardBuckets>;

#[derive(Debug, Default)]
pub struct ShardGrid {
    /// Node name to the indices it holds
    pub by_node: HashMap<String, IndexBuckets>,
    /// Index name to its unassigned copies
    pub unassigned: IndexBuckets,
}

pub struct ShardGridAggregator;

impl ShardGridAggregator {
    /// Classify a raw shard row. Relocating rows keep only their source node.
    pub fn classify(shard: &CatShard) -> Result<ShardRecord> {
        let shard_number: u32 = ErrorUtils::parse_cat_number(&shard.shard, "shard", "cat_shards")?;
        let shard_type = ShardType::from_marker(&shard.index, shard_number, &shard.prirep)?;

        let node = shard
            .node
            .as_deref()
            .map(|node| match shard.state {
                ShardState::Relocating => node.split("->").next().unwrap_or(node).trim(),
                _ => node.trim(),
            })
            .filter(|node| !node.is_empty())
            .map(str::to_string);

        Ok(ShardRecord {
            index: shard.index.clone(),
            shard_number,
            shard_type,
            state: shard.state,
            node,
        })
    }

    pub fn aggregate(shards: &[CatShard], progress: &RelocationProgress) -> Result<ShardGrid> {
        let mut grid = ShardGrid::default();

        for raw in shards {
            let record = Self::classify(raw)?;
            let entry = ShardEntry {
                shard_number: record.shard_number,
                state: record.state,
                progress: Self::progress_for(&record, progress),
            };

            if record.state == ShardState::Unassigned {
                if let Some(node) = &record.node {
                    debug!(
                        "Unassigned shard {} of '{}' reported node '{}', placing it at index level only",
                        record.shard_number, record.index, node
                    );
                }
                grid.unassigned
                    .entry(record.index.clone())
                    .or_default()
                    .bucket_mut(record.shard_type)
                    .push(entry);
                continue;
            }

            let node = match record.node {
                Some(node) => node,
                None => {
                    warn!(
                        "{} shard {} of '{}' has no node, leaving it out of the grid",
                        record.state, record.shard_number, record.index
                    );
                    continue;
                }
            };

            grid.by_node
                .entry(node)
                .or_default()
                .entry(record.index)
                .or_default()
                .bucket_mut(record.shard_type)
                .push(entry);
        }

        for buckets in grid.by_node.values_mut().flat_map(|indices| indices.values_mut()) {
            buckets.sort();
        }
        for buckets in grid.unassigned.values_mut() {
            buckets.sort();
        }

        Ok(grid)
    }

    /// Recovery data can lag shard state, so a missing entry omits progress
    fn progress_for(record: &ShardRecord, progress: &RelocationProgress) -> Option<u8> {
        if !record.state.is_recovering() {
            return None;
        }
        let key = (record.index.clone(), record.shard_number);
        let found = progress.get(&key).copied();
        if found.is_none() {
            debug!(
                "No recovery progress for {} shard {} of '{}'",
                record.state, record.shard_number, record.index
            );
        }
        found
    }

    /// Hand each node its slice of the grid; shards on unknown nodes are dropped
    pub fn attach_to_nodes(nodes: &mut [NodeRecord], mut by_node: HashMap<String, IndexBuckets>) {
        for node in nodes.iter_mut() {
            node.indices = by_node.remove(&node.name).unwrap_or_default();
        }
        for (name, indices) in by_node {
            warn!(
                "Node '{}' holds shards of {} indices but is missing from node stats",
                name,
                indices.len()
            );
        }
    }
}
