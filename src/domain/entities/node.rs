//! Node domain entities

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::shard::ShardBuckets;

/// Integer resource readings, truncated to keep the UI from re-rendering on noise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetrics {
    #[serde(rename = "CPUPercent")]
    pub cpu_percent: u32,
    pub heap_percent: u32,
    /// 1 minute load average divided by the node's core count
    pub load1_percent: u32,
    /// Share of the filesystem still available
    pub disk_percent: u32,
}

/// One cluster node with its slice of the shard grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    /// Upstream node id, used to match the elected master
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub ip: String,
    pub roles: BTreeSet<String>,
    pub is_master: bool,
    pub metrics: NodeMetrics,
    /// Index name to the shard copies this node holds, ordered by index name
    pub indices: BTreeMap<String, ShardBuckets>,
}
