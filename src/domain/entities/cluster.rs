//! Cluster-wide summary entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cluster health colour, serialized title-cased for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClusterStatus {
    Green,
    Yellow,
    Red,
}

impl ClusterStatus {
    /// Parse the lowercase status reported upstream
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "green" => Some(ClusterStatus::Green),
            "yellow" => Some(ClusterStatus::Yellow),
            "red" => Some(ClusterStatus::Red),
            _ => None,
        }
    }
}

impl fmt::Display for ClusterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClusterStatus::Green => "Green",
            ClusterStatus::Yellow => "Yellow",
            ClusterStatus::Red => "Red",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSettings {
    /// Shard allocation mode; "all" means no restriction
    pub allocation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSummary {
    pub cluster_name: String,
    pub cluster_status: ClusterStatus,
    pub number_of_nodes: u32,
    pub num_of_primary_shards: u32,
    pub num_of_replica_shards: u32,
    pub relocating_shards: u32,
    pub initializing_shards: u32,
    pub unassigned_shards: u32,
    pub number_of_docs: u64,
    pub num_of_indices: usize,
    pub settings: ClusterSettings,
}
