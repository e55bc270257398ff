//! Shard domain entities
//!
//! A shard record is one row of the cluster's shard listing. Grid leaves
//! (`ShardEntry`) are the trimmed-down form the dashboard renders.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a shard copy is the primary or a replica
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShardType {
    Primary,
    Replica,
}

impl ShardType {
    /// Classify the raw `prirep` marker; anything but `p` or `r` is a data-integrity fault
    pub fn from_marker(index: &str, shard: u32, marker: &str) -> Result<Self> {
        match marker {
            "p" => Ok(ShardType::Primary),
            "r" => Ok(ShardType::Replica),
            other => Err(AppError::InvalidShardType {
                index: index.to_string(),
                shard,
                marker: other.to_string(),
            }),
        }
    }
}

/// Allocation state reported for a shard copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShardState {
    Started,
    Relocating,
    Initializing,
    Unassigned,
}

impl ShardState {
    /// Shards in these states are mid-recovery and may carry progress
    pub fn is_recovering(&self) -> bool {
        matches!(self, ShardState::Relocating | ShardState::Initializing)
    }
}

impl fmt::Display for ShardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShardState::Started => "STARTED",
            ShardState::Relocating => "RELOCATING",
            ShardState::Initializing => "INITIALIZING",
            ShardState::Unassigned => "UNASSIGNED",
        };
        write!(f, "{}", name)
    }
}

/// A classified shard copy
#[derive(Debug, Clone, PartialEq)]
pub struct ShardRecord {
    /// Index the shard belongs to
    pub index: String,
    /// Shard number within the index
    pub shard_number: u32,
    /// Primary or replica copy
    pub shard_type: ShardType,
    /// Current allocation state
    pub state: ShardState,
    /// Node holding the copy. For relocating shards this is the source node only.
    pub node: Option<String>,
}

/// Grid leaf rendered by the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShardEntry {
    #[serde(rename = "shard")]
    pub shard_number: u32,
    pub state: ShardState,
    /// Recovery completion, present only for relocating and initializing copies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

/// Shard entries of one index split by copy type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShardBuckets {
    pub primaries: Vec<ShardEntry>,
    pub replicas: Vec<ShardEntry>,
}

impl ShardBuckets {
    pub fn bucket_mut(&mut self, shard_type: ShardType) -> &mut Vec<ShardEntry> {
        match shard_type {
            ShardType::Primary => &mut self.primaries,
            ShardType::Replica => &mut self.replicas,
        }
    }

    /// Order both buckets by shard number; the UI relies on this for stable rendering
    pub fn sort(&mut self) {
        self.primaries.sort_by_key(|entry| entry.shard_number);
        self.replicas.sort_by_key(|entry| entry.shard_number);
    }
}
