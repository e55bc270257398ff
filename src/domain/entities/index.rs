//! Index domain entities

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::shard::ShardBuckets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexStatus {
    Open,
    Close,
}

/// Numeric catalog fields, reported only for open indices.
/// A red index may be missing any of them; absent fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primaries: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_deleted: Option<u64>,
    /// Human-readable size exactly as the cluster reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRecord {
    #[serde(flatten)]
    pub stats: Option<IndexStats>,
    pub status: IndexStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unassigned_shards: Option<ShardBuckets>,
}
