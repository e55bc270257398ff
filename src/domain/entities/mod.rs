//! Domain entities for the shard grid dashboard
//!
//! Every entity is a request-scoped snapshot built from upstream query results.

pub mod cluster;
pub mod index;
pub mod node;
pub mod shard;

pub use cluster::{ClusterSettings, ClusterStatus, ClusterSummary};
pub use index::{IndexRecord, IndexStats, IndexStatus};
pub use node::{NodeMetrics, NodeRecord};
pub use shard::{ShardBuckets, ShardEntry, ShardRecord, ShardState, ShardType};
