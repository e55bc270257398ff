pub mod cluster_summary;
pub mod grid_service;
pub mod index_formatter;
pub mod metrics;
pub mod nodes;
pub mod relocation;
pub mod shard_grid;
pub mod upstream;

// Re-export commonly used services
pub use cluster_summary::ClusterSummaryBuilder;
pub use grid_service::{ShardGridResponse, ShardGridService};
pub use index_formatter::IndexDescriptorFormatter;
pub use metrics::MetricsNormalizer;
pub use nodes::NodeAssembler;
pub use relocation::{RelocationProgress, RelocationProgressTracker};
pub use shard_grid::{ShardGrid, ShardGridAggregator};
