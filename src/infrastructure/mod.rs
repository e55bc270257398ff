pub mod aliases;
pub mod cluster_client;

pub use aliases::{AliasResolver, ClusterAliasResolver, IndexAliases};
pub use cluster_client::{ClusterClient, HttpClusterClient};
