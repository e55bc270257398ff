use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use super::cluster_client::{CatAlias, ClusterClient};
use crate::error::Result;

/// Index name to the alias names pointing at it
pub type IndexAliases = HashMap<String, BTreeSet<String>>;

/// Source of alias names, resolved independently of shard topology
#[async_trait]
pub trait AliasResolver: Send + Sync {
    async fn index_aliases(&self) -> Result<IndexAliases>;
}

/// Resolves aliases through the cluster's alias listing
pub struct ClusterAliasResolver {
    client: Arc<dyn ClusterClient>,
}

impl ClusterAliasResolver {
    pub fn new(client: Arc<dyn ClusterClient>) -> Self {
        Self { client }
    }
}

pub fn group_aliases(rows: Vec<CatAlias>) -> IndexAliases {
    let mut aliases = IndexAliases::new();
    for row in rows {
        aliases.entry(row.index).or_default().insert(row.alias);
    }
    aliases
}

#[async_trait]
impl AliasResolver for ClusterAliasResolver {
    async fn index_aliases(&self) -> Result<IndexAliases> {
        let rows = self.client.cat_aliases().await?;
        Ok(group_aliases(rows))
    }
}
