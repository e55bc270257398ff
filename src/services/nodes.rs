//! Node records from stats, OS info and the elected master

use std::collections::BTreeMap;
use tracing::debug;

use super::metrics::{MetricsNormalizer, RawNodeReadings};
use crate::domain::entities::NodeRecord;
use crate::infrastructure::cluster_client::{CatMaster, NodesInfoResponse, NodesStatsResponse};

pub struct NodeAssembler;

impl NodeAssembler {
    /// One record per node in the stats response, ordered by name, with an empty grid slice
    pub fn assemble(
        stats: NodesStatsResponse,
        info: &NodesInfoResponse,
        master: &[CatMaster],
    ) -> Vec<NodeRecord> {
        let master_id = master.first().map(|m| m.id.as_str());
        if master_id.is_none() {
            debug!("Cluster reported no elected master");
        }

        let mut nodes: Vec<NodeRecord> = stats
            .nodes
            .into_iter()
            .map(|(id, node)| {
                let core_count = Self::core_count(info, &id);
                let metrics = MetricsNormalizer::normalize(&RawNodeReadings::from_stats(&node, core_count));

                NodeRecord {
                    is_master: master_id == Some(id.as_str()),
                    id,
                    name: node.name,
                    ip: node.ip,
                    roles: node.roles.into_iter().collect(),
                    metrics,
                    indices: BTreeMap::new(),
                }
            })
            .collect();

        nodes.sort_by(|a, b| a.name.cmp(&b.name));
        nodes
    }

    fn core_count(info: &NodesInfoResponse, node_id: &str) -> u32 {
        match info.nodes.get(node_id).and_then(|n| n.os.as_ref()).and_then(|os| os.core_count()) {
            Some(cores) => cores,
            None => {
                debug!("No processor count for node {}, assuming one core", node_id);
                1
            }
        }
    }
}
