use crate::domain::entities::{ClusterSettings, ClusterStatus, ClusterSummary};
use crate::error::{utils::ErrorUtils, Result};
use crate::infrastructure::cluster_client::{CatCount, CatHealth, ClusterSettingsResponse};

const HEALTH_QUERY: &str = "cat_health";
const COUNT_QUERY: &str = "cat_count";

pub struct ClusterSummaryBuilder;

impl ClusterSummaryBuilder {
    /// Combine the health, count and settings snapshots; the index count is filled in later
    pub fn build(
        health: &[CatHealth],
        count: &[CatCount],
        settings: &ClusterSettingsResponse,
    ) -> Result<ClusterSummary> {
        let health = health
            .first()
            .ok_or_else(|| ErrorUtils::upstream_error(HEALTH_QUERY, "empty health response"))?;
        let count = count
            .first()
            .ok_or_else(|| ErrorUtils::upstream_error(COUNT_QUERY, "empty count response"))?;

        let cluster_status = ClusterStatus::parse(&health.status).ok_or_else(|| {
            ErrorUtils::upstream_error(
                HEALTH_QUERY,
                format!("Unknown cluster status '{}'", health.status),
            )
        })?;

        let total_shards: u32 = ErrorUtils::parse_cat_number(&health.shards, "shards", HEALTH_QUERY)?;
        let primaries: u32 = ErrorUtils::parse_cat_number(&health.pri, "pri", HEALTH_QUERY)?;
        let replicas = total_shards.checked_sub(primaries).ok_or_else(|| {
            ErrorUtils::upstream_error(
                HEALTH_QUERY,
                format!("{} primaries exceed {} total shards", primaries, total_shards),
            )
        })?;

        Ok(ClusterSummary {
            cluster_name: health.cluster.clone(),
            cluster_status,
            number_of_nodes: ErrorUtils::parse_cat_number(&health.node_total, "node.total", HEALTH_QUERY)?,
            num_of_primary_shards: primaries,
            num_of_replica_shards: replicas,
            relocating_shards: ErrorUtils::parse_cat_number(&health.relo, "relo", HEALTH_QUERY)?,
            initializing_shards: ErrorUtils::parse_cat_number(&health.init, "init", HEALTH_QUERY)?,
            unassigned_shards: ErrorUtils::parse_cat_number(&health.unassign, "unassign", HEALTH_QUERY)?,
            number_of_docs: ErrorUtils::parse_cat_number(&count.count, "count", COUNT_QUERY)?,
            num_of_indices: 0,
            settings: ClusterSettings {
                allocation: settings.transient.allocation_enable.clone(),
            },
        })
    }
}
