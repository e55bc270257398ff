//! Per-index catalog records merged with aliases and unassigned shards

use std::collections::BTreeMap;
use tracing::debug;

use super::shard_grid::IndexBuckets;
use crate::domain::entities::{IndexRecord, IndexStats, IndexStatus};
use crate::error::{utils::ErrorUtils, Result};
use crate::infrastructure::cluster_client::CatIndex;
use crate::infrastructure::IndexAliases;

const INDICES_QUERY: &str = "cat_indices";

pub struct IndexDescriptorFormatter;

impl IndexDescriptorFormatter {
    /// Format one catalog row. Closed indices carry only status and aliases.
    pub fn format(row: &CatIndex, aliases: &IndexAliases) -> Result<IndexRecord> {
        let aliases = aliases.get(&row.index).filter(|names| !names.is_empty()).cloned();

        let status = match row.status.as_str() {
            "open" => IndexStatus::Open,
            "close" => IndexStatus::Close,
            other => {
                return Err(ErrorUtils::upstream_error(
                    INDICES_QUERY,
                    format!("Unknown status '{}' for index '{}'", other, row.index),
                ))
            }
        };

        let stats = match status {
            IndexStatus::Close => None,
            IndexStatus::Open => Some(IndexStats {
                primaries: reported_number(row, "pri", &row.pri)?,
                replicas: reported_number(row, "rep", &row.rep)?,
                docs_count: reported_number(row, "docs.count", &row.docs_count)?,
                docs_deleted: reported_number(row, "docs.deleted", &row.docs_deleted)?,
                store_size: reported(row, "store.size", &row.store_size).map(str::to_string),
            }),
        };

        Ok(IndexRecord {
            stats,
            status,
            aliases,
            unassigned_shards: None,
        })
    }

    /// Format the whole catalog and attach unassigned shards to their indices
    pub fn format_all(
        rows: &[CatIndex],
        aliases: &IndexAliases,
        mut unassigned: IndexBuckets,
    ) -> Result<BTreeMap<String, IndexRecord>> {
        let mut indices = BTreeMap::new();
        for row in rows {
            let mut record = Self::format(row, aliases)?;
            record.unassigned_shards = unassigned.remove(&row.index);
            indices.insert(row.index.clone(), record);
        }
        Ok(indices)
    }
}

/// Red indices report null catalog columns; those fields are omitted, not fatal
fn reported<'a>(row: &CatIndex, field: &str, value: &'a Option<String>) -> Option<&'a str> {
    let value = value.as_deref();
    if value.is_none() {
        debug!("Open index '{}' reported no {}", row.index, field);
    }
    value
}

fn reported_number<T: std::str::FromStr>(
    row: &CatIndex,
    field: &str,
    value: &Option<String>,
) -> Result<Option<T>> {
    reported(row, field, value)
        .map(|value| ErrorUtils::parse_cat_number(value, field, INDICES_QUERY))
        .transpose()
}
