//! Node resource normalization
//!
//! Readings are truncated, never rounded: small fluctuations then leave the
//! integers unchanged and the dashboard doesn't re-render on noise.

use crate::domain::entities::NodeMetrics;
use crate::infrastructure::cluster_client::NodeStats;

/// Raw readings for one node, with the core count passed explicitly
#[derive(Debug, Clone, Copy)]
pub struct RawNodeReadings {
    pub cpu_percent: f64,
    pub heap_used_percent: f64,
    pub load_average_1m: f64,
    pub core_count: u32,
    pub fs_total_bytes: u64,
    pub fs_available_bytes: u64,
}

impl RawNodeReadings {
    pub fn from_stats(stats: &NodeStats, core_count: u32) -> Self {
        Self {
            cpu_percent: stats.os.cpu.percent,
            heap_used_percent: stats.jvm.mem.heap_used_percent,
            load_average_1m: stats.os.cpu.load_average.one_minute,
            core_count,
            fs_total_bytes: stats.fs.total.total_in_bytes,
            fs_available_bytes: stats.fs.total.available_in_bytes,
        }
    }
}

pub struct MetricsNormalizer;

impl MetricsNormalizer {
    pub fn normalize(readings: &RawNodeReadings) -> NodeMetrics {
        NodeMetrics {
            cpu_percent: truncate(readings.cpu_percent),
            heap_percent: truncate(readings.heap_used_percent),
            load1_percent: Self::load_percent(readings.load_average_1m, readings.core_count),
            disk_percent: Self::disk_percent(readings.fs_available_bytes, readings.fs_total_bytes),
        }
    }

    /// Load average per core. A node reporting zero cores counts as one.
    pub fn load_percent(load_average_1m: f64, core_count: u32) -> u32 {
        truncate(load_average_1m / f64::from(core_count.max(1)))
    }

    pub fn disk_percent(available_bytes: u64, total_bytes: u64) -> u32 {
        if total_bytes == 0 {
            return 0;
        }
        // u128 keeps `available * 100` from overflowing on very large volumes
        (u128::from(available_bytes) * 100 / u128::from(total_bytes)) as u32
    }
}

fn truncate(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.trunc() as u32
    } else {
        0
    }
}
