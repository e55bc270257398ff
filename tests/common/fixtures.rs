use serde_json::{json, Value};

/// Three data nodes, node-b elected master. Replica 0 of logs-2024 is moving
/// from node-b to node-c and the replica of metrics is unassigned.
pub fn cat_indices() -> Value {
    json!([
        {"health": "green", "status": "open", "index": "logs-2024", "pri": "2", "rep": "1",
         "docs.count": "1000", "docs.deleted": "5", "store.size": "2gb"},
        {"health": null, "status": "close", "index": "logs-2020", "pri": null, "rep": null,
         "docs.count": null, "docs.deleted": null, "store.size": null},
        {"health": "yellow", "status": "open", "index": "metrics", "pri": "1", "rep": "1",
         "docs.count": "5", "docs.deleted": "0", "store.size": "12kb"}
    ])
}

pub fn cat_shards() -> Value {
    json!([
        {"index": "logs-2024", "shard": "1", "prirep": "p", "state": "STARTED", "node": "node-b"},
        {"index": "logs-2024", "shard": "0", "prirep": "p", "state": "STARTED", "node": "node-a"},
        {"index": "logs-2024", "shard": "0", "prirep": "r", "state": "RELOCATING",
         "node": "node-b -> 10.0.0.3 Wq3f node-c"},
        {"index": "logs-2024", "shard": "0", "prirep": "r", "state": "INITIALIZING", "node": "node-c"},
        {"index": "logs-2024", "shard": "1", "prirep": "r", "state": "STARTED", "node": "node-a"},
        {"index": "metrics", "shard": "0", "prirep": "p", "state": "STARTED", "node": "node-a"},
        {"index": "metrics", "shard": "0", "prirep": "r", "state": "UNASSIGNED", "node": null}
    ])
}

pub fn cat_shards_without_relocation() -> Value {
    json!([
        {"index": "logs-2024", "shard": "0", "prirep": "p", "state": "STARTED", "node": "node-a"},
        {"index": "logs-2024", "shard": "0", "prirep": "r", "state": "INITIALIZING", "node": "node-c"},
        {"index": "metrics", "shard": "0", "prirep": "p", "state": "STARTED", "node": "node-b"}
    ])
}

pub fn cat_recovery() -> Value {
    json!([
        {"index": "logs-2024", "shard": "0", "stage": "index",
         "bytes_recovered": "50", "bytes_total": "200"},
        {"index": "logs-2024", "shard": "1", "stage": "done",
         "bytes_recovered": "300", "bytes_total": "300"}
    ])
}

fn node_stats(name: &str, ip: &str, roles: &[&str], cpu: f64, load: f64) -> Value {
    json!({
        "name": name,
        "ip": ip,
        "roles": roles,
        "os": {"cpu": {"percent": cpu, "load_average": {"1m": load, "5m": 0.5, "15m": 0.2}}},
        "jvm": {"mem": {"heap_used_percent": 45}},
        "fs": {"total": {"total_in_bytes": 1000, "free_in_bytes": 600, "available_in_bytes": 500}}
    })
}

pub fn nodes_stats() -> Value {
    json!({
        "cluster_name": "prod-search",
        "nodes": {
            "id-c": node_stats("node-c", "10.0.0.3", &["data"], 3.0, 0.4),
            "id-a": node_stats("node-a", "10.0.0.1", &["data", "ingest"], 22.0, 3.9),
            "id-b": node_stats("node-b", "10.0.0.2", &["data", "master"], 41.0, 8.0)
        }
    })
}

pub fn nodes_os_info() -> Value {
    json!({
        "nodes": {
            "id-a": {"os": {"available_processors": 4, "allocated_processors": 4}},
            "id-b": {"os": {"available_processors": 8, "allocated_processors": 8}},
            "id-c": {"os": {"available_processors": 2, "allocated_processors": 2}}
        }
    })
}

pub fn cat_master() -> Value {
    json!([{"id": "id-b", "host": "10.0.0.2", "ip": "10.0.0.2", "node": "node-b"}])
}

pub fn cat_health() -> Value {
    json!([{
        "epoch": "1700000000", "timestamp": "10:00:00", "cluster": "prod-search",
        "status": "yellow", "node.total": "3", "node.data": "3", "shards": "6", "pri": "3",
        "relo": "1", "init": "0", "unassign": "1"
    }])
}

pub fn cat_count() -> Value {
    json!([{"epoch": "1700000000", "timestamp": "10:00:00", "count": "1005"}])
}

pub fn cluster_settings() -> Value {
    json!({"persistent": {}, "transient": {}})
}
