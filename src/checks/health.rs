//! Cluster health check (`_cluster/health`).
//!
//! The status string doubles as the color of the health line. Shard
//! anomalies are hidden behind verbosity while the cluster is green and
//! shown in alarm colors as soon as it is not.

use serde_json::Value;
use termkit::{ReportLine, Tone};

use super::{Handler, ReportError, text};

/// Shard counters: report key, response field, alarm tone.
const SHARD_COUNTERS: [(&str, &str, Tone); 3] = [
    ("shards_unassigned", "unassigned_shards", Tone::Red),
    ("shards_relocating", "relocating_shards", Tone::Magenta),
    ("shards_initializing", "initializing_shards", Tone::Yellow),
];

pub struct HealthCheck;

impl Handler for HealthCheck {
    fn report(&self, tree: &Value) -> Result<Vec<ReportLine>, ReportError> {
        let status = text(tree.get("status"));
        let tone = Tone::from_status(&status);
        if tone.is_none() {
            log::warn!("unrecognized cluster status '{status}', rendering uncolored");
        }
        let green = status == "green";

        let mut lines = vec![
            ReportLine::kv(0, "name", text(tree.get("cluster_name"))).tone(Tone::Cyan),
            ReportLine::kv(0, "health", status).maybe_tone(tone),
            ReportLine::kv(0, "nodes", text(tree.get("number_of_nodes"))).at_level(1),
        ];

        for (key, field, alarm) in SHARD_COUNTERS {
            let line = ReportLine::kv(0, key, text(tree.get(field)));
            lines.push(if green { line.at_level(1) } else { line.tone(alarm) });
        }

        Ok(lines)
    }
}
