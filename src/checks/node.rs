//! Local node check (`_cluster/nodes/_local/stats`).
//!
//! Sizes are shown humanized, with the raw byte count one verbosity level up.

use serde_json::Value;
use termkit::{ReportLine, Tone};

use super::{Handler, ReportError, bytes, field, number, text};

pub struct NodeCheck;

impl Handler for NodeCheck {
    fn report(&self, tree: &Value) -> Result<Vec<ReportLine>, ReportError> {
        let node = local_node(tree)?;
        let stat = |path: &[&str]| field(node, path);

        let mut lines = vec![ReportLine::kv(0, "name", text(node.get("name"))).tone(Tone::Cyan)];

        lines.extend(size_lines("index_size", stat(&["indices", "store", "size_in_bytes"])));
        lines.push(ReportLine::kv(0, "docs", text(stat(&["indices", "docs", "count"]))).at_level(1));
        lines.push(ReportLine::kv(
            0,
            "open_file_descriptors",
            text(stat(&["process", "open_file_descriptors"])),
        ));

        lines.push(ReportLine::kv(0, "jvm_threads", text(stat(&["jvm", "threads", "count"]))));
        lines.push(ReportLine::kv(
            0,
            "jvm_threads_peak",
            text(stat(&["jvm", "threads", "peak_count"])),
        ));
        lines.extend(size_lines("heap_used", stat(&["jvm", "mem", "heap_used_in_bytes"])));
        lines.extend(size_lines(
            "heap_committed",
            stat(&["jvm", "mem", "heap_committed_in_bytes"]),
        ));

        lines.push(ReportLine::kv(0, "gc_count", text(stat(&["jvm", "gc", "collection_count"]))));
        lines.extend(time_lines(0, "gc_time", stat(&["jvm", "gc", "collection_time_in_millis"])));
        lines.extend(collector_lines(stat(&["jvm", "gc", "collectors"])));

        for direction in ["rx", "tx"] {
            let count = format!("{direction}_count");
            let size = format!("{direction}_size_in_bytes");
            lines.push(ReportLine::kv(
                0,
                format!("transport_{direction}_count"),
                text(stat(&["transport", count.as_str()])),
            ));
            lines.extend(size_lines(
                &format!("transport_{direction}_size"),
                stat(&["transport", size.as_str()]),
            ));
        }

        Ok(lines)
    }
}

/// The single node of a `_local` stats query.
fn local_node(tree: &Value) -> Result<&Value, ReportError> {
    tree.get("nodes")
        .and_then(Value::as_object)
        .and_then(|nodes| nodes.values().next())
        .ok_or(ReportError::NoLocalNode)
}

fn size_lines(key: &str, value: Option<&Value>) -> [ReportLine; 2] {
    [
        ReportLine::kv(0, key, bytes(value)),
        ReportLine::kv(0, format!("{key}_in_bytes"), text(value)).at_level(1),
    ]
}

/// Collection time in seconds, raw millis one level up.
fn time_lines(indent: usize, key: &str, millis: Option<&Value>) -> [ReportLine; 2] {
    let seconds = number(millis)
        .map(|ms| format!("{:.2} s", ms / 1000.0))
        .unwrap_or_default();
    [
        ReportLine::kv(indent, key, seconds),
        ReportLine::kv(indent, format!("{key}_in_millis"), text(millis)).at_level(1),
    ]
}

/// Per-collector breakdown, entirely verbose.
fn collector_lines(collectors: Option<&Value>) -> Vec<ReportLine> {
    let Some(collectors) = collectors.and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut lines = vec![ReportLine::text(0, "gc_collectors").at_level(1)];
    for (name, stats) in collectors {
        lines.push(ReportLine::text(1, name.as_str()).at_level(1));
        lines.push(ReportLine::kv(2, "count", text(stats.get("collection_count"))).at_level(1));
        lines.extend(
            time_lines(2, "time", stats.get("collection_time_in_millis")).map(|l| l.at_level(1)),
        );
    }
    lines
}
