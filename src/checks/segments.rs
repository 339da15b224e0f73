//! Segment count check (`_segments`).
//!
//! Shards are listed in ascending id order within each index. Every copy of a
//! shard (primary or replica) counts as one shard. A well merged index has one
//! search segment per shard.

use std::cmp::Ordering;

use serde_json::{Map, Value};
use termkit::{ReportLine, Tone, format_bytes};

use super::{Handler, ReportError, number, text};

pub struct SegmentsCheck;

impl Handler for SegmentsCheck {
    fn report(&self, tree: &Value) -> Result<Vec<ReportLine>, ReportError> {
        let mut lines = Vec::new();

        let indices = tree.get("indices").and_then(Value::as_object);
        for (name, index) in indices.into_iter().flatten() {
            lines.push(ReportLine::kv(0, "index", name.as_str()).tone(Tone::Cyan));
            lines.extend(index_lines(index));
        }

        Ok(lines)
    }
}

fn index_lines(index: &Value) -> Vec<ReportLine> {
    let mut lines = Vec::new();
    let mut shard_count = 0u64;
    let mut total_segments = 0u64;
    let mut total_bytes = 0.0;

    let mut shards: Vec<(&String, &Value)> = index
        .get("shards")
        .and_then(Value::as_object)
        .map(|shards| shards.iter().collect())
        .unwrap_or_default();
    shards.sort_by(|a, b| shard_order(a.0, b.0));

    for (id, copies) in shards {
        for copy in shard_copies(copies) {
            let segments = copy.get("num_search_segments");
            let count = number(segments).map_or(0, |n| n as u64);
            let size = copy
                .get("segments")
                .and_then(Value::as_object)
                .map_or(0.0, segment_bytes);

            shard_count += 1;
            total_segments += count;
            total_bytes += size;

            let tone = if count > 1 { Tone::Yellow } else { Tone::Green };
            lines.push(ReportLine::kv(1, "shard", shard_label(id, copy)));
            lines.push(ReportLine::kv(2, "segments", text(segments)).tone(tone));
            lines.push(ReportLine::kv(2, "size", format_bytes(size)).at_level(1));
            lines.push(ReportLine::kv(2, "size_in_bytes", format!("{size}")).at_level(2));
        }
    }

    let (ratio, tone) = segments_to_shards(total_segments, shard_count);
    lines.push(ReportLine::kv(1, "shards", shard_count.to_string()).at_level(1));
    lines.push(ReportLine::kv(1, "segments", total_segments.to_string()).at_level(1));
    lines.push(ReportLine::kv(1, "segments_to_shards", ratio).tone(tone));
    lines.push(ReportLine::kv(1, "total_size", format_bytes(total_bytes)).at_level(1));
    lines.push(ReportLine::kv(1, "total_size_in_bytes", format!("{total_bytes}")).at_level(2));
    lines
}

/// Segments per shard with two decimals, `0` for an index without shards.
///
/// Green only when every shard holds exactly one segment on average.
pub(crate) fn segments_to_shards(total_segments: u64, shard_count: u64) -> (String, Tone) {
    if shard_count == 0 {
        return ("0".to_string(), Tone::Yellow);
    }
    let ratio = total_segments as f64 / shard_count as f64;
    let tone = if total_segments == shard_count {
        Tone::Green
    } else {
        Tone::Yellow
    };
    (format!("{ratio:.2}"), tone)
}

/// Numeric shard id order, non-numeric ids last.
fn shard_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// A shard id maps to a list of copies; older clusters send a single object.
fn shard_copies(copies: &Value) -> Vec<&Value> {
    match copies {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => vec![copies],
        _ => Vec::new(),
    }
}

fn shard_label(id: &str, copy: &Value) -> String {
    match copy.get("routing").and_then(|r| r.get("primary")).and_then(Value::as_bool) {
        Some(true) => format!("{id} (primary)"),
        Some(false) => format!("{id} (replica)"),
        None => id.to_string(),
    }
}

fn segment_bytes(segments: &Map<String, Value>) -> f64 {
    segments
        .values()
        .filter_map(|segment| number(segment.get("size_in_bytes")))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn copy(primary: bool, segments: u64, sizes: &[u64]) -> Value {
        let segs: Map<String, Value> = sizes
            .iter()
            .enumerate()
            .map(|(i, size)| (format!("_{i}"), json!({"size_in_bytes": size, "search": true})))
            .collect();
        json!({
            "routing": {"state": "STARTED", "primary": primary, "node": "n1"},
            "num_committed_segments": segments,
            "num_search_segments": segments,
            "segments": segs,
        })
    }

    fn lines_for(index: Value) -> Vec<ReportLine> {
        SegmentsCheck
            .report(&json!({"indices": {"logs": index}}))
            .unwrap()
    }

    fn find<'a>(lines: &'a [ReportLine], key: &str) -> &'a ReportLine {
        lines
            .iter()
            .find(|l| l.indent == 1 && l.key.as_deref() == Some(key))
            .unwrap_or_else(|| panic!("no line for {key}"))
    }

    #[test]
    fn test_ratio_no_shards() {
        assert_eq!(segments_to_shards(0, 0), ("0".to_string(), Tone::Yellow));
        assert_eq!(segments_to_shards(7, 0).0, "0");
    }

    #[test]
    fn test_ratio_one_is_green() {
        assert_eq!(segments_to_shards(4, 4), ("1.00".to_string(), Tone::Green));
    }

    #[test]
    fn test_ratio_above_one_is_yellow() {
        assert_eq!(segments_to_shards(6, 4), ("1.50".to_string(), Tone::Yellow));
        assert_eq!(segments_to_shards(1, 3), ("0.33".to_string(), Tone::Yellow));
    }

    #[test]
    fn test_shard_order_is_numeric() {
        let mut ids = vec!["10", "2", "0", "1"];
        ids.sort_by(|a, b| shard_order(a, b));
        assert_eq!(ids, ["0", "1", "2", "10"]);
    }

    #[test]
    fn test_shards_visited_in_ascending_order() {
        let lines = lines_for(json!({
            "shards": {
                "10": [copy(true, 1, &[100])],
                "2": [copy(true, 1, &[100])],
                "0": [copy(true, 1, &[100])],
            }
        }));
        let shards: Vec<_> = lines
            .iter()
            .filter(|l| l.key.as_deref() == Some("shard"))
            .map(|l| l.value.as_str())
            .collect();
        assert_eq!(shards, ["0 (primary)", "2 (primary)", "10 (primary)"]);
    }

    #[test]
    fn test_per_shard_segment_color() {
        let lines = lines_for(json!({
            "shards": {"0": [copy(true, 3, &[10, 20, 30]), copy(false, 1, &[60])]}
        }));
        let segments: Vec<_> = lines
            .iter()
            .filter(|l| l.indent == 2 && l.key.as_deref() == Some("segments"))
            .collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].value, "3");
        assert_eq!(segments[0].tone, Some(Tone::Yellow));
        assert_eq!(segments[1].value, "1");
        assert_eq!(segments[1].tone, Some(Tone::Green));
    }

    #[test]
    fn test_index_totals() {
        let lines = lines_for(json!({
            "shards": {
                "0": [copy(true, 2, &[1024, 1024]), copy(false, 1, &[2048])],
                "1": [copy(true, 2, &[512, 512]), copy(false, 1, &[1024])],
            }
        }));
        assert_eq!(find(&lines, "shards").value, "4");
        assert_eq!(find(&lines, "segments").value, "6");
        assert_eq!(find(&lines, "segments_to_shards").value, "1.50");
        assert_eq!(find(&lines, "segments_to_shards").tone, Some(Tone::Yellow));
        assert_eq!(find(&lines, "total_size").value, "6.00 kb");
        assert_eq!(find(&lines, "total_size").min_verbosity, 1);
        assert_eq!(find(&lines, "total_size_in_bytes").value, "6144");
        assert_eq!(find(&lines, "total_size_in_bytes").min_verbosity, 2);
    }

    #[test]
    fn test_shard_sizes_verbosity() {
        let lines = lines_for(json!({"shards": {"0": [copy(true, 1, &[2048])]}}));
        let size = lines.iter().find(|l| l.key.as_deref() == Some("size")).unwrap();
        assert_eq!(size.value, "2.00 kb");
        assert_eq!(size.min_verbosity, 1);
        let raw = lines
            .iter()
            .find(|l| l.key.as_deref() == Some("size_in_bytes"))
            .unwrap();
        assert_eq!(raw.value, "2048");
        assert_eq!(raw.min_verbosity, 2);
    }

    #[test]
    fn test_fully_merged_index_is_green() {
        let lines = lines_for(json!({
            "shards": {"0": [copy(true, 1, &[10])], "1": [copy(true, 1, &[10])]}
        }));
        assert_eq!(find(&lines, "segments_to_shards").value, "1.00");
        assert_eq!(find(&lines, "segments_to_shards").tone, Some(Tone::Green));
    }

    #[test]
    fn test_index_without_shards() {
        let lines = lines_for(json!({"shards": {}}));
        assert_eq!(find(&lines, "segments_to_shards").value, "0");
        assert_eq!(find(&lines, "total_size").value, "0.00 b");
    }

    #[test]
    fn test_single_object_shard_and_missing_routing() {
        let lines = lines_for(json!({
            "shards": {"0": {"num_search_segments": 1, "segments": {}}}
        }));
        let shard = lines.iter().find(|l| l.key.as_deref() == Some("shard")).unwrap();
        assert_eq!(shard.value, "0");
        assert_eq!(find(&lines, "shards").value, "1");
    }

    #[test]
    fn test_every_index_reported() {
        let tree = json!({
            "indices": {
                "logs": {"shards": {"0": [copy(true, 1, &[1])]}},
                "metrics": {"shards": {"0": [copy(true, 1, &[1])]}},
            }
        });
        let lines = SegmentsCheck.report(&tree).unwrap();
        let mut names: Vec<_> = lines
            .iter()
            .filter(|l| l.indent == 0)
            .map(|l| l.value.as_str())
            .collect();
        names.sort_unstable();
        assert_eq!(names, ["logs", "metrics"]);
    }

    #[test]
    fn test_missing_indices() {
        assert!(SegmentsCheck.report(&json!({})).unwrap().is_empty());
    }
}
