//! Index settings check (`_settings`).
//!
//! Flags indices whose replica count follows the cluster size through
//! `auto_expand_replicas`.

use serde_json::Value;
use termkit::{ReportLine, Tone};

use super::{Handler, ReportError, text};

/// Shown when an index has no `auto_expand_replicas` setting.
const NOT_SET: &str = "not set";

pub struct SettingsCheck;

impl Handler for SettingsCheck {
    fn report(&self, tree: &Value) -> Result<Vec<ReportLine>, ReportError> {
        let mut indices: Vec<(&String, &Value)> = tree
            .as_object()
            .map(|indices| indices.iter().collect())
            .unwrap_or_default();
        indices.sort_by(|a, b| a.0.cmp(b.0));

        let mut lines = Vec::new();
        for (name, index) in indices {
            let settings = index.get("settings");

            let auto_expand = index_setting(settings, "auto_expand_replicas")
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| NOT_SET.to_string());
            let tone = auto_expand_tone(&auto_expand);

            lines.push(ReportLine::kv(0, "index", name.as_str()).tone(Tone::Cyan));
            lines.push(ReportLine::kv(1, "auto_expand_replicas", auto_expand).tone(tone));
            lines.push(
                ReportLine::kv(
                    1,
                    "replicas",
                    index_setting(settings, "number_of_replicas").unwrap_or_default(),
                )
                .at_level(1),
            );
            lines.push(
                ReportLine::kv(
                    1,
                    "shards",
                    index_setting(settings, "number_of_shards").unwrap_or_default(),
                )
                .at_level(1),
            );
        }

        Ok(lines)
    }
}

/// `false` is green, unset is yellow, anything else is red.
pub(crate) fn auto_expand_tone(value: &str) -> Tone {
    match value {
        "false" => Tone::Green,
        NOT_SET => Tone::Yellow,
        _ => Tone::Red,
    }
}

/// Read `index.<name>` from either the flat (`"index.name"`) or the nested
/// (`index: {name}`) settings layout.
fn index_setting(settings: Option<&Value>, name: &str) -> Option<String> {
    let settings = settings?;
    settings
        .get(format!("index.{name}"))
        .or_else(|| settings.get("index").and_then(|index| index.get(name)))
        .filter(|value| !value.is_null())
        .map(|value| text(Some(value)))
}
