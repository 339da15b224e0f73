//! Report checks.
//!
//! Each check reads one stats resource and turns it into report lines. The
//! handlers are pure: they never fetch or print.

pub mod health;
pub mod node;
pub mod segments;
pub mod settings;

use serde_json::Value;
use termkit::{ReportLine, format_bytes};

/// The available checks, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Check {
    Health,
    Node,
    Segments,
    Settings,
}

impl Check {
    /// Every check, in the order reports are produced.
    pub const ALL: [Self; 4] = [Self::Health, Self::Node, Self::Segments, Self::Settings];

    pub fn name(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Node => "node",
            Self::Segments => "segments",
            Self::Settings => "settings",
        }
    }

    /// Section title printed above the check's lines.
    pub fn title(self) -> &'static str {
        match self {
            Self::Health => "Cluster Health Check",
            Self::Node => "Node Check",
            Self::Segments => "Segments Check",
            Self::Settings => "Settings Check",
        }
    }

    /// Stats resource the check reads, relative to the cluster root.
    pub fn resource(self) -> &'static str {
        match self {
            Self::Health => "_cluster/health",
            Self::Node => {
                "_cluster/nodes/_local/stats?indices=true&jvm=true&process=true&transport=true&http=true"
            }
            Self::Segments => "_segments",
            Self::Settings => "_settings",
        }
    }

    pub fn handler(self) -> &'static dyn Handler {
        match self {
            Self::Health => &health::HealthCheck,
            Self::Node => &node::NodeCheck,
            Self::Segments => &segments::SegmentsCheck,
            Self::Settings => &settings::SettingsCheck,
        }
    }
}

/// Turns a stats tree into report lines.
pub trait Handler {
    fn report(&self, tree: &Value) -> Result<Vec<ReportLine>, ReportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Source(#[from] statsource::Error),

    #[error("node stats response contains no local node")]
    NoLocalNode,
}

// ============================================================================
// Tree navigation
// ============================================================================

/// Follow `path` through nested objects.
pub(crate) fn field<'a>(tree: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(tree, |node, key| node.get(key))
}

/// Display text of a scalar; blank when absent or null.
pub(crate) fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Numeric value, accepting numbers sent as strings.
pub(crate) fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Humanized byte size; blank when absent.
pub(crate) fn bytes(value: Option<&Value>) -> String {
    number(value).map(format_bytes).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_order() {
        let names: Vec<_> = Check::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["health", "node", "segments", "settings"]);
    }

    #[test]
    fn test_resources() {
        assert_eq!(Check::Health.resource(), "_cluster/health");
        assert_eq!(Check::Segments.resource(), "_segments");
        assert_eq!(Check::Settings.resource(), "_settings");
        assert!(Check::Node.resource().starts_with("_cluster/nodes/_local/stats?"));
    }

    #[test]
    fn test_field() {
        let tree = json!({"jvm": {"mem": {"heap_used_in_bytes": 10}}});
        assert_eq!(field(&tree, &["jvm", "mem", "heap_used_in_bytes"]), Some(&json!(10)));
        assert_eq!(field(&tree, &["jvm", "threads", "count"]), None);
        assert_eq!(field(&json!("scalar"), &["jvm"]), None);
    }

    #[test]
    fn test_text() {
        assert_eq!(text(Some(&json!("prod"))), "prod");
        assert_eq!(text(Some(&json!(3))), "3");
        assert_eq!(text(Some(&json!(false))), "false");
        assert_eq!(text(Some(&Value::Null)), "");
        assert_eq!(text(None), "");
    }

    #[test]
    fn test_number() {
        assert_eq!(number(Some(&json!(2048))), Some(2048.0));
        assert_eq!(number(Some(&json!("5"))), Some(5.0));
        assert_eq!(number(Some(&json!("five"))), None);
        assert_eq!(number(None), None);
    }

    #[test]
    fn test_bytes() {
        assert_eq!(bytes(Some(&json!(1025))), "1.00 kb");
        assert_eq!(bytes(None), "");
    }
}
