//! Stats source trait and implementations.
//!
//! [`http::HttpSource`] talks to a live cluster, [`dir::DirSource`] replays
//! responses saved to disk, and [`MockSource`] serves in-memory trees for
//! tests:
//!
//! ```
//! use statsource::{MockSource, StatsSource};
//! use serde_json::json;
//!
//! let mock = MockSource::new().with_resource("_cluster/health", json!({"status": "green"}));
//!
//! let tree = mock.fetch("_cluster/health").unwrap();
//! assert_eq!(tree["status"], "green");
//! assert!(mock.fetch("_segments").is_err());
//! ```

pub mod dir;
pub mod http;

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// A source of named stats resources.
///
/// `resource` is a path relative to the cluster root, optionally with a query
/// string (`_cluster/nodes/_local/stats?jvm=true`). Fetching is blocking and
/// never retried.
pub trait StatsSource: Send + Sync {
    /// Fetch a resource and parse it into a JSON tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be retrieved, is empty, or is
    /// not valid JSON.
    fn fetch(&self, resource: &str) -> Result<Value>;
}

/// In-memory source for tests.
///
/// Also records every requested resource, in order.
#[derive(Debug, Default)]
pub struct MockSource {
    resources: HashMap<String, Value>,
    failures: HashMap<String, u16>,
    fetched: Mutex<Vec<String>>,
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `value` for `resource`.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>, value: Value) -> Self {
        self.resources.insert(resource.into(), value);
        self
    }

    /// Fail `resource` with an HTTP status.
    #[must_use]
    pub fn with_failure(mut self, resource: impl Into<String>, status: u16) -> Self {
        self.failures.insert(resource.into(), status);
        self
    }

    /// Resources requested so far.
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

impl StatsSource for MockSource {
    fn fetch(&self, resource: &str) -> Result<Value> {
        self.fetched.lock().unwrap().push(resource.to_string());

        if let Some(&status) = self.failures.get(resource) {
            return Err(Error::Http {
                url: format!("mock://{resource}"),
                message: format!("HTTP {status}"),
                status: Some(status),
            });
        }

        self.resources
            .get(resource)
            .cloned()
            .ok_or_else(|| Error::NotFound(resource.to_string()))
    }
}
