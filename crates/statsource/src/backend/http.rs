//! Live cluster backend over HTTP.
//!
//! No timeout is configured: a stalled cluster stalls the report.

use crate::backend::StatsSource;
use crate::error::{Error, Result, decode};
use serde_json::Value;

/// Maximum response size. Segment listings of large clusters get big.
const MAX_BODY_SIZE: u64 = 256 * 1024 * 1024;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("esreport/", env!("CARGO_PKG_VERSION"));

/// Stats source backed by a cluster's HTTP API.
///
/// # Example
///
/// ```no_run
/// use statsource::{HttpSource, StatsSource};
///
/// let source = HttpSource::new("http://localhost:9200");
/// let health = source.fetch("_cluster/health").unwrap();
/// println!("{}", health["status"]);
/// ```
pub struct HttpSource {
    /// HTTP agent for requests.
    agent: ureq::Agent,
    /// Cluster base URL, e.g. `http://localhost:9200`.
    base_url: String,
}

impl HttpSource {
    /// Create a source for the cluster at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            base_url: base_url.into(),
        }
    }

    /// Get the cluster base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for a resource.
    fn url_for(&self, resource: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            resource.trim_start_matches('/')
        )
    }
}

impl StatsSource for HttpSource {
    fn fetch(&self, resource: &str) -> Result<Value> {
        let url = self.url_for(resource);
        log::debug!("GET {url}");

        let mut response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| Error::http(&url, e))?;

        let body = response
            .body_mut()
            .with_config()
            .limit(MAX_BODY_SIZE)
            .read_to_string()
            .map_err(|e| Error::http(&url, e))?;

        log::debug!("{url}: {} bytes", body.len());
        decode(&url, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        let source = HttpSource::new("http://localhost:9200");
        assert_eq!(
            source.url_for("_cluster/health"),
            "http://localhost:9200/_cluster/health"
        );
    }

    #[test]
    fn test_url_for_normalizes_slashes() {
        let source = HttpSource::new("http://es.internal:9201/");
        assert_eq!(
            source.url_for("/_segments"),
            "http://es.internal:9201/_segments"
        );
    }

    #[test]
    fn test_url_for_keeps_query() {
        let source = HttpSource::new("http://localhost:9200");
        assert_eq!(
            source.url_for("_cluster/nodes/_local/stats?jvm=true"),
            "http://localhost:9200/_cluster/nodes/_local/stats?jvm=true"
        );
    }

    #[test]
    fn test_base_url() {
        let source = HttpSource::new("http://db1:9200");
        assert_eq!(source.base_url(), "http://db1:9200");
    }

    #[test]
    fn test_connection_refused_is_fetch_error() {
        // Port 1 on loopback is not expected to accept connections
        let source = HttpSource::new("http://127.0.0.1:1");
        let err = source.fetch("_cluster/health").unwrap_err();
        assert!(matches!(err, Error::Http { status: None, .. }));
    }
}
