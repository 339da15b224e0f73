//! Replay backend reading responses saved to a directory.
//!
//! Each resource maps to one file: the query string is dropped and path
//! separators become underscores, so `_cluster/health` is read from
//! `_cluster_health.json`.

use crate::backend::StatsSource;
use crate::error::{Error, Result, decode};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Stats source reading saved JSON responses.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Create a source reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File holding the saved response for `resource`.
    pub fn file_for(&self, resource: &str) -> PathBuf {
        let path = resource.split('?').next().unwrap_or_default();
        let name = path.trim_matches('/').replace('/', "_");
        self.root.join(format!("{name}.json"))
    }
}

impl StatsSource for DirSource {
    fn fetch(&self, resource: &str) -> Result<Value> {
        let file = self.file_for(resource);
        log::debug!("reading {}", file.display());

        let body = fs::read_to_string(&file).map_err(|e| Error::io(&file, e))?;
        decode(&file.display().to_string(), &body)
    }
}
