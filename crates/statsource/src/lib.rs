//! # statsource
//!
//! Fetch search-cluster stats resources as untyped JSON trees.
//!
//! A resource is a path relative to the cluster root, such as
//! `_cluster/health` or `_segments`. Sources return the response as a
//! [`serde_json::Value`] and leave interpretation to the caller; no schema is
//! imposed, so minor API differences between cluster versions do not break
//! retrieval.
//!
//! ## Example
//!
//! ```no_run
//! use statsource::{HttpSource, StatsSource};
//!
//! let source = HttpSource::new("http://localhost:9200");
//! match source.fetch("_cluster/health") {
//!     Ok(tree) => println!("status: {}", tree["status"]),
//!     Err(e) => eprintln!("{}: {e}", e.category()),
//! }
//! ```
//!
//! ## Sources
//!
//! | Source       | Reads from                        |
//! |--------------|-----------------------------------|
//! | `HttpSource` | the cluster's HTTP API            |
//! | `DirSource`  | JSON files saved in a directory   |
//! | `MockSource` | in-memory trees (tests)           |
//!
//! Fetching is blocking and never retried.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod error;

pub use backend::dir::DirSource;
pub use backend::http::HttpSource;
pub use backend::{MockSource, StatsSource};
pub use error::{Error, ErrorCategory, Result};
