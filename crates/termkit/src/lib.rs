//! # termkit
//!
//! Terminal report toolkit for status-style CLI output.
//!
//! This crate provides the pieces every report shares:
//! - **Report model**: [`ReportLine`] with indentation, optional key, color
//!   [`Tone`] and a minimum verbosity level
//! - **Sink**: [`OutputSink`] applies verbosity gating, coloring (plain or
//!   rainbow), key/value joining and indentation
//! - **Formatting**: byte counts as human-readable sizes
//!
//! ## Quick Start
//!
//! ```
//! use termkit::{OutputSink, ReportLine, SinkOptions, Tone, format_bytes};
//!
//! let lines = vec![
//!     ReportLine::text(0, "Node Check"),
//!     ReportLine::kv(0, "heap_used", format_bytes(3_221_225_472.0)),
//!     ReportLine::kv(0, "heap_used_in_bytes", "3221225472").at_level(1),
//!     ReportLine::kv(0, "health", "green").tone(Tone::Green),
//! ];
//!
//! let mut sink = OutputSink::new(Vec::new(), SinkOptions::default());
//! sink.render(&lines);
//!
//! let text = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(text, "Node Check\nheap_used:3.00 gb\nhealth:green\n");
//! ```
//!
//! Whether colors actually reach the terminal is decided once by the
//! application through `colored::control::set_override`; the sink only
//! decides which values get a color.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod format;
pub mod report;
pub mod sink;

pub use format::{format_bytes, humanize_bytes};
pub use report::{ReportLine, Tone};
pub use sink::{OutputSink, SinkOptions};
