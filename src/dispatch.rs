//! Runs the selected checks, one at a time, in report order.
//!
//! Each check is fetched, turned into lines and rendered before the next one
//! starts. The first failure stops the run.

use std::io::Write;

use statsource::StatsSource;
use termkit::OutputSink;

use crate::checks::{Check, ReportError};
use crate::config::Config;
use crate::ui;

pub fn run<W: Write>(
    config: &Config,
    source: &dyn StatsSource,
    sink: &mut OutputSink<W>,
) -> Result<(), ReportError> {
    let selected = Check::ALL
        .into_iter()
        .filter(|check| config.checks.contains(check));

    for (position, check) in selected.enumerate() {
        let resource = check.resource();
        log::debug!("running {} check against {resource}", check.name());
        sink.debug(&format!("fetching {resource}"));

        let tree = source.fetch(resource).inspect_err(|e| {
            log::debug!("{} check failed: {} ({e})", check.name(), e.category());
        })?;
        if config.debug {
            sink.debug(&serde_json::to_string_pretty(&tree).unwrap_or_default());
        }

        let lines = check.handler().report(&tree)?;

        if position > 0 {
            sink.clear(1);
        }
        sink.render(&ui::section(check.title()));
        sink.render(&lines);
    }

    Ok(())
}
