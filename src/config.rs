//! Run configuration.
//!
//! Built once from the command line, the environment (through clap) and an
//! optional `~/.config/esreport/config.toml`, then passed around read-only.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use termkit::SinkOptions;

use crate::checks::Check;
use crate::cli::Cli;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 9200;

/// Get the config directory path
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("esreport"))
}

// ============================================================================
// Config File
// ============================================================================

/// Defaults read from `config.toml`. Command-line flags win.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub color: Option<bool>,
    pub csv: Option<bool>,
}

impl FileConfig {
    /// Load `config.toml` from the config directory, if there is one.
    pub fn load() -> Result<Self> {
        match config_dir() {
            Ok(dir) => Self::load_from(&dir.join("config.toml")),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }
}

// ============================================================================
// Run Config
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Checks to run; never empty.
    pub checks: BTreeSet<Check>,
    pub color: bool,
    pub nicolai: bool,
    pub verbose: u8,
    pub debug: bool,
    pub kv_separator: String,
    pub base_url: String,
    /// Directory of saved responses to read instead of the cluster.
    pub replay: Option<PathBuf>,
}

impl Config {
    pub fn new(cli: &Cli, file: &FileConfig) -> Self {
        let host = cli
            .host
            .clone()
            .or_else(|| file.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = cli.port.or(file.port).unwrap_or(DEFAULT_PORT);
        let csv = cli.csv || file.csv.unwrap_or(false);

        Self {
            checks: selected_checks(cli),
            color: cli.color || file.color.unwrap_or(false),
            nicolai: cli.nicolai,
            verbose: cli.verbose,
            debug: cli.debug,
            kv_separator: if csv { "," } else { ":" }.to_string(),
            base_url: format!("http://{host}:{port}"),
            replay: cli.replay.clone(),
        }
    }

    pub fn sink_options(&self) -> SinkOptions {
        SinkOptions {
            color: self.color,
            rainbow: self.nicolai,
            verbose: self.verbose,
            debug: self.debug,
            separator: self.kv_separator.clone(),
        }
    }
}

/// Checks picked on the command line; `--all` selects every check and no
/// selection means health only.
fn selected_checks(cli: &Cli) -> BTreeSet<Check> {
    if cli.all {
        return Check::ALL.into_iter().collect();
    }

    let flags = [
        (cli.health, Check::Health),
        (cli.node, Check::Node),
        (cli.segments, Check::Segments),
        (cli.settings, Check::Settings),
    ];
    let checks: BTreeSet<Check> = flags
        .into_iter()
        .filter_map(|(on, check)| on.then_some(check))
        .collect();

    if checks.is_empty() {
        BTreeSet::from([Check::Health])
    } else {
        checks
    }
}
