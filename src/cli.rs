use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "esreport")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Status reports for Elasticsearch clusters", long_about = None)]
pub struct Cli {
    // ========================================================================
    // Checks
    // ========================================================================
    /// Report cluster health (the default when no check is selected)
    #[arg(long, help_heading = "Checks")]
    pub health: bool,

    /// Report JVM, index and transport stats of the local node
    #[arg(long, help_heading = "Checks")]
    pub node: bool,

    /// Report segment counts per index and shard
    #[arg(long, help_heading = "Checks")]
    pub segments: bool,

    /// Report replica settings per index
    #[arg(long, help_heading = "Checks")]
    pub settings: bool,

    /// Run every check
    #[arg(short, long, help_heading = "Checks")]
    pub all: bool,

    // ========================================================================
    // Target
    // ========================================================================
    /// Cluster host [default: localhost]
    #[arg(long, env = "ESREPORT_HOST", help_heading = "Target")]
    pub host: Option<String>,

    /// Cluster HTTP port [default: 9200]
    #[arg(short, long, env = "ESREPORT_PORT", help_heading = "Target")]
    pub port: Option<u16>,

    /// Read responses saved as JSON files in DIR instead of querying the cluster
    #[arg(long, value_name = "DIR", help_heading = "Target")]
    pub replay: Option<PathBuf>,

    // ========================================================================
    // Output
    // ========================================================================
    /// Separate keys and values with a comma
    #[arg(long, help_heading = "Output")]
    pub csv: bool,

    /// Colorize values
    #[arg(short, long, help_heading = "Output")]
    pub color: bool,

    /// Rainbow-color every value, character by character
    #[arg(long, help_heading = "Output")]
    pub nicolai: bool,

    /// Show more detail (repeat for raw byte counts)
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,

    /// Show every line and print raw responses
    #[arg(short, long, help_heading = "Output")]
    pub debug: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
