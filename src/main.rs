mod checks;
mod cli;
mod config;
mod dispatch;
mod ui;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::Cli;
use config::{Config, FileConfig};
use statsource::{DirSource, HttpSource, StatsSource};
use std::io;
use std::process::ExitCode;
use termkit::OutputSink;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr and stay out of the report
    env_logger::Builder::new()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .parse_default_env()
        .init();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "esreport", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let file = FileConfig::load().context("Could not load config file")?;
    let config = Config::new(cli, &file);
    log::debug!("{config:?}");

    colored::control::set_override(config.color || config.nicolai);

    let source: Box<dyn StatsSource> = match &config.replay {
        Some(dir) => Box::new(DirSource::new(dir)),
        None => Box::new(HttpSource::new(&config.base_url)),
    };

    let mut sink = OutputSink::stdout(config.sink_options());
    dispatch::run(&config, source.as_ref(), &mut sink)?;
    Ok(())
}
