use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info};

use talkcatalog::cli::Cli;
use talkcatalog::config::Config;
use talkcatalog::{BuildRequest, Output, build};

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    let level = match cli_log_level.map(str::to_uppercase).as_deref() {
        Some("TRACE") => LevelFilter::Trace,
        Some("DEBUG") => LevelFilter::Debug,
        Some("INFO") => LevelFilter::Info,
        Some("WARN") | Some("WARNING") | None => LevelFilter::Warn,
        Some("ERROR") => LevelFilter::Error,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", other);
            LevelFilter::Warn
        }
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if cli_log_level.is_none() {
        builder.parse_default_env();
    }
    builder.try_init()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let request = BuildRequest::from_cli(&cli, &config)?;

    info!("talkcatalog building {} talks", request.paths.len());
    let summary = build(&request)?;

    match &request.output {
        Output::Stdout => print!("{}", summary.document),
        Output::File(path) => println!(
            "{} Wrote {} talks in {} categories to {}",
            "✓".green(),
            summary.talks,
            summary.categories,
            path.display().to_string().cyan()
        ),
    }

    Ok(())
}
