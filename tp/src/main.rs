use std::process::ExitCode;

use clap::Parser;
use eyre::{Context, Result};
use log::{LevelFilter, debug};

use talkpresent::cli::Cli;
use talkpresent::config::Config;
use talkpresent::error::FAILURE_EXIT_CODE;
use talkpresent::{Launcher, ProcessSpawner};

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

fn to_exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(FAILURE_EXIT_CODE as u8))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = setup_logging(cli.log_level.as_deref()).context("Failed to setup logging") {
        eprintln!("{:#}", e);
        return to_exit_code(FAILURE_EXIT_CODE);
    }

    let config = match Config::load(cli.config.as_ref()).context("Failed to load configuration") {
        Ok(config) => config.with_overrides(&cli),
        Err(e) => {
            eprintln!("{:#}", e);
            return to_exit_code(FAILURE_EXIT_CODE);
        }
    };
    debug!("main: {:?}", config);

    let launcher = Launcher::new(config, ProcessSpawner::inheriting());
    let code = launcher.run(cli.folder.as_deref(), &mut std::io::stderr()).await;
    to_exit_code(code)
}
