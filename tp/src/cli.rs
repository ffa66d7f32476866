//! CLI argument parsing for talkpresent

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tp")]
#[command(author, version, about = "Start presenting a talk", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Host the renderer serves on (default: 127.0.0.1)
    #[arg(long)]
    pub host: Option<String>,

    /// Port the renderer serves on (default: 8080)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Talk folder containing the presentation entry file
    #[arg(value_name = "FOLDER")]
    pub folder: Option<String>,
}
