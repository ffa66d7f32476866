//! CLI argument parsing for talkcatalog

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tc")]
#[command(author, version, about = "Generate the talk catalog README", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Output file (default: dist/README.md)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// URL prefix for talk links
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Also include every talk directory found under ROOT
    #[arg(short, long, value_name = "ROOT")]
    pub discover: Option<PathBuf>,

    /// Print the catalog instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Talk directories, e.g. conferences/my-talk
    #[arg(value_name = "TALK_PATH")]
    pub paths: Vec<String>,
}
