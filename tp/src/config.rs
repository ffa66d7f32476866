//! Configuration for talkpresent

use eyre::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::spawner::RendererCommand;

/// Project-local config file name
pub const LOCAL_CONFIG: &str = ".talkpresent.yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Host the renderer's dev server binds to
    pub host: String,

    /// Port the renderer's dev server binds to
    pub port: u16,

    /// Extension of the `presentation.*` entry file
    pub extension: String,

    /// External renderer invocation
    pub renderer: RendererConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: crate::DEFAULT_HOST.to_string(),
            port: crate::DEFAULT_PORT,
            extension: crate::DEFAULT_EXTENSION.to_string(),
            renderer: RendererConfig::default(),
        }
    }
}

/// How the renderer is started
///
/// The command line is `program args... [config-flag config-file] entry`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RendererConfig {
    /// Executable looked up on `PATH`
    pub program: String,

    /// Arguments placed before the bundler config
    pub args: Vec<String>,

    /// Flag introducing the bundler config file
    pub config_flag: Option<String>,

    /// Bundler config file handed to the renderer
    pub config_file: Option<PathBuf>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            program: "yarn".to_string(),
            args: vec!["mdx-deck".to_string()],
            config_flag: Some("--webpack".to_string()),
            config_file: Some(PathBuf::from("webpack.config.js")),
        }
    }
}

impl RendererConfig {
    /// Build the renderer command for a resolved entry file
    pub fn command_for(&self, entry_file: &str) -> RendererCommand {
        let mut args = self.args.clone();
        if let Some(config_file) = &self.config_file {
            if let Some(flag) = &self.config_flag {
                args.push(flag.clone());
            }
            args.push(config_file.to_string_lossy().to_string());
        }
        args.push(entry_file.to_string());

        RendererCommand {
            program: self.program.clone(),
            args,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// Explicit path, then `.talkpresent.yml`, then the user config dir,
    /// then defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let local_config = PathBuf::from(LOCAL_CONFIG);
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => warn!("Failed to load config from {}: {}", local_config.display(), e),
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("talkpresent").join("talkpresent.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => warn!("Failed to load config from {}: {}", user_config.display(), e),
                }
            }
        }

        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Apply `--host` / `--port` from the command line
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.extension, "mdx");
    }

    #[test]
    fn test_default_renderer_command() {
        let command = RendererConfig::default().command_for("fp/elm/presentation.mdx");
        assert_eq!(command.program, "yarn");
        assert_eq!(
            command.args,
            vec!["mdx-deck", "--webpack", "webpack.config.js", "fp/elm/presentation.mdx"]
        );
    }

    #[test]
    fn test_renderer_without_bundler_config() {
        let renderer: RendererConfig = serde_yaml::from_str("program: mdx-deck\nargs: []\nconfig-file: null\n").unwrap();
        let command = renderer.command_for("t/presentation.mdx");
        assert_eq!(command.program, "mdx-deck");
        assert_eq!(command.args, vec!["t/presentation.mdx"]);
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("present.yml");
        fs::write(&path, "port: 3000\nrenderer:\n  program: npx\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.renderer.program, "npx");
        assert_eq!(config.renderer.args, vec!["mdx-deck"]);
    }

    #[test]
    fn test_load_bad_port_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("present.yml");
        fs::write(&path, "port: 99999\n").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from(["tp", "--port", "9000", "--host", "localhost", "talk"]).unwrap();
        let config = Config::default().with_overrides(&cli);
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "localhost");
    }
}
