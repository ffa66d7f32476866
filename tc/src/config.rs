//! Configuration for talkcatalog

use eyre::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::LabelStyle;

/// Project-local config file name
pub const LOCAL_CONFIG: &str = ".talkcatalog.yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Prefix for every talk link
    pub base_url: String,

    /// Where the catalog is written
    pub output: PathBuf,

    /// Linked from the closing sentence of the README
    pub repository_url: String,

    /// How separators in link labels are prettified
    pub label_style: LabelStyle,

    /// Handlebars template replacing the embedded one
    pub template: Option<PathBuf>,

    /// File that marks a directory as a talk during discovery
    pub entry_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_BASE_URL.to_string(),
            output: PathBuf::from(crate::DEFAULT_OUTPUT),
            repository_url: crate::DEFAULT_REPOSITORY_URL.to_string(),
            label_style: LabelStyle::default(),
            template: None,
            entry_file: crate::DEFAULT_ENTRY_FILE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// Explicit path, then `.talkcatalog.yml`, then the user config dir,
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
            let user_config = config_dir.join("talkcatalog").join("talkcatalog.yml");
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
}
