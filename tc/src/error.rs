//! Catalog error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to write catalog to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template error: {0}")]
    Template(String),

    #[error("Failed to scan {root}: {message}")]
    Discover { root: PathBuf, message: String },
}
