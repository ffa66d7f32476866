//! Catalog builder
//!
//! Glues the pipeline together: talk paths -> [`group`] -> render -> write.

use std::fs;
use std::path::PathBuf;

use log::{debug, info};

use crate::cli::Cli;
use crate::config::Config;
use crate::discover::discover;
use crate::error::CatalogError;
use crate::render::{CatalogRenderer, LabelStyle, README_TEMPLATE, TemplateContext, wrap};
use crate::taxonomy::group;

/// Where the rendered document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    File(PathBuf),
    Stdout,
}

/// A fully resolved build, ready to run
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub paths: Vec<String>,
    pub output: Output,
    pub base_url: String,
    pub repository_url: String,
    pub label_style: LabelStyle,
    pub template: Option<PathBuf>,
}

impl BuildRequest {
    /// Request with config defaults for the given talk paths
    pub fn new(paths: Vec<String>, config: &Config) -> Self {
        Self {
            paths,
            output: Output::File(config.output.clone()),
            base_url: config.base_url.clone(),
            repository_url: config.repository_url.clone(),
            label_style: config.label_style,
            template: config.template.clone(),
        }
    }

    /// Resolve CLI arguments against config
    ///
    /// Positional paths come first, discovered ones after. CLI flags win over
    /// config values.
    pub fn from_cli(cli: &Cli, config: &Config) -> Result<Self, CatalogError> {
        let mut paths = cli.paths.clone();
        if let Some(root) = &cli.discover {
            let found = discover(root, &config.entry_file)?;
            info!("Discovered {} talks under {}", found.len(), root.display());
            paths.extend(found);
        }

        let mut request = Self::new(paths, config);
        if let Some(base_url) = &cli.base_url {
            request.base_url = base_url.clone();
        }
        if cli.stdout {
            request.output = Output::Stdout;
        } else if let Some(output) = &cli.output {
            request.output = Output::File(output.clone());
        }
        Ok(request)
    }
}

/// What a build produced
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub categories: usize,
    pub talks: usize,
    pub document: String,
}

/// Render the full README document for a request
pub fn render_document(request: &BuildRequest) -> Result<BuildSummary, CatalogError> {
    let catalog = group(&request.paths);
    let list = CatalogRenderer::new(request.base_url.as_str())
        .with_label_style(request.label_style)
        .render_list(&catalog);

    let template = match &request.template {
        Some(path) => fs::read_to_string(path).map_err(|source| CatalogError::TemplateRead {
            path: path.clone(),
            source,
        })?,
        None => README_TEMPLATE.to_string(),
    };

    let document = wrap(
        &template,
        &TemplateContext {
            list: &list,
            repository_url: &request.repository_url,
            count: catalog.talk_count(),
        },
    )?;
    Ok(BuildSummary {
        categories: catalog.len(),
        talks: catalog.talk_count(),
        document,
    })
}

/// Run the build, writing the document when the output is a file
///
/// The output directory must already exist. A failed write is returned
/// as-is and nothing is retried.
pub fn build(request: &BuildRequest) -> Result<BuildSummary, CatalogError> {
    debug!("build: {} paths", request.paths.len());
    let summary = render_document(request)?;

    if let Output::File(path) = &request.output {
        fs::write(path, &summary.document).map_err(|source| CatalogError::Write {
            path: path.clone(),
            source,
        })?;
        info!(
            "Wrote {} talks in {} categories to {}",
            summary.talks,
            summary.categories,
            path.display()
        );
    }

    Ok(summary)
}
