//! Catalog rendering
//!
//! Formats a [`Catalog`] as a markdown link list and wraps it in the README
//! template.

use std::fmt::Write;
use std::sync::LazyLock;

use handlebars::Handlebars;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::taxonomy::{Catalog, Category};

/// Embedded README template
pub const README_TEMPLATE: &str = include_str!("../templates/readme.hbs");

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[/_-]").expect("separator regex is valid"));

/// How separators in link labels are turned into spaces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelStyle {
    /// Replace only the first `/`, `_` or `-` in the label
    #[default]
    First,
    /// Replace every `/`, `_` and `-` in the label
    All,
}

impl LabelStyle {
    /// Prettify a link label
    pub fn apply(self, label: &str) -> String {
        match self {
            Self::First => SEPARATOR.replace(label, " ").into_owned(),
            Self::All => SEPARATOR.replace_all(label, " ").into_owned(),
        }
    }
}

/// Renders the markdown link list for a catalog
#[derive(Debug, Clone)]
pub struct CatalogRenderer {
    base_url: String,
    labels: LabelStyle,
}

impl CatalogRenderer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            labels: LabelStyle::default(),
        }
    }

    pub fn with_label_style(mut self, labels: LabelStyle) -> Self {
        self.labels = labels;
        self
    }

    /// Render every category block, in catalog order
    pub fn render_list(&self, catalog: &Catalog) -> String {
        debug!("render_list: {} categories", catalog.len());
        let mut out = String::new();
        for category in catalog.categories() {
            self.render_category(&mut out, category);
        }
        out
    }

    fn render_category(&self, out: &mut String, category: &Category) {
        let base = &self.base_url;
        let name = &category.name;

        if category.is_singleton() {
            let variant = &category.variants[0];
            let path = if variant.is_empty() {
                name.clone()
            } else {
                format!("{name}/{variant}")
            };
            // Writing into a String cannot fail
            let _ = writeln!(out, "- [{}]({base}{path})", self.labels.apply(&path));
            return;
        }

        let _ = writeln!(out, "- {name}");
        for variant in &category.variants {
            let _ = writeln!(out, "  - [{}]({base}{name}/{variant})", self.labels.apply(variant));
        }
    }
}

/// Render the link list for `catalog` with the default label style
pub fn render(catalog: &Catalog, base_url: &str) -> String {
    CatalogRenderer::new(base_url).render_list(catalog)
}

/// Values available to the README template
#[derive(Debug, Serialize)]
pub struct TemplateContext<'a> {
    pub list: &'a str,
    pub repository_url: &'a str,
    pub count: usize,
}

/// Wrap a rendered list in a handlebars template
pub fn wrap(template: &str, context: &TemplateContext<'_>) -> Result<String, CatalogError> {
    debug!("wrap: rendering template ({} bytes)", template.len());
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs.render_template(template, context)
        .map_err(|e| CatalogError::Template(e.to_string()))
}
