//! TalkCatalog - README generator for a talks repository
//!
//! Groups talk directories by their first path segment and renders a
//! markdown catalog linking to every published talk.
//!
//! # Output
//!
//! ```text
//! - talk-a
//!   - [v1](https://example.com/talk-a/v1)
//!   - [v2](https://example.com/talk-a/v2)
//! - [talk b](https://example.com/talk-b)
//! ```
//!
//! # Example
//!
//! ```
//! use talkcatalog::{group, render};
//!
//! let catalog = group(["talk-a/v1", "talk-a/v2", "talk-b"]);
//! let list = render(&catalog, "https://example.com/");
//! assert!(list.starts_with("- talk-a\n"));
//! ```

pub mod builder;
pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod render;
pub mod taxonomy;

pub use builder::{BuildRequest, BuildSummary, Output, build};
pub use error::CatalogError;
pub use render::{CatalogRenderer, LabelStyle, render};
pub use taxonomy::{Catalog, Category, TalkPath, group};

/// Where published talks are served from
pub const DEFAULT_BASE_URL: &str = "https://luc-tielen.github.io/talks/";

/// Source repository linked at the bottom of the catalog
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/luc-tielen/talks";

/// Catalog output path, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "dist/README.md";

/// Entry file that marks a talk directory
pub const DEFAULT_ENTRY_FILE: &str = "presentation.mdx";
