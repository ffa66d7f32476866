//! Talk directory discovery
//!
//! Finds every directory under a root that holds a presentation entry file.

use std::path::Path;

use log::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::CatalogError;

/// Directories never searched for talks
const SKIP_DIRS: &[&str] = &["node_modules", "dist", "target"];

fn is_skipped(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIP_DIRS.iter().any(|skip| name == *skip)
}

/// Relative, `/`-separated paths of all talk directories under `root`, sorted
///
/// A directory is a talk when it directly contains `entry_file`. The root
/// itself is never reported.
pub fn discover(root: &Path, entry_file: &str) -> Result<Vec<String>, CatalogError> {
    debug!("discover: root={} entry_file={}", root.display(), entry_file);
    let mut talks = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(|e| !is_skipped(e)) {
        let entry = entry.map_err(|e| CatalogError::Discover {
            root: root.to_path_buf(),
            message: e.to_string(),
        })?;

        if entry.depth() == 0 || !entry.file_type().is_dir() {
            continue;
        }
        if !entry.path().join(entry_file).is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let talk = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        debug!("discover: found {}", talk);
        talks.push(talk);
    }

    talks.sort();
    Ok(talks)
}
