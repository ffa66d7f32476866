//! Presentation entry file resolution

use std::path::Path;

use log::debug;

use crate::error::LaunchError;

/// `{target_directory}/presentation.{extension}`
pub fn entry_file_path(target_directory: &str, extension: &str) -> String {
    format!("{target_directory}/presentation.{extension}")
}

/// Resolve and check the entry file for a talk directory
///
/// Returns the path exactly as built by [`entry_file_path`] when it exists.
pub fn resolve_entry_file(target_directory: &str, extension: &str) -> Result<String, LaunchError> {
    let path = entry_file_path(target_directory, extension);
    let exists = Path::new(&path).is_file();
    debug!("resolve_entry_file: {} exists={}", path, exists);

    if exists {
        Ok(path)
    } else {
        Err(LaunchError::PresentationMissing { path })
    }
}
