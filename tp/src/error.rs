//! Launcher error types

use thiserror::Error;

/// Exit code for every launcher-side failure
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Errors that stop a presentation from being launched
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("You need to specify a folder to start presenting from!")]
    MissingFolder,

    #[error("Port {port} on {host} is already in use, stop whatever is listening there first")]
    PortInUse { host: String, port: u16 },

    #[error("Presentation file not found: {path}")]
    PresentationMissing { path: String },

    #[error("Failed to start renderer '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed while waiting for the renderer: {0}")]
    Wait(#[source] std::io::Error),
}

impl LaunchError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}
