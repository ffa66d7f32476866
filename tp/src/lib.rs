//! TalkPresent - start presenting a talk
//!
//! Runs the preflight checks a presentation needs (a talk folder, a free
//! dev-server port, an existing `presentation.mdx`) and then hands over to
//! the external renderer, mirroring its exit code.
//!
//! # Example
//!
//! ```ignore
//! use talkpresent::{Config, Launcher, ProcessSpawner};
//!
//! let launcher = Launcher::new(Config::default(), ProcessSpawner::inheriting());
//! let code = launcher.run(Some("fp/elm"), &mut std::io::stderr()).await;
//! std::process::exit(code);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod probe;
pub mod resolver;
pub mod spawner;

pub use config::{Config, RendererConfig};
pub use error::LaunchError;
pub use launcher::{LaunchRequest, Launcher};
pub use probe::is_port_bound;
pub use resolver::resolve_entry_file;
pub use spawner::{ProcessSpawner, RendererCommand, Spawner, StdioMode};

/// Loopback address the renderer's dev server uses
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port the renderer's dev server uses
pub const DEFAULT_PORT: u16 = 8080;

/// Extension of the presentation entry file
pub const DEFAULT_EXTENSION: &str = "mdx";
