//! Presentation launcher
//!
//! Preflight gates run strictly in order: folder argument, port, entry file.
//! The first failing gate ends the launch. Only when all pass is the renderer
//! spawned, and its exit code becomes the launcher's.

use std::io::Write;

use log::{debug, info};

use crate::config::Config;
use crate::error::LaunchError;
use crate::probe::is_port_bound;
use crate::resolver::resolve_entry_file;
use crate::spawner::{RendererCommand, Spawner};

/// A validated launch: the talk folder and its existing entry file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub target_directory: String,
    pub resolved_entry_file: String,
}

pub struct Launcher<S: Spawner> {
    config: Config,
    spawner: S,
}

impl<S: Spawner> Launcher<S> {
    pub fn new(config: Config, spawner: S) -> Self {
        Self { config, spawner }
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Run the preflight gates for `folder`
    pub fn preflight(&self, folder: Option<&str>) -> Result<LaunchRequest, LaunchError> {
        let target_directory = match folder {
            Some(folder) if !folder.is_empty() => folder,
            _ => return Err(LaunchError::MissingFolder),
        };
        debug!("preflight: folder={}", target_directory);

        if is_port_bound(&self.config.host, self.config.port) {
            return Err(LaunchError::PortInUse {
                host: self.config.host.clone(),
                port: self.config.port,
            });
        }

        let resolved_entry_file = resolve_entry_file(target_directory, &self.config.extension)?;
        Ok(LaunchRequest {
            target_directory: target_directory.to_string(),
            resolved_entry_file,
        })
    }

    /// Renderer command for a validated request
    pub fn command_for(&self, request: &LaunchRequest) -> RendererCommand {
        self.config.renderer.command_for(&request.resolved_entry_file)
    }

    /// Preflight, then spawn the renderer and wait for it
    pub async fn launch(&self, folder: Option<&str>) -> Result<i32, LaunchError> {
        let request = self.preflight(folder)?;
        let command = self.command_for(&request);
        info!("Presenting {} with: {}", request.target_directory, command);
        self.spawner.run(&command).await
    }

    /// Launch and turn the outcome into a process exit code
    ///
    /// Failures are reported as a single line on `stderr`. The renderer's own
    /// exit code is passed through without any extra message.
    pub async fn run<W: Write>(&self, folder: Option<&str>, stderr: &mut W) -> i32 {
        match self.launch(folder).await {
            Ok(code) => code,
            Err(e) => {
                let _ = writeln!(stderr, "{}", e);
                e.exit_code()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::fs;
    use std::net::TcpListener;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Records every spawn and answers with a fixed exit code
    struct MockSpawner {
        exit_code: i32,
        calls: Mutex<Vec<RendererCommand>>,
    }

    impl MockSpawner {
        fn exiting_with(exit_code: i32) -> Self {
            Self {
                exit_code,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<RendererCommand> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Spawner for MockSpawner {
        async fn run(&self, command: &RendererCommand) -> Result<i32, LaunchError> {
            self.calls.lock().unwrap().push(command.clone());
            Ok(self.exit_code)
        }
    }

    fn free_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    fn config_on(port: u16) -> Config {
        Config {
            port,
            ..Config::default()
        }
    }

    fn talk_dir() -> (TempDir, String) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("presentation.mdx"), "# slides").unwrap();
        let dir = temp.path().to_string_lossy().to_string();
        (temp, dir)
    }

    #[tokio::test]
    async fn test_valid_launch_spawns_once_and_mirrors_exit_code() {
        let (_temp, dir) = talk_dir();
        let launcher = Launcher::new(config_on(free_port()), MockSpawner::exiting_with(42));

        let mut stderr = Vec::new();
        let code = launcher.run(Some(&dir), &mut stderr).await;

        assert_eq!(code, 42);
        assert!(stderr.is_empty());
        let calls = launcher.spawner().calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].args.contains(&format!("{dir}/presentation.mdx")));
    }

    #[tokio::test]
    async fn test_missing_folder_fails_without_spawning() {
        let launcher = Launcher::new(config_on(free_port()), MockSpawner::exiting_with(0));

        let mut stderr = Vec::new();
        let code = launcher.run(None, &mut stderr).await;

        assert_eq!(code, 1);
        let msg = String::from_utf8(stderr).unwrap();
        assert!(!msg.trim().is_empty());
        assert_eq!(msg.lines().count(), 1);
        assert!(launcher.spawner().calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_folder_is_missing() {
        let launcher = Launcher::new(config_on(free_port()), MockSpawner::exiting_with(0));
        let result = launcher.launch(Some("")).await;

        assert!(matches!(result, Err(LaunchError::MissingFolder)));
        assert!(launcher.spawner().calls().is_empty());
    }

    #[tokio::test]
    async fn test_port_in_use_fails_before_file_check() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let launcher = Launcher::new(config_on(port), MockSpawner::exiting_with(0));

        // folder does not exist either, the port gate must answer first
        let result = launcher.launch(Some("/nonexistent/talk")).await;

        match result {
            Err(LaunchError::PortInUse { port: p, .. }) => assert_eq!(p, port),
            other => panic!("expected PortInUse, got {other:?}"),
        }
        assert!(launcher.spawner().calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_presentation_reports_path() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_string_lossy().to_string();
        let launcher = Launcher::new(config_on(free_port()), MockSpawner::exiting_with(0));

        let mut stderr = Vec::new();
        let code = launcher.run(Some(&dir), &mut stderr).await;

        assert_eq!(code, 1);
        let msg = String::from_utf8(stderr).unwrap();
        assert!(msg.contains(&format!("{dir}/presentation.mdx")));
        assert!(launcher.spawner().calls().is_empty());
    }

    #[test]
    fn test_preflight_builds_request() {
        let (_temp, dir) = talk_dir();
        let launcher = Launcher::new(config_on(free_port()), MockSpawner::exiting_with(0));

        let request = launcher.preflight(Some(&dir)).unwrap();
        assert_eq!(request.target_directory, dir);
        assert_eq!(request.resolved_entry_file, format!("{dir}/presentation.mdx"));

        let command = launcher.command_for(&request);
        assert_eq!(command.program, "yarn");
        assert_eq!(command.args.last(), Some(&request.resolved_entry_file));
    }
}
