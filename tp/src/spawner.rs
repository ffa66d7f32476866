//! Renderer subprocess supervision
//!
//! Runs exactly one renderer process, waits for it without a timeout and
//! reports its exit code. SIGINT/SIGTERM received while waiting are
//! forwarded to the child as SIGTERM.

use std::fmt;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::process::{Child, Command};

use crate::error::LaunchError;

/// A fully resolved renderer invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for RendererCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Starts the renderer and waits for it to finish
#[async_trait]
pub trait Spawner: Send + Sync {
    /// Run `command` to completion and return its exit code
    async fn run(&self, command: &RendererCommand) -> Result<i32, LaunchError>;
}

/// What the child's standard streams are connected to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Share the launcher's stdin, stdout and stderr
    Inherit,
    /// Discard all three
    Null,
}

impl StdioMode {
    fn stdio(self) -> Stdio {
        match self {
            Self::Inherit => Stdio::inherit(),
            Self::Null => Stdio::null(),
        }
    }
}

/// Spawns the renderer as a real OS process
#[derive(Debug, Clone, Copy)]
pub struct ProcessSpawner {
    stdio: StdioMode,
}

impl ProcessSpawner {
    pub fn new(stdio: StdioMode) -> Self {
        Self { stdio }
    }

    /// Spawner whose child talks directly to the user's terminal
    pub fn inheriting() -> Self {
        Self::new(StdioMode::Inherit)
    }

    /// Run `command` until it exits
    ///
    /// If `shutdown` completes first, SIGTERM is sent to the child and the
    /// child's own exit status is still awaited and returned.
    pub async fn run_until<F>(&self, command: &RendererCommand, shutdown: F) -> Result<i32, LaunchError>
    where
        F: Future<Output = ()> + Send,
    {
        debug!("ProcessSpawner::run_until: {}", command);
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(self.stdio.stdio())
            .stdout(self.stdio.stdio())
            .stderr(self.stdio.stdio())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: command.program.clone(),
                source,
            })?;
        info!("Renderer started (PID: {:?})", child.id());

        let finished = tokio::select! {
            status = child.wait() => Some(status),
            _ = shutdown => None,
        };
        let status = match finished {
            Some(status) => status,
            None => {
                forward_terminate(&mut child);
                child.wait().await
            }
        }
        .map_err(LaunchError::Wait)?;

        let code = exit_code(status);
        info!("Renderer exited with code {}", code);
        Ok(code)
    }
}

#[async_trait]
impl Spawner for ProcessSpawner {
    async fn run(&self, command: &RendererCommand) -> Result<i32, LaunchError> {
        self.run_until(command, shutdown_signal()).await
    }
}

/// Map a child's exit status to the code the launcher exits with
///
/// A child killed by signal N maps to `128 + N`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    crate::error::FAILURE_EXIT_CODE
}

/// Resolves on the first SIGINT or SIGTERM
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let (Ok(mut sigint), Ok(mut sigterm)) = (signal(SignalKind::interrupt()), signal(SignalKind::terminate()))
        else {
            warn!("Failed to install signal handlers, signals will not be forwarded to the renderer");
            return std::future::pending().await;
        };

        tokio::select! {
            _ = sigint.recv() => warn!("SIGINT received, stopping renderer"),
            _ = sigterm.recv() => warn!("SIGTERM received, stopping renderer"),
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
        warn!("Ctrl+C received, stopping renderer");
    }
}

fn forward_terminate(child: &mut Child) {
    #[cfg(unix)]
    {
        use nix::sys::signal::{Signal, kill};
        use nix::unistd::Pid;

        if let Some(pid) = child.id() {
            debug!("forward_terminate: sending SIGTERM to {}", pid);
            if let Err(e) = kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
                warn!("Failed to send SIGTERM to renderer {}: {}", pid, e);
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = child.start_kill() {
            warn!("Failed to stop renderer: {}", e);
        }
    }
}
