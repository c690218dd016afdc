//! Frontend process launcher
//!
//! Builds the command line and environment for the external serving tool,
//! spawns it as a single child process, optionally redirects its output to
//! log files, and kills it on stop. The launcher does not wait on the child
//! and does not monitor its liveness; crash detection is left to the owning
//! framework.

use std::fs::File;
use std::process::Stdio;

use tokio::process::{Child, Command};
use tracing::debug;

use crate::config::Settings;
use crate::error::{FrontendError, FrontendResult};
use crate::services::environment::{frontend_environment, frontend_logfile};
use crate::traits::Frontend;
use crate::types::{absolutize, EntryPoint};

/// Redirection targets for the child's output, opened only in hosted mode
struct LogFiles {
    error: File,
    output: File,
}

/// Serves a Panel entry point as a child process of the owning framework
///
/// Owns at most one live child at a time. State moves from not-started to
/// running on [`start_server`](PanelFrontend::start_server) and back on
/// [`stop_server`](PanelFrontend::stop_server); stopping before any start is
/// an error, and starting twice replaces the stored handle without stopping
/// the previous child.
pub struct PanelFrontend {
    name: String,
    entry_point: EntryPoint,
    settings: Settings,
    process: Option<Child>,
    log_files: Option<LogFiles>,
}

impl PanelFrontend {
    /// Create a launcher for the given component name and entry point
    ///
    /// Entry point validation happens when the [`EntryPoint`] is constructed;
    /// method references never reach this point.
    pub fn new(name: impl Into<String>, entry_point: EntryPoint, settings: Settings) -> Self {
        let name = name.into();
        debug!(name = %name, entry_point = ?entry_point, "frontend initialized");
        Self {
            name,
            entry_point,
            settings,
            process: None,
            log_files: None,
        }
    }

    /// Component name, used as the serve prefix and the log subdirectory
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entry_point(&self) -> &EntryPoint {
        &self.entry_point
    }

    /// Spawn the serving process bound to `host:port`
    pub async fn start_server(&mut self, host: &str, port: u16) -> FrontendResult<()> {
        debug!(name = %self.name, host, port, "starting frontend server");

        let env = frontend_environment(&self.name, &self.entry_point, host, port);
        let argv = self.serve_command(host, port)?;
        debug!(name = %self.name, ?argv, "serve command");

        let mut cmd = Command::new(&self.settings.python_bin);
        cmd.args(&argv).envs(env).stdin(Stdio::null());

        if !self.settings.run_mode.is_local() {
            // Don't log to file when developing locally, it makes the child
            // harder to debug.
            self.open_log_files()?;
        }
        if let Some(log_files) = &self.log_files {
            // The serving tool writes its regular log stream to stderr, so
            // stderr is captured as output.log and stdout as error.log.
            cmd.stdout(Stdio::from(log_files.error.try_clone()?));
            cmd.stderr(Stdio::from(log_files.output.try_clone()?));
        }

        let child = cmd
            .spawn()
            .map_err(|source| FrontendError::SpawnFailed { source })?;
        debug!(name = %self.name, pid = ?child.id(), "frontend server spawned");
        self.process = Some(child);
        Ok(())
    }

    /// Forcibly terminate the serving process and close any open log files
    pub async fn stop_server(&mut self) -> FrontendResult<()> {
        let mut child = self.process.take().ok_or(FrontendError::NotRunning)?;
        // The child may already have exited; kill errors are not actionable.
        let _ = child.kill().await;
        let _ = child.wait().await;
        self.close_log_files();
        debug!(name = %self.name, "frontend server stopped");
        Ok(())
    }

    /// Argument vector passed to the interpreter when spawning the child
    ///
    /// The serve target is the bundled renderer script for a render-function
    /// entry point, or the absolutized source path for a file entry point.
    pub fn serve_command(&self, host: &str, port: u16) -> FrontendResult<Vec<String>> {
        let target = match &self.entry_point {
            EntryPoint::RenderFn { .. } => absolutize(&self.settings.renderer_script)?,
            EntryPoint::FilePath(path) => absolutize(path)?,
        };

        let mut command = vec![
            "-m".to_string(),
            "panel".to_string(),
            "serve".to_string(),
            target.display().to_string(),
            "--port".to_string(),
            port.to_string(),
            "--address".to_string(),
            host.to_string(),
            "--prefix".to_string(),
            self.name.clone(),
            "--allow-websocket-origin".to_string(),
            self.settings.allowed_hosts.clone(),
        ];
        if self.settings.autoreload {
            command.push("--autoreload".to_string());
        }
        Ok(command)
    }

    fn open_log_files(&mut self) -> FrontendResult<()> {
        // Close any handles left over from a previous start first.
        self.close_log_files();

        let error_path = frontend_logfile(&self.settings.log_dir, &self.name, "error.log")?;
        let output_path = frontend_logfile(&self.settings.log_dir, &self.name, "output.log")?;

        let error = File::create(&error_path).map_err(|source| FrontendError::LogFile {
            path: error_path.display().to_string(),
            source,
        })?;
        let output = File::create(&output_path).map_err(|source| FrontendError::LogFile {
            path: output_path.display().to_string(),
            source,
        })?;

        self.log_files = Some(LogFiles { error, output });
        Ok(())
    }

    /// Best-effort close, dropping the handles; never fails
    fn close_log_files(&mut self) {
        self.log_files = None;
    }
}

#[async_trait::async_trait]
impl Frontend for PanelFrontend {
    async fn start_server(&mut self, host: &str, port: u16) -> FrontendResult<()> {
        PanelFrontend::start_server(self, host, port).await
    }

    async fn stop_server(&mut self) -> FrontendResult<()> {
        PanelFrontend::stop_server(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RunMode;
    use tempfile::TempDir;

    /// Interpreter stand-in that accepts any arguments and exits immediately
    const FAKE_INTERPRETER: &str = "true";

    fn local_frontend(entry_point: EntryPoint) -> PanelFrontend {
        let settings = Settings::default().with_python_bin(FAKE_INTERPRETER);
        PanelFrontend::new("home", entry_point, settings)
    }

    #[tokio::test]
    async fn test_stop_before_start_fails_with_not_running() {
        let mut frontend = local_frontend(EntryPoint::file("apps/dashboard.py"));
        let result = frontend.stop_server().await;
        assert!(matches!(result, Err(FrontendError::NotRunning)));
    }

    #[tokio::test]
    async fn test_start_stores_process_handle() {
        let mut frontend = local_frontend(EntryPoint::file("apps/dashboard.py"));
        frontend.start_server("127.0.0.1", 9000).await.unwrap();
        assert!(frontend.process.is_some());
        frontend.stop_server().await.unwrap();
        assert!(frontend.process.is_none());
    }

    #[tokio::test]
    async fn test_local_mode_opens_no_log_files() {
        let mut frontend = local_frontend(EntryPoint::file("apps/dashboard.py"));
        frontend.start_server("127.0.0.1", 9000).await.unwrap();
        assert!(frontend.log_files.is_none());
        frontend.stop_server().await.unwrap();
    }

    #[tokio::test]
    async fn test_hosted_mode_opens_both_log_files() {
        let log_dir = TempDir::new().unwrap();
        let settings = Settings::default()
            .with_python_bin(FAKE_INTERPRETER)
            .with_run_mode(RunMode::Hosted)
            .with_log_dir(log_dir.path());
        let mut frontend = PanelFrontend::new("home", EntryPoint::file("apps/dashboard.py"), settings);

        frontend.start_server("127.0.0.1", 9000).await.unwrap();
        assert!(frontend.log_files.is_some());
        assert!(log_dir.path().join("home").join("error.log").exists());
        assert!(log_dir.path().join("home").join("output.log").exists());

        frontend.stop_server().await.unwrap();
        assert!(frontend.log_files.is_none());
    }

    #[tokio::test]
    async fn test_second_start_replaces_handle_without_stopping_previous_child() {
        let log_dir = TempDir::new().unwrap();
        let settings = Settings::default()
            .with_python_bin(FAKE_INTERPRETER)
            .with_run_mode(RunMode::Hosted)
            .with_log_dir(log_dir.path());
        let mut frontend =
            PanelFrontend::new("home", EntryPoint::file("apps/dashboard.py"), settings);

        frontend.start_server("127.0.0.1", 9000).await.unwrap();
        frontend.start_server("127.0.0.1", 9001).await.unwrap();

        // Starting twice is not guarded: only the latest handle is tracked,
        // and the log handles were closed and reopened on the second start.
        assert!(frontend.process.is_some());
        assert!(frontend.log_files.is_some());

        // One stored handle means exactly one successful stop.
        frontend.stop_server().await.unwrap();
        assert!(matches!(
            frontend.stop_server().await,
            Err(FrontendError::NotRunning)
        ));
    }

    #[tokio::test]
    async fn test_spawn_failure_propagates() {
        let settings = Settings::default().with_python_bin("/nonexistent/python3");
        let mut frontend =
            PanelFrontend::new("home", EntryPoint::file("apps/dashboard.py"), settings);
        let result = frontend.start_server("127.0.0.1", 9000).await;
        assert!(matches!(result, Err(FrontendError::SpawnFailed { .. })));
        // A failed start leaves the launcher in the not-started state.
        assert!(matches!(
            frontend.stop_server().await,
            Err(FrontendError::NotRunning)
        ));
    }

    #[tokio::test]
    async fn test_stop_twice_fails_with_not_running() {
        let mut frontend = local_frontend(EntryPoint::file("apps/dashboard.py"));
        frontend.start_server("127.0.0.1", 9000).await.unwrap();
        frontend.stop_server().await.unwrap();
        assert!(matches!(
            frontend.stop_server().await,
            Err(FrontendError::NotRunning)
        ));
    }
}
