//! Launcher configuration
//!
//! All knobs the launcher needs are collected into an explicit [`Settings`]
//! value instead of being read from ambient process state at spawn time.
//! Production code builds one with [`Settings::from_env`]; tests use the
//! fluent `with_*` overrides and never touch the environment.
//!
//! ## Environment variables
//! - `PANEL_AUTORELOAD`: `yes`/`true`/`1` enables the serving tool's
//!   autoreload flag.
//! - `FRONTEND_RUN_MODE`: `hosted` redirects child output to log files;
//!   anything else (or unset) means local execution with inherited output.
//! - `FRONTEND_LOG_DIR`: base directory for per-component log files
//!   (default `./logs`).
//! - `FRONTEND_PYTHON`: interpreter used to run the serving tool
//!   (default `python3`).
//! - `PANEL_RENDERER_SCRIPT`: path to the bundled renderer script
//!   (default `assets/panel_serve_render_fn.py`).
//! - `FRONTEND_ALLOWED_HOSTS`: allow-list for WebSocket origins
//!   (default `*`).

use std::path::PathBuf;

use crate::types::RunMode;

/// Configuration for launching a frontend server process
#[derive(Debug, Clone)]
pub struct Settings {
    /// Interpreter used to run the serving tool (`<python> -m panel ...`)
    pub python_bin: PathBuf,

    /// Local vs. hosted execution, controls log redirection
    pub run_mode: RunMode,

    /// Whether to pass `--autoreload` to the serving tool
    pub autoreload: bool,

    /// Base directory for per-component log files
    pub log_dir: PathBuf,

    /// Serve target used for render-function entry points
    pub renderer_script: PathBuf,

    /// Allow-list passed as `--allow-websocket-origin`
    pub allowed_hosts: String,
}

impl Settings {
    /// Build settings from the process environment, loading a `.env` file
    /// first if one is present. Explicit environment variables take
    /// precedence over `.env` values.
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();

        let autoreload = std::env::var("PANEL_AUTORELOAD")
            .map(|v| matches!(v.to_lowercase().as_str(), "yes" | "true" | "1"))
            .unwrap_or(false);

        let run_mode = match std::env::var("FRONTEND_RUN_MODE") {
            Ok(v) if v.eq_ignore_ascii_case("hosted") => RunMode::Hosted,
            _ => RunMode::Local,
        };

        Self {
            python_bin: std::env::var_os("FRONTEND_PYTHON")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("python3")),
            run_mode,
            autoreload,
            log_dir: std::env::var_os("FRONTEND_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./logs")),
            renderer_script: std::env::var_os("PANEL_RENDERER_SCRIPT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("assets/panel_serve_render_fn.py")),
            allowed_hosts: std::env::var("FRONTEND_ALLOWED_HOSTS").unwrap_or_else(|_| "*".to_string()),
        }
    }

    /// Configure the interpreter binary (fluent API)
    pub fn with_python_bin(mut self, python_bin: impl Into<PathBuf>) -> Self {
        self.python_bin = python_bin.into();
        self
    }

    /// Configure local vs. hosted execution (fluent API)
    pub fn with_run_mode(mut self, run_mode: RunMode) -> Self {
        self.run_mode = run_mode;
        self
    }

    /// Enable or disable the autoreload flag (fluent API)
    pub fn with_autoreload(mut self, autoreload: bool) -> Self {
        self.autoreload = autoreload;
        self
    }

    /// Configure the log directory (fluent API)
    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    /// Configure the renderer script path (fluent API)
    pub fn with_renderer_script(mut self, renderer_script: impl Into<PathBuf>) -> Self {
        self.renderer_script = renderer_script.into();
        self
    }

    /// Configure the WebSocket origin allow-list (fluent API)
    pub fn with_allowed_hosts(mut self, allowed_hosts: impl Into<String>) -> Self {
        self.allowed_hosts = allowed_hosts.into();
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            python_bin: PathBuf::from("python3"),
            run_mode: RunMode::Local,
            autoreload: false,
            log_dir: PathBuf::from("./logs"),
            renderer_script: PathBuf::from("assets/panel_serve_render_fn.py"),
            allowed_hosts: "*".to_string(),
        }
    }
}
