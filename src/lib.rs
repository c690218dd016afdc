//! Frontend adapter that serves Panel apps as child processes
//!
//! This library lets a host application framework expose a Panel web UI as one
//! of its frontends: it builds the `panel serve` command line and environment
//! for a user-supplied entry point (a source file or a free render function),
//! spawns the serving tool as a child process, optionally redirects its output
//! to log files, and kills it on stop.

pub mod config;
pub mod error;
pub mod logging;
pub mod services;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::Settings;
pub use error::{FrontendError, FrontendResult};
pub use services::PanelFrontend;
pub use traits::Frontend;
pub use types::{EntryPoint, RunMode};
