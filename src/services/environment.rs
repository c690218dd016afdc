//! Child-process environment and log file conventions
//!
//! These helpers encode the framework-wide naming and addressing conventions
//! consumed by spawned frontend processes: which environment variables carry
//! the component identity and bind address, and where per-component log files
//! live.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::FrontendResult;
use crate::types::EntryPoint;

/// Environment variables added to a frontend child process
///
/// Applied on top of the inherited parent environment. For a render-function
/// entry point the module and function names are passed through so the
/// renderer script can re-import the function inside the child.
pub fn frontend_environment(
    name: &str,
    entry_point: &EntryPoint,
    host: &str,
    port: u16,
) -> HashMap<String, String> {
    let mut env = HashMap::new();
    env.insert("FRONTEND_NAME".to_string(), name.to_string());
    env.insert("FRONTEND_HOST".to_string(), host.to_string());
    env.insert("FRONTEND_PORT".to_string(), port.to_string());

    if let EntryPoint::RenderFn { module, function } = entry_point {
        env.insert("PANEL_RENDER_MODULE".to_string(), module.clone());
        env.insert("PANEL_RENDER_FUNCTION".to_string(), function.clone());
    }

    env
}

/// Path of a per-component log file, creating the component's log directory
/// if it does not exist yet
pub fn frontend_logfile(log_dir: &Path, name: &str, file_name: &str) -> FrontendResult<PathBuf> {
    let component_dir = log_dir.join(name);
    std::fs::create_dir_all(&component_dir)?;
    Ok(component_dir.join(file_name))
}
