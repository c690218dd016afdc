//! Frontend-specific error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("Invalid entry point: {reason}")]
    InvalidEntryPoint { reason: String },

    #[error("Frontend server is not running; call start_server first")]
    NotRunning,

    #[error("Failed to spawn frontend server process")]
    SpawnFailed { source: std::io::Error },

    #[error("Failed to open log file: {path}")]
    LogFile { path: String, source: std::io::Error },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FrontendError {
    /// Construction-time rejection of an unusable entry point
    pub fn invalid_entry_point(reason: impl Into<String>) -> Self {
        Self::InvalidEntryPoint { reason: reason.into() }
    }
}

pub type FrontendResult<T> = Result<T, FrontendError>;
