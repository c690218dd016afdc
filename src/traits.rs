//! Trait definitions with mockall annotations for testing
//!
//! The [`Frontend`] trait is the seam between the owning framework and a
//! concrete frontend implementation; the generated mock lets framework-side
//! code be tested without spawning real server processes.

use crate::error::FrontendResult;

/// A frontend that the owning framework can start and stop
///
/// Implementations own at most one live child process at a time. `start_server`
/// is not idempotent: a second call replaces the stored handle without
/// stopping the previous child.
#[mockall::automock]
#[async_trait::async_trait]
pub trait Frontend: Send + Sync {
    /// Spawn the serving process bound to `host:port`.
    ///
    /// Spawn failures (for example a missing interpreter) are fatal and
    /// propagate to the caller; there is no retry.
    async fn start_server(&mut self, host: &str, port: u16) -> FrontendResult<()>;

    /// Forcibly terminate the serving process and close any open log files.
    ///
    /// Fails with `NotRunning` if `start_server` was never called.
    async fn stop_server(&mut self) -> FrontendResult<()>;
}
