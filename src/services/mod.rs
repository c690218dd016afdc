//! Service implementations
//!
//! This module contains the process launcher and the environment helpers the
//! owning framework relies on when spawning frontend server processes.

pub mod environment;
pub mod launcher;

pub use environment::{frontend_environment, frontend_logfile};
pub use launcher::PanelFrontend;

#[cfg(test)]
mod tests;
