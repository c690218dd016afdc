//! Tracing setup for the runner binary

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with an optional log level
///
/// An explicit `RUST_LOG` in the environment takes precedence over the
/// requested level.
pub fn init_tracing(log_level: Option<&str>) {
    let base_level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("panel_frontend={base_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
