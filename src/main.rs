//! Development runner for serving a Panel entry point
//!
//! Starts the frontend server process from the command line, mirroring how
//! the owning framework would drive the launcher, and stops it on Ctrl+C.

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::info;

use panel_frontend::{logging, EntryPoint, PanelFrontend, RunMode, Settings};

/// Serves a Panel entry point as a framework frontend child process
#[derive(Parser)]
#[command(name = "panel-frontend")]
#[command(about = "Launches a Panel serving process for a file or render function entry point")]
struct Args {
    /// Path to the .py or .ipynb file to serve
    #[arg(long, conflicts_with = "render_fn")]
    entry: Option<std::path::PathBuf>,

    /// Free render function reference ("pkg.module:function")
    #[arg(long)]
    render_fn: Option<String>,

    /// Component name, used as the serve prefix and log subdirectory
    #[arg(long, default_value = "panel")]
    name: String,

    /// Bind address for the serving process
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Serving port
    #[arg(long, default_value_t = 5006)]
    port: u16,

    /// Enable the serving tool's autoreload
    #[arg(long)]
    autoreload: bool,

    /// Redirect child output to log files as in a hosted deployment
    #[arg(long)]
    hosted: bool,

    /// Base directory for per-component log files
    #[arg(long)]
    log_dir: Option<std::path::PathBuf>,

    /// Interpreter used to run the serving tool
    #[arg(long)]
    python_bin: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing(Some(&args.log_level));

    let entry_point = match (&args.entry, &args.render_fn) {
        (Some(path), None) => EntryPoint::file(path),
        (None, Some(reference)) => EntryPoint::render_fn(reference)?,
        _ => anyhow::bail!("exactly one of --entry or --render-fn is required"),
    };

    let mut settings = Settings::from_env();
    if args.autoreload {
        settings = settings.with_autoreload(true);
    }
    if args.hosted {
        settings = settings.with_run_mode(RunMode::Hosted);
    }
    if let Some(log_dir) = args.log_dir {
        settings = settings.with_log_dir(log_dir);
    }
    if let Some(python_bin) = args.python_bin {
        settings = settings.with_python_bin(python_bin);
    }

    let mut frontend = PanelFrontend::new(args.name, entry_point, settings);
    frontend
        .start_server(&args.host, args.port)
        .await
        .context("failed to start frontend server")?;
    info!(
        name = frontend.name(),
        entry_point = ?frontend.entry_point(),
        "frontend server running on {}:{}",
        args.host,
        args.port
    );

    signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    info!("shutting down");
    frontend.stop_server().await?;
    Ok(())
}
