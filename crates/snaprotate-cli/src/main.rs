//! snaprotate - rotate Contabo VPS snapshots.
//!
//! One pass per invocation: authenticate, then for every instance delete the
//! existing snapshots and create a fresh one named `<instance>-<Mon-DD-YYYY>`.
//! All diagnostics go to the log file; rotation failures never change the
//! exit status.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use snaprotate_core::{ApiClient, Config};

/// Filter used when RUST_LOG is not set
const DEFAULT_LOG_FILTER: &str = "info,snaprotate=debug,snaprotate_core=debug";

/// Initialize the tracing subscriber, writing to a freshly truncated log file.
/// The returned guard must live until exit so buffered lines are flushed.
fn init_tracing(log_path: &Path) -> Result<WorkerGuard> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=trace)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter)
        .init();

    Ok(guard)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // Config errors before logging is up can only be reported via the exit status
    let config = Config::load()?;
    let _guard = init_tracing(&config.log_file()?)?;
    info!("snaprotate starting");

    rotate(&config).await;

    info!("snaprotate finished");
    Ok(())
}

/// Run one rotation pass, logging every failure instead of returning it
async fn rotate(config: &Config) {
    let credentials = match config.credentials() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!(error = %e, "Configuration incomplete, nothing to do");
            return;
        }
    };
    let timeout = match config.request_timeout() {
        Ok(timeout) => timeout,
        Err(e) => {
            error!(error = %e, "Configuration invalid, nothing to do");
            return;
        }
    };

    let client = match ApiClient::with_endpoints(config.auth_url(), config.api_url(), timeout) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to build HTTP client");
            return;
        }
    };

    let today = Local::now().date_naive();
    match snaprotate_core::run(&client, &credentials, today).await {
        Ok(report) => {
            report.log_summary();
            if !report.is_clean() {
                warn!("Some instances were not fully rotated");
            }
        }
        Err(e) => error!(error = %e, "Rotation aborted"),
    }
}
