use color_eyre::Result;
use std::{fs, path::Path};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, prelude::*};

const DEFAULT_FILTER: &str = "info,flow_account_tui=debug";

/// Logs go to `<data_dir>/logs/flow-account-tui.log`; the terminal belongs to
/// the UI. Keep the guard alive until exit so buffered lines are flushed.
pub fn init(data_dir: &Path) -> Result<WorkerGuard> {
    let log_dir = data_dir.join("logs");
    fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "flow-account-tui.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
        );

    tracing_subscriber::registry().with(file_layer).try_init()?;
    Ok(guard)
}
