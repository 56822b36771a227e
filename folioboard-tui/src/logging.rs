//! File logging for the TUI. The terminal belongs to the UI, so nothing is
//! written to stdout or stderr while it runs.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FOLIOBOARD_LOG";
pub const LOG_FILE: &str = "folioboard-tui.log";

/// Install a subscriber writing to `dir/folioboard-tui.log`.
///
/// The returned guard flushes buffered lines on drop and must outlive the UI.
pub fn init(dir: &Path) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("warn,folioboard_core=info,folioboard_tui=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
    Ok(guard)
}
