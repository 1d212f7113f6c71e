use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Session log directory: `~/.cache/hothub/logs/`.
fn log_dir() -> Option<PathBuf> {
    let cache = dirs::cache_dir()?;
    let dir = cache.join("hothub").join("logs");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Route tracing to a per-session file; the terminal belongs to the UI.
///
/// Returns the guard that flushes the writer on drop, or None when no cache
/// directory is available (logging is then disabled, not an error).
pub fn init() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let file = tracing_appender::rolling::never(dir, format!("{stamp}.log"));
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}
