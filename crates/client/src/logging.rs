//! File-only diagnostics for the console client.
//!
//! stdout carries the game itself, so tracing output goes to
//! `<cache dir>/logs/<session>/client.log`.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Platform cache directory for session logs.
///
/// - macOS: `~/Library/Caches/heroes/logs`
/// - Linux: `~/.cache/heroes/logs` (or `$XDG_CACHE_HOME/heroes/logs`)
/// - Windows: `%LOCALAPPDATA%\heroes\cache\logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "heroes")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("heroes"))
        .join("logs")
}

/// Installs the global subscriber writing to the session's log file.
///
/// The returned guard flushes buffered lines on drop; keep it alive for the
/// whole program.
pub fn setup_logging(session_id: Option<&str>) -> Result<WorkerGuard> {
    let session_id = session_id.map(str::to_owned).unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        format!("session_{}", timestamp)
    });

    let session_log_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}
