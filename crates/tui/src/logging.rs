//! Tracing setup writing to a log file.
//!
//! The terminal UI owns stdout, so log output goes through a non-blocking
//! file appender instead.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber.
///
/// The returned guard must be held for the lifetime of the process so
/// buffered log lines are flushed on exit.
pub fn init() -> WorkerGuard {
    let appender = tracing_appender::rolling::daily("logs", "rating-tui.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}
