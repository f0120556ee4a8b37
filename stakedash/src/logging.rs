//! # Logging Initialization
//!
//! Structured logging to stderr plus a daily-rotated file under `logs/`.
//! Filtering comes from `RUST_LOG`, defaulting to `stakedash=info`.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "stakedash.log";

/// Initialize the tracing subscriber.
///
/// Returns the appender guard; it must stay alive for the lifetime of the
/// process or buffered log lines are dropped on exit.
pub fn init() -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stakedash=info,warn"));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    match std::fs::create_dir_all(LOG_DIR) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .with(file_layer)
                .init();
            Some(guard)
        }
        Err(e) => {
            // Fall back to stderr-only logging rather than refusing to start.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .init();
            tracing::warn!(error = %e, "could not create log directory; file logging disabled");
            None
        }
    }
}
