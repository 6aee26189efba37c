#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install a JSON-lines subscriber writing to `log_dir/kiamtsa-trace.jsonl`.
///
/// Keep the returned guard alive until exit; dropping it flushes the log.
/// Only the first call installs anything and gets a guard back.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let mut guard = None;
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "kiamtsa-trace.jsonl");
        let (non_blocking, worker) = tracing_appender::non_blocking(file_appender);
        guard = Some(worker);

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kiamtsa=debug")),
            )
            .init();
    });
    guard
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) -> Option<()> {
    None
}
