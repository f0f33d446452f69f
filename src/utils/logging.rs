use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system with the specified log level.
///
/// Console diagnostics go to stderr so that stdout only carries the API
/// response. When `log_dir` is given, logs are also written to daily
/// rotating files in that directory.
///
/// # Arguments
///
/// * `log_level` - An `EnvFilter` directive (e.g. "info", "debug", "deepseek_client=trace")
/// * `log_dir` - Directory for rotating log files, if file logging is wanted
///
/// # Returns
///
/// The guard of the background file writer. It must be kept alive until the
/// process exits, otherwise buffered lines are lost.
///
/// # Example
///
/// ```no_run
/// let _guard = deepseek_client::utils::init_logging("info", None);
/// ```
pub fn init_logging(log_level: &str, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match EnvFilter::try_new(log_level) {
        Ok(f) => f,
        Err(_) => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", log_level);
            EnvFilter::new("info")
        }
    };

    let stderr_layer = fmt::layer()
        .with_line_number(true)
        .with_writer(std::io::stderr);

    match log_dir {
        Some(dir) => {
            let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "deepseek-client.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(writer);

            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            None
        }
    }
}
