use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Directory the rolling appender writes into when file logging is on.
const LOG_DIR: &str = "logs";

/// Initialize the logging system.
///
/// Stdout always receives log lines annotated with their source location.
/// With `log_to_file` set, the same stream is additionally written to a
/// daily rotating file under `logs/`, without ANSI escapes.
///
/// An unparseable `log_level` falls back to "info" with a note on stderr.
///
/// # Example
///
/// ```no_run
/// pubapi::utils::init_logging("info", false);
/// ```
pub fn init_logging(log_level: &str, log_to_file: bool) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}', defaulting to 'info'", log_level);
        EnvFilter::new("info")
    });

    let stdout_layer = fmt::layer().with_file(true).with_line_number(true);

    let file_layer = log_to_file.then(|| {
        let appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, "pubapi.log");
        fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(appender)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();
}
