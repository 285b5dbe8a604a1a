use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber: a console layer driven by `RUST_LOG`
/// and, when enabled, a daily-rolling JSON file layer.
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// the lifetime of the process.
pub fn init_logger(component: &str, is_dev: bool, enable_file: bool) -> Option<WorkerGuard> {
    let default_level = if is_dev { "debug" } else { "info" };
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{default_level},hyper=off,reqwest=off")));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_ansi(is_dev)
        .with_filter(console_filter);

    if !enable_file {
        tracing_subscriber::registry().with(console_layer).init();
        return None;
    }

    let log_dir = if is_dev { "./logs" } else { "/var/log/storefront" };
    let file_appender =
        RollingFileAppender::new(Rotation::DAILY, log_dir, format!("{component}.log"));
    let (file_writer, guard) = non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .json()
        .with_filter(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Some(guard)
}
