//! Tracing subscriber setup
//!
//! Every event goes to a rolling file under `log_dir` and to stdout. With
//! `use_json` both sinks emit one JSON object per line, so the container log
//! and the file can be ingested by the same parser.

use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Crates whose info-level output drowns request logs
const QUIET_TARGETS: &[&str] = &["sqlx=warn", "hyper=warn"];

fn file_appender(config: &AppConfig) -> RollingFileAppender {
    match config.rotation.as_str() {
        "hourly" => rolling::hourly(&config.log_dir, &config.log_file),
        "daily" => rolling::daily(&config.log_dir, &config.log_file),
        _ => rolling::never(&config.log_dir, &config.log_file),
    }
}

/// Default filter when `RUST_LOG` is not set
fn filter_directive(config: &AppConfig) -> String {
    let mut directive = config.log_level.clone();
    for target in QUIET_TARGETS {
        directive.push(',');
        directive.push_str(target);
    }
    directive
}

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the process or buffered file output is lost.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender(config));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(file_writer)
            .with_ansi(false);
        let stdout_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stdout);
        registry.with(file_layer).with(stdout_layer).init();
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(file_writer)
            .with_ansi(false);
        let stdout_layer = fmt::layer()
            .with_target(false)
            .with_writer(std::io::stdout)
            .with_ansi(true);
        registry.with(file_layer).with(stdout_layer).init();
    }

    guard
}
