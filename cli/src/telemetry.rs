use std::{path::Path, sync::Once};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static INIT: Once = Once::new();

/// Logs to stderr, and to rotated files when `log_dir` is given. Stdout is
/// reserved for command output.
pub fn setup_telemetry(log_dir: Option<&Path>) {
    INIT.call_once(|| {
        let file_appender = log_dir.and_then(|dir| {
            match RollingFileAppender::builder()
                .rotation(Rotation::HOURLY)
                .filename_prefix("tiny-spl")
                .filename_suffix("log")
                .max_log_files(48)
                .build(dir)
            {
                Ok(appender) => Some(appender),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to create log file appender: {}. Logging to stderr only.",
                        e
                    );
                    None
                }
            }
        });

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let stderr_layer = fmt::Layer::new()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            );

        if let Some(file_appender) = file_appender {
            let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(EnvFilter::new("info,tiny_spl_client=debug"));

            tracing_subscriber::registry()
                .with(stderr_layer)
                .with(file_layer)
                .with(env_filter)
                .init();

            std::mem::forget(_guard);
        } else {
            tracing_subscriber::registry()
                .with(stderr_layer)
                .with(env_filter)
                .init();
        }
    });
}
