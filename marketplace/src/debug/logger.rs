//! Logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{LogConfig, DEFAULT_LOG_FILTER, LOG_FILE_NAME};

/// Initialize the logging system
///
/// Sets up:
/// - Human-readable output on stderr, with source locations at debug level
/// - Optional daily rotated file in `log_dir` (non-blocking writes)
/// - Panic hook that records the panic location before unwinding
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// the lifetime of the program. Calling `init` twice is harmless: the
/// second subscriber is rejected and a debug line is emitted instead.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let mut guard = None;
    let file_layer = if config.file_logging {
        match fs::create_dir_all(&config.log_dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
                let (writer, file_guard) = tracing_appender::non_blocking(appender);
                guard = Some(file_guard);
                Some(
                    fmt::layer()
                        .with_writer(writer)
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_line_number(true)
                        .with_ansi(false),
                )
            }
            Err(e) => {
                eprintln!("Warning: Failed to create log directory: {}", e);
                None
            }
        }
    } else {
        None
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(config.is_debug_enabled())
        .with_line_number(config.is_debug_enabled());

    let initialized = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    match initialized {
        Ok(()) => {
            tracing::info!(
                log_level = %config.log_level,
                file_logging = config.file_logging,
                log_file = %config.log_file().display(),
                "Logging initialized"
            );
            setup_panic_hook();
        }
        Err(e) => tracing::debug!("Logging already initialized: {}", e),
    }

    guard
}

/// Log panics with their location, then defer to the default hook.
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");

        default_panic(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_with_file_logging_returns_guard() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            log_level: "marketplace=debug".to_string(),
            log_dir: dir.path().join("logs"),
            file_logging: true,
        };

        let guard = init(&config);
        assert!(guard.is_some());
        assert!(dir.path().join("logs").is_dir());

        // Second init is rejected quietly
        let _ = init(&LogConfig::default());
    }
}
