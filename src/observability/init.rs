//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFile;
use crate::Config;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `RUST_LOG` nor the configuration sets one.
pub const DEFAULT_LEVEL: &str = "info";

/// Initializes the global tracing subscriber.
///
/// Sets up a pipeline that:
/// 1. Filters events by the resolved level
/// 2. Formats them as plain text
/// 3. Writes to stderr, or to a rotating log file when one is configured
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable
/// 2. `config.log_level`
/// 3. [`DEFAULT_LEVEL`]
///
/// # Initialization Behavior
///
/// - Creates the log file's directory if it doesn't exist
/// - Falls back to stderr if that directory cannot be created
/// - Idempotent: only the first call takes effect, later calls are ignored
///
/// # Example
///
/// ```rust
/// use tickoff::observability::init_tracing;
/// use tickoff::Config;
///
/// let config = Config {
///     log_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_level.as_deref().unwrap_or(DEFAULT_LEVEL))
    });

    let log_file = config.log_file_path().filter(|path| {
        path.parent()
            .map_or(true, |dir| std::fs::create_dir_all(dir).is_ok())
    });

    let registry = tracing_subscriber::registry().with(filter);
    let _ = match log_file {
        Some(path) => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(RotatingFile::new(path))),
            )
            .try_init(),
        None => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
}
