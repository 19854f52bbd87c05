//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events by level
/// 2. Formats them compactly, one line per event
/// 3. Writes to stderr, keeping stdout free for rendered documents
///
/// # Parameters
///
/// * `config` - Site configuration containing the `trace_level` option
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: only the first call installs a subscriber, later calls are
/// silently ignored.
///
/// # Example
///
/// ```
/// use avsite::observability::init_tracing;
/// use avsite::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.clone().unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}
