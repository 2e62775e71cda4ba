//! Logger initialization on top of the `log` facade

use std::sync::Once;

/// Logger configuration
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "subtiling=debug"). When unset, `RUST_LOG` is consulted before falling
/// back to `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit filter, overriding `RUST_LOG`
    pub env_filter: Option<String>,
    /// Level used when no filter is given
    pub default_level: log::LevelFilter,
    /// ANSI coloring behavior
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Configuration that only reports warnings and errors by default
    pub fn quiet() -> Self {
        Self {
            default_level: log::LevelFilter::Warn,
            ..Self::default()
        }
    }
}

static INIT: Once = Once::new();

/// Initialize the global logger once; later calls are ignored
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.default_level);
        }

        builder.write_style(config.write_style);

        // A test harness may already own the global logger
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
