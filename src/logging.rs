//=========================================================================
// Logging
//=========================================================================
//
// One-time `env_logger` setup for binaries that drive games.
//
// Logs go to stderr, the same stream that carries the step-ceiling
// diagnostic. The default filter is `warn`, and the driver reports its
// lifecycle at `info` and below, so a default run leaves stderr holding
// only the diagnostic line.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Once;

use log::LevelFilter;

//=== LoggingConfig =======================================================

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "headless_runtime=trace"). When unset, `RUST_LOG` is used, then `warn`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

//=== init_logging() ======================================================

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
///
/// Uses `try_init`, so a logger installed elsewhere (e.g. by a test
/// harness) is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(LevelFilter::Warn);
            }
        }

        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

/// Picks the filter string: explicit config wins over the environment.
fn resolve_filter(configured: Option<String>, from_env: Option<String>) -> Option<String> {
    configured.or(from_env).filter(|f| !f.trim().is_empty())
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_wins() {
        let filter = resolve_filter(Some("debug".into()), Some("trace".into()));
        assert_eq!(filter.as_deref(), Some("debug"));
    }

    #[test]
    fn falls_back_to_environment() {
        let filter = resolve_filter(None, Some("headless_runtime=trace".into()));
        assert_eq!(filter.as_deref(), Some("headless_runtime=trace"));
    }

    #[test]
    fn blank_filter_means_default() {
        assert_eq!(resolve_filter(Some("  ".into()), None), None);
        assert_eq!(resolve_filter(None, None), None);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig {
            env_filter: Some("trace".into()),
            ..Default::default()
        });
    }
}
