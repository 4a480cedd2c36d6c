//! Logging and tracing initialization.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Level used when neither `RUST_LOG` nor the configured level parses.
const FALLBACK_LEVEL: &str = "warn";

/// Initialize the tracing subscriber with the given configuration.
///
/// Output goes to stderr so the status line on stdout stays clean. `RUST_LOG`
/// overrides the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), &config.level);

    if config.json {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .without_time()
            .compact()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
}

fn build_filter(rust_log: Option<&str>, level: &str) -> EnvFilter {
    if let Some(filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return filter;
    }
    EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("Ignoring log level {level:?} ({e}), using {FALLBACK_LEVEL}");
        EnvFilter::new(FALLBACK_LEVEL)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_applies_without_rust_log() {
        assert_eq!(build_filter(None, "debug").to_string(), "debug");
    }

    #[test]
    fn test_rust_log_wins_over_config() {
        assert_eq!(build_filter(Some("trace"), "info").to_string(), "trace");
    }

    #[test]
    fn test_unparseable_levels_fall_back() {
        assert_eq!(build_filter(Some("lottie=loud"), "debug").to_string(), "debug");
        assert_eq!(build_filter(None, "lottie=loud").to_string(), FALLBACK_LEVEL);
    }
}
