//! Structured logging setup
//!
//! Logs go to stderr through `tracing-subscriber` so that `--format json`
//! output on stdout stays machine-readable. `RUST_LOG` directives are
//! honored on top of the resolved level.

use mentor_core::config::LoggingConfig as LoggingSection;
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Environment variable that overrides `[logging].level`
pub const LOG_LEVEL_ENV: &str = "MENTOR_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for mentor's own targets
    pub level: Level,

    /// Emit JSON lines instead of pretty console output
    pub use_json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            use_json: false,
        }
    }
}

impl LoggingConfig {
    /// Pick the level from, in order: `-v` flags, `MENTOR_LOG_LEVEL`, the
    /// config file.
    pub fn resolve(verbose: u8, section: &LoggingSection) -> Self {
        let level = match verbose {
            0 => match env::var(LOG_LEVEL_ENV) {
                Ok(value) => parse_level(&value),
                Err(_) => parse_level(&section.level),
            },
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };

        Self {
            level,
            use_json: section.json,
        }
    }
}

/// Parse a level name case-insensitively, defaulting to WARN
pub fn parse_level(level_str: &str) -> Level {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        for target in ["mentor", "mentor_cli", "mentor_core"] {
            if let Ok(directive) = format!("{}={}", target, config.level).parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
        }

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level(" info "), Level::INFO);
        assert_eq!(parse_level("warning"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
    }

    #[test]
    fn test_parse_level_invalid() {
        assert_eq!(parse_level("loud"), Level::WARN);
        assert_eq!(parse_level(""), Level::WARN);
    }

    #[test]
    fn test_verbose_flags_win() {
        let section = LoggingSection::default();
        assert_eq!(LoggingConfig::resolve(1, &section).level, Level::DEBUG);
        assert_eq!(LoggingConfig::resolve(3, &section).level, Level::TRACE);
    }

    #[test]
    fn test_json_follows_config() {
        let section = LoggingSection {
            level: "info".to_string(),
            json: true,
        };
        assert!(LoggingConfig::resolve(2, &section).use_json);
    }
}
