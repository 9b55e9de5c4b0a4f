//! Structured logging setup for bundler-detect
//!
//! Initializes a `tracing` subscriber writing to stderr, so the build plan
//! printed on stdout is never interleaved with log lines.
//!
//! # Example
//!
//! ```no_run
//! use bundler_detect::config::DetectConfig;
//! use bundler_detect::util::{init_logging, LoggingConfig};
//!
//! let config = DetectConfig::from_env().expect("valid configuration");
//! init_logging(LoggingConfig::from_config(&config));
//!
//! tracing::info!(working_dir = "/workspace", "Detecting bundler");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::DetectConfig;

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,

    /// Include the module target (e.g., bundler_detect::detection) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Logging settings carried by the loaded configuration
    pub fn from_config(config: &DetectConfig) -> Self {
        Self {
            level: parse_level(&config.log_level),
            use_json: config.log_json,
            ..Default::default()
        }
    }
}

/// Parses a log level from a string
///
/// Case-insensitive. Unknown values fall back to `Level::INFO`.
///
/// ```
/// use bundler_detect::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("invalid"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

fn crate_directive(level: Level) -> Option<Directive> {
    format!("bundler_detect={}", level).parse().ok()
}

/// Initializes the logging system. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();

        // RUST_LOG wins over the configured level when set
        if env::var("RUST_LOG").is_err() {
            if let Some(directive) = crate_directive(config.level) {
                filter = filter.add_directive(directive);
            }
        }

        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .init();
        } else {
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlanFormat;
    use std::path::PathBuf;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("info"), Level::INFO);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
    }

    #[test]
    fn test_parse_level_case_insensitive() {
        assert_eq!(parse_level("TRACE"), Level::TRACE);
        assert_eq!(parse_level("Debug"), Level::DEBUG);
    }

    #[test]
    fn test_parse_level_invalid() {
        assert_eq!(parse_level("invalid"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.use_json);
        assert!(config.include_target);
        assert!(!config.include_location);
    }

    #[test]
    fn test_from_config() {
        let config = DetectConfig {
            working_dir: PathBuf::from("/workspace"),
            log_level: "debug".to_string(),
            log_json: true,
            plan_format: PlanFormat::Toml,
        };

        let logging = LoggingConfig::from_config(&config);
        assert_eq!(logging.level, Level::DEBUG);
        assert!(logging.use_json);
        assert!(logging.include_target);
    }

    #[test]
    fn test_crate_directive() {
        let directive = crate_directive(Level::WARN).unwrap();
        assert_eq!(directive.to_string().to_lowercase(), "bundler_detect=warn");
    }
}
