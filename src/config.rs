//! Configuration management for bundler-detect
//!
//! Settings come from environment variables with defaults:
//!
//! - `BUNDLER_DETECT_WORKING_DIR`: project root to inspect - default: current directory
//! - `BUNDLER_DETECT_LOG_LEVEL`: logging level - default: "info"
//! - `BUNDLER_DETECT_LOG_JSON`: JSON log lines (true|false) - default: "false"
//! - `BUNDLER_DETECT_PLAN_FORMAT`: plan output format (toml|json) - default: "toml"

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub const WORKING_DIR_ENV: &str = "BUNDLER_DETECT_WORKING_DIR";
pub const LOG_LEVEL_ENV: &str = "BUNDLER_DETECT_LOG_LEVEL";
pub const PLAN_FORMAT_ENV: &str = "BUNDLER_DETECT_PLAN_FORMAT";
pub const LOG_JSON_ENV: &str = "BUNDLER_DETECT_LOG_JSON";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid plan format: {0}. Valid options: toml, json")]
    InvalidFormat(String),

    #[error("Invalid log level: {0}. Valid options: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Failed to resolve working directory: {0}")]
    WorkingDir(#[from] std::io::Error),
}

/// Serialization used when emitting the build plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanFormat {
    #[default]
    Toml,
    Json,
}

impl FromStr for PlanFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "toml" => Ok(PlanFormat::Toml),
            "json" => Ok(PlanFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for PlanFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanFormat::Toml => write!(f, "toml"),
            PlanFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectConfig {
    /// Project root the well-known files are resolved against
    pub working_dir: PathBuf,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit logs as JSON lines
    pub log_json: bool,

    pub plan_format: PlanFormat,
}

/// Values given on the command line. A set field replaces the environment
/// variable, which is then not read at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub working_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub plan_format: Option<PlanFormat>,
}

impl DetectConfig {
    /// Loads configuration from `BUNDLER_DETECT_*` variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(ConfigOverrides::default())
    }

    /// Loads configuration, preferring `overrides` over the environment
    pub fn load(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let working_dir = match overrides.working_dir {
            Some(dir) => dir,
            None => match env::var(WORKING_DIR_ENV) {
                Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
                _ => env::current_dir()?,
            },
        };

        let log_level = overrides
            .log_level
            .or_else(|| env::var(LOG_LEVEL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var(LOG_JSON_ENV)
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let plan_format = match overrides.plan_format {
            Some(format) => format,
            None => match env::var(PLAN_FORMAT_ENV) {
                Ok(format) => format.parse()?,
                Err(_) => PlanFormat::default(),
            },
        };

        let config = Self {
            working_dir,
            log_level,
            log_json,
            plan_format,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for DetectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DetectConfig {{")?;
        writeln!(f, "  working_dir: {}", self.working_dir.display())?;
        writeln!(f, "  log_level: {}", self.log_level)?;
        writeln!(f, "  log_json: {}", self.log_json)?;
        writeln!(f, "  plan_format: {}", self.plan_format)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var(WORKING_DIR_ENV);
        env::remove_var(LOG_LEVEL_ENV);
        env::remove_var(PLAN_FORMAT_ENV);
        env::remove_var(LOG_JSON_ENV);
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = DetectConfig::from_env().unwrap();

        assert_eq!(config.working_dir, env::current_dir().unwrap());
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert_eq!(config.plan_format, PlanFormat::Toml);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var(WORKING_DIR_ENV, "/workspace");
        env::set_var(LOG_LEVEL_ENV, "DEBUG");
        env::set_var(PLAN_FORMAT_ENV, "json");
        env::set_var(LOG_JSON_ENV, "true");

        let config = DetectConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.working_dir, PathBuf::from("/workspace"));
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
        assert_eq!(config.plan_format, PlanFormat::Json);
    }

    #[test]
    #[serial]
    fn test_overrides_replace_invalid_env() {
        clear_env();
        env::set_var(LOG_LEVEL_ENV, "verbose");
        env::set_var(PLAN_FORMAT_ENV, "yaml");
        env::set_var(WORKING_DIR_ENV, "/from-env");

        let result = DetectConfig::load(ConfigOverrides {
            working_dir: Some(PathBuf::from("/from-cli")),
            log_level: Some("Debug".to_string()),
            plan_format: Some(PlanFormat::Json),
        });
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.working_dir, PathBuf::from("/from-cli"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.plan_format, PlanFormat::Json);
    }

    #[test]
    #[serial]
    fn test_invalid_override_log_level() {
        clear_env();
        let result = DetectConfig::load(ConfigOverrides {
            log_level: Some("loud".to_string()),
            ..Default::default()
        });

        assert!(matches!(result, Err(ConfigError::InvalidLogLevel(l)) if l == "loud"));
    }

    #[test]
    #[serial]
    fn test_invalid_format() {
        clear_env();
        env::set_var(PLAN_FORMAT_ENV, "yaml");

        let result = DetectConfig::from_env();
        clear_env();

        assert!(matches!(result, Err(ConfigError::InvalidFormat(f)) if f == "yaml"));
    }

    #[test]
    #[serial]
    fn test_invalid_log_level() {
        clear_env();
        env::set_var(LOG_LEVEL_ENV, "verbose");

        let result = DetectConfig::from_env();
        clear_env();

        assert!(matches!(result, Err(ConfigError::InvalidLogLevel(_))));
    }

    #[test]
    fn test_plan_format_parse() {
        assert_eq!("TOML".parse::<PlanFormat>().unwrap(), PlanFormat::Toml);
        assert_eq!(" json ".parse::<PlanFormat>().unwrap(), PlanFormat::Json);
        assert!("xml".parse::<PlanFormat>().is_err());
    }

    #[test]
    fn test_display() {
        let config = DetectConfig {
            working_dir: PathBuf::from("/app"),
            log_level: "warn".to_string(),
            log_json: false,
            plan_format: PlanFormat::Json,
        };
        let display = config.to_string();
        assert!(display.contains("working_dir: /app"));
        assert!(display.contains("plan_format: json"));
    }
}
