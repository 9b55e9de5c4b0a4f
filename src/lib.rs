//! bundler-detect - build plan detection for Bundler
//!
//! Decides which Bundler version a Ruby project asks for and declares it as a
//! build plan for the host build system. Two files are consulted, in order:
//!
//! 1. `buildpack.yml` (`bundler.version`)
//! 2. `Gemfile.lock` (`BUNDLED WITH` section)
//!
//! Every version found becomes a [`Requirement`] tagged with its source file.
//! The plan always provides `bundler`, even when no version was found.
//!
//! # Example
//!
//! ```no_run
//! use bundler_detect::{DetectContext, Detector};
//!
//! # fn main() -> anyhow::Result<()> {
//! let result = Detector::default().detect(&DetectContext::new("/workspace"))?;
//! println!("{}", result.plan.to_toml()?);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod detection;
pub mod error;
pub mod fs;
pub mod output;
pub mod parsers;
pub mod util;

pub use config::{ConfigError, ConfigOverrides, DetectConfig, PlanFormat};
pub use constants::{BUILDPACK_YML_SOURCE, BUNDLER, GEMFILE_LOCK_SOURCE};
pub use detection::{DetectContext, DetectResult, Detector};
pub use error::ParseError;
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use output::{BuildPlan, Provision, Requirement, RequirementMetadata, VersionSource};
pub use parsers::{BuildpackYmlParser, GemfileLockParser, VersionParser};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
