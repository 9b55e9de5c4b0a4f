//! Well-known names shared by the parsers and the detector

/// Dependency name used in every provision and requirement
pub const BUNDLER: &str = "bundler";

/// Buildpack configuration file, relative to the working directory
pub const BUILDPACK_YML_SOURCE: &str = "buildpack.yml";

/// Bundler lock file, relative to the working directory
pub const GEMFILE_LOCK_SOURCE: &str = "Gemfile.lock";
