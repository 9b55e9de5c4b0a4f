//! Errors raised while reading version hints

use std::path::PathBuf;
use thiserror::Error;

/// A version source file exists but its content cannot be interpreted
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to parse {path:?}: {source}")]
    InvalidBuildpackYml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unsupported bundler.version in {path:?}: expected a string or number, found {found}")]
    UnsupportedVersionType { path: PathBuf, found: String },

    #[error("Missing version after BUNDLED WITH in {path:?}")]
    MissingBundledWithVersion { path: PathBuf },

    #[error("Invalid bundler version '{version}' in {path:?}")]
    InvalidVersion { path: PathBuf, version: String },
}

impl ParseError {
    /// Path of the file that failed to parse
    pub fn path(&self) -> &PathBuf {
        match self {
            ParseError::InvalidBuildpackYml { path, .. }
            | ParseError::UnsupportedVersionType { path, .. }
            | ParseError::MissingBundledWithVersion { path }
            | ParseError::InvalidVersion { path, .. } => path,
        }
    }
}
