//! Version source parsers
//!
//! Each parser reads exactly one well-known file and returns the Bundler
//! version it declares. The contract shared by all of them:
//!
//! - `Ok(None)` when the file is absent or declares no version
//! - `Ok(Some(version))` when a version is found
//! - `Err(_)` only when the file exists but cannot be read or interpreted

mod buildpack_yml;
mod gemfile_lock;

pub use buildpack_yml::BuildpackYmlParser;
pub use gemfile_lock::GemfileLockParser;

use anyhow::Result;
use std::path::Path;

/// Reads a Bundler version hint from a single file
#[cfg_attr(test, mockall::automock)]
pub trait VersionParser: Send + Sync {
    fn parse_version(&self, path: &Path) -> Result<Option<String>>;
}
