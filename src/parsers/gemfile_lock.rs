//! `Gemfile.lock` parser
//!
//! Bundler records the version that wrote the lock file in a trailing section:
//!
//! ```text
//! BUNDLED WITH
//!    2.1.4
//! ```

use super::VersionParser;
use crate::error::ParseError;
use crate::fs::{FileSystem, RealFileSystem};
use anyhow::Result;
use regex::Regex;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::debug;

const BUNDLED_WITH_HEADER: &str = "BUNDLED WITH";

pub struct GemfileLockParser {
    fs: Arc<dyn FileSystem>,
}

impl GemfileLockParser {
    pub fn new() -> Self {
        Self::with_fs(Arc::new(RealFileSystem::new()))
    }

    pub fn with_fs(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    fn extract_version(path: &Path, content: &str) -> Result<Option<String>, ParseError> {
        let mut lines = content.lines().map(str::trim_end);

        if !lines.any(|line| line == BUNDLED_WITH_HEADER) {
            return Ok(None);
        }

        let version = lines
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or_else(|| ParseError::MissingBundledWithVersion {
                path: path.to_path_buf(),
            })?;

        if !is_valid_version(version) {
            return Err(ParseError::InvalidVersion {
                path: path.to_path_buf(),
                version: version.to_string(),
            });
        }

        Ok(Some(version.to_string()))
    }
}

impl Default for GemfileLockParser {
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_version(version: &str) -> bool {
    static VERSION_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = VERSION_REGEX.get_or_init(|| {
        Regex::new(r"^\d+(\.\d+)*(\.[0-9A-Za-z]+)*$").expect("Invalid version regex")
    });
    re.is_match(version)
}

impl VersionParser for GemfileLockParser {
    fn parse_version(&self, path: &Path) -> Result<Option<String>> {
        let Some(content) = self.fs.read_if_exists(path)? else {
            debug!(path = %path.display(), "Gemfile.lock not found");
            return Ok(None);
        };

        Ok(Self::extract_version(path, &content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    const LOCKFILE: &str = "GEM
  remote: https://rubygems.org/
  specs:
    rack (2.2.3)

PLATFORMS
  ruby

DEPENDENCIES
  rack

BUNDLED WITH
   2.1.4
";

    fn parse(content: &str) -> Result<Option<String>> {
        let fs = MockFileSystem::new();
        fs.add_file("Gemfile.lock", content);
        GemfileLockParser::with_fs(Arc::new(fs)).parse_version(Path::new("/mock/Gemfile.lock"))
    }

    #[test]
    fn test_missing_file() {
        let parser = GemfileLockParser::with_fs(Arc::new(MockFileSystem::new()));
        let version = parser
            .parse_version(Path::new("/mock/Gemfile.lock"))
            .unwrap();
        assert_eq!(version, None);
    }

    #[test]
    fn test_bundled_with() {
        assert_eq!(parse(LOCKFILE).unwrap().as_deref(), Some("2.1.4"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = LOCKFILE.replace('\n', "\r\n");
        assert_eq!(parse(&content).unwrap().as_deref(), Some("2.1.4"));
    }

    #[test]
    fn test_blank_line_before_version() {
        let content = "GEM\n  specs:\n\nBUNDLED WITH\n\n   1.17.3\n\n";
        assert_eq!(parse(content).unwrap().as_deref(), Some("1.17.3"));
    }

    #[test]
    fn test_prerelease_version() {
        let content = "BUNDLED WITH\n   2.2.0.rc.1\n";
        assert_eq!(parse(content).unwrap().as_deref(), Some("2.2.0.rc.1"));
    }

    #[yare::parameterized(
        empty = { "" },
        no_section = { "GEM\n  remote: https://rubygems.org/\n  specs:\n" },
        indented_header = { "GEM\n  BUNDLED WITH\n   2.1.4\n" },
    )]
    fn test_no_version(content: &str) {
        assert_eq!(parse(content).unwrap(), None);
    }

    #[test]
    fn test_header_without_version() {
        let err = parse("GEM\n\nBUNDLED WITH\n\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::MissingBundledWithVersion { .. })
        ));
    }

    #[yare::parameterized(
        constraint = { "~> 2.1" },
        word = { "latest" },
        trailing_dot = { "2.1." },
    )]
    fn test_invalid_version(version: &str) {
        let content = format!("BUNDLED WITH\n   {}\n", version);
        match parse(&content).unwrap_err().downcast_ref::<ParseError>() {
            Some(ParseError::InvalidVersion { version: found, .. }) => {
                assert_eq!(found, version);
            }
            other => panic!("Expected InvalidVersion, got {:?}", other),
        }
    }
}
