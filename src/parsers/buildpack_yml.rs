//! `buildpack.yml` parser
//!
//! Reads the `bundler.version` key:
//!
//! ```yaml
//! bundler:
//!   version: 2.1.4
//! ```

use super::VersionParser;
use crate::error::ParseError;
use crate::fs::{FileSystem, RealFileSystem};
use anyhow::Result;
use serde::Deserialize;
use serde_yaml::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
struct BuildpackYml {
    #[serde(default)]
    bundler: Option<BundlerSection>,
}

#[derive(Debug, Default, Deserialize)]
struct BundlerSection {
    /// Kept as the scalar's source text, so `2.10` stays `"2.10"`
    #[serde(default)]
    version: Option<String>,
}

pub struct BuildpackYmlParser {
    fs: Arc<dyn FileSystem>,
}

impl BuildpackYmlParser {
    pub fn new() -> Self {
        Self::with_fs(Arc::new(RealFileSystem::new()))
    }

    pub fn with_fs(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    fn extract_version(path: &Path, content: &str) -> Result<Option<String>, ParseError> {
        let invalid = |source| ParseError::InvalidBuildpackYml {
            path: path.to_path_buf(),
            source,
        };

        let document: Value = serde_yaml::from_str(content).map_err(invalid)?;
        if document.is_null() {
            return Ok(None);
        }

        let version_node = document.get("bundler").and_then(|b| b.get("version"));
        if let Some(found) = version_node.and_then(unsupported_type_name) {
            return Err(ParseError::UnsupportedVersionType {
                path: path.to_path_buf(),
                found: found.to_string(),
            });
        }

        let parsed: BuildpackYml = serde_yaml::from_str(content).map_err(invalid)?;
        let version = parsed
            .bundler
            .and_then(|b| b.version)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(version)
    }
}

impl Default for BuildpackYmlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Names YAML node types that cannot hold a version string
fn unsupported_type_name(value: &Value) -> Option<&'static str> {
    match value {
        Value::Bool(_) => Some("bool"),
        Value::Sequence(_) => Some("sequence"),
        Value::Mapping(_) => Some("mapping"),
        Value::Tagged(_) => Some("tagged value"),
        Value::Null | Value::Number(_) | Value::String(_) => None,
    }
}

impl VersionParser for BuildpackYmlParser {
    fn parse_version(&self, path: &Path) -> Result<Option<String>> {
        let Some(content) = self.fs.read_if_exists(path)? else {
            debug!(path = %path.display(), "buildpack.yml not found");
            return Ok(None);
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Self::extract_version(path, &content)?)
    }
}
