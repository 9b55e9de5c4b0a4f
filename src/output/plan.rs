//! Build plan data structures
//!
//! The plan is what detection hands to the host build system: what this
//! component can provide and which versions the project asked for. It
//! renders to the host's TOML plan format:
//!
//! ```toml
//! [[provides]]
//! name = "bundler"
//!
//! [[requires]]
//! name = "bundler"
//! version = "2.1.4"
//!
//! [requires.metadata]
//! version-source = "buildpack.yml"
//! ```

use crate::constants::{BUILDPACK_YML_SOURCE, BUNDLER, GEMFILE_LOCK_SOURCE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// File a version requirement was read from
///
/// Provenance only. Consumers decide precedence between sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VersionSource {
    #[serde(rename = "buildpack.yml")]
    BuildpackYml,
    #[serde(rename = "Gemfile.lock")]
    GemfileLock,
}

impl VersionSource {
    pub fn file_name(&self) -> &'static str {
        match self {
            VersionSource::BuildpackYml => BUILDPACK_YML_SOURCE,
            VersionSource::GemfileLock => GEMFILE_LOCK_SOURCE,
        }
    }
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Declares that this component can supply a dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provision {
    pub name: String,
}

impl Provision {
    pub fn bundler() -> Self {
        Self {
            name: BUNDLER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementMetadata {
    #[serde(rename = "version-source")]
    pub version_source: VersionSource,
}

/// Declares that the project needs a dependency at a version found in `metadata.version_source`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub name: String,
    pub version: String,
    pub metadata: RequirementMetadata,
}

impl Requirement {
    pub fn bundler(version: impl Into<String>, source: VersionSource) -> Self {
        Self {
            name: BUNDLER.to_string(),
            version: version.into(),
            metadata: RequirementMetadata {
                version_source: source,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildPlan {
    #[serde(default)]
    pub provides: Vec<Provision>,
    /// Requirements in the order their sources were read
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<Requirement>,
}

impl BuildPlan {
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize build plan to TOML")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize build plan to JSON")
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse build plan TOML")
    }
}
