//! Bundler detector
//!
//! Reads `buildpack.yml` then `Gemfile.lock`, records one requirement per
//! version found, and always provides `bundler`. Conflicting versions are
//! passed through untouched; choosing between them is the consumer's job.

use super::types::{DetectContext, DetectResult};
use crate::constants::{BUILDPACK_YML_SOURCE, GEMFILE_LOCK_SOURCE};
use crate::output::{BuildPlan, Provision, Requirement, VersionSource};
use crate::parsers::{BuildpackYmlParser, GemfileLockParser, VersionParser};
use anyhow::Result;
use tracing::{debug, info};

pub struct Detector {
    buildpack_yml_parser: Box<dyn VersionParser>,
    gemfile_lock_parser: Box<dyn VersionParser>,
}

impl Detector {
    pub fn new(
        buildpack_yml_parser: impl VersionParser + 'static,
        gemfile_lock_parser: impl VersionParser + 'static,
    ) -> Self {
        Self {
            buildpack_yml_parser: Box::new(buildpack_yml_parser),
            gemfile_lock_parser: Box::new(gemfile_lock_parser),
        }
    }

    /// Builds the plan for `context.working_dir`.
    ///
    /// The first parser error is returned as-is and stops detection; the
    /// Gemfile.lock parser never runs if buildpack.yml fails.
    pub fn detect(&self, context: &DetectContext) -> Result<DetectResult> {
        let mut requires = Vec::new();

        let sources: [(&dyn VersionParser, &str, VersionSource); 2] = [
            (
                self.buildpack_yml_parser.as_ref(),
                BUILDPACK_YML_SOURCE,
                VersionSource::BuildpackYml,
            ),
            (
                self.gemfile_lock_parser.as_ref(),
                GEMFILE_LOCK_SOURCE,
                VersionSource::GemfileLock,
            ),
        ];

        for (parser, file_name, source) in sources {
            let path = context.working_dir.join(file_name);
            let version = parser.parse_version(&path)?;

            match version.filter(|v| !v.is_empty()) {
                Some(version) => {
                    debug!(%source, %version, "Found bundler version");
                    requires.push(Requirement::bundler(version, source));
                }
                None => debug!(%source, "No bundler version"),
            }
        }

        info!(
            working_dir = %context.working_dir.display(),
            requirements = requires.len(),
            "Bundler detection complete"
        );

        Ok(DetectResult {
            plan: BuildPlan {
                provides: vec![Provision::bundler()],
                requires,
            },
        })
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(BuildpackYmlParser::new(), GemfileLockParser::new())
    }
}
