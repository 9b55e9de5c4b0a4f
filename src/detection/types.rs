use crate::output::BuildPlan;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Per-invocation input supplied by the host build system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectContext {
    pub working_dir: PathBuf,
}

impl DetectContext {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DetectResult {
    pub plan: BuildPlan,
}
