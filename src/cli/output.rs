//! Plan rendering for the CLI

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::PlanFormat;
use crate::output::BuildPlan;

pub struct OutputFormatter {
    format: PlanFormat,
}

impl OutputFormatter {
    pub fn new(format: PlanFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, plan: &BuildPlan) -> Result<String> {
        match self.format {
            PlanFormat::Toml => plan.to_toml(),
            PlanFormat::Json => plan.to_json(),
        }
    }

    /// Renders the plan and writes it to `path`, or stdout when `path` is `None`
    pub fn write(&self, plan: &BuildPlan, path: Option<&Path>) -> Result<()> {
        let rendered = self.format(plan)?;
        match path {
            Some(path) => fs::write(path, rendered)
                .with_context(|| format!("Failed to write build plan to {:?}", path)),
            None => {
                println!("{}", rendered.trim_end());
                Ok(())
            }
        }
    }
}
