//! Build plan schema and serialization

pub mod plan;

pub use plan::{BuildPlan, Provision, Requirement, RequirementMetadata, VersionSource};
