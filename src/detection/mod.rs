//! Bundler detection: turns version hints into a build plan

pub mod detector;
pub mod types;

pub use detector::Detector;
pub use types::{DetectContext, DetectResult};
