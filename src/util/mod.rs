//! Utility modules for bundler-detect

pub mod logging;

pub use logging::{init_logging, LoggingConfig};
