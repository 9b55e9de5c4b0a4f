use tracing::{debug, error};

use super::commands::DetectArgs;
use super::output::OutputFormatter;
use crate::config::DetectConfig;
use crate::detection::{DetectContext, Detector};

/// Runs detection for the CLI and returns the process exit code.
///
/// `config` already has the command-line working directory and format applied.
pub fn handle_detect(args: &DetectArgs, config: &DetectConfig) -> i32 {
    let context = DetectContext::new(config.working_dir.clone());
    debug!(
        working_dir = %context.working_dir().display(),
        format = %config.plan_format,
        "Running detect"
    );

    let detector = Detector::default();
    let result = match detector.detect(&context) {
        Ok(result) => result,
        Err(e) => {
            error!("Detection failed: {:#}", e);
            return 1;
        }
    };

    match OutputFormatter::new(config.plan_format).write(&result.plan, args.output.as_deref()) {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            1
        }
    }
}
