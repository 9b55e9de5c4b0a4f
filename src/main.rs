use bundler_detect::cli::{handle_detect, CliArgs, Commands};
use bundler_detect::config::{ConfigOverrides, DetectConfig};
use bundler_detect::util::{init_logging, LoggingConfig};
use bundler_detect::VERSION;

use clap::Parser;
use tracing::{debug, error};

fn main() {
    let args = CliArgs::parse();

    let config = match DetectConfig::load(overrides_from_args(&args)) {
        Ok(config) => config,
        Err(e) => {
            init_logging(LoggingConfig::default());
            error!("{}", e);
            std::process::exit(1);
        }
    };
    init_logging(LoggingConfig::from_config(&config));

    debug!("bundler-detect v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Detect(detect_args) => handle_detect(detect_args, &config),
    };

    std::process::exit(exit_code);
}

/// Command-line flags take precedence over `BUNDLER_DETECT_*` variables
fn overrides_from_args(args: &CliArgs) -> ConfigOverrides {
    let log_level = if let Some(level) = &args.log_level {
        Some(level.clone())
    } else if args.verbose {
        Some("debug".to_string())
    } else if args.quiet {
        Some("error".to_string())
    } else {
        None
    };

    let Commands::Detect(detect_args) = &args.command;

    ConfigOverrides {
        working_dir: detect_args.working_dir.clone(),
        log_level,
        plan_format: detect_args.format.map(Into::into),
    }
}
