use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::PlanFormat;

/// Bundler build plan detection
#[derive(Parser, Debug)]
#[command(
    name = "bundler-detect",
    about = "Detect the Bundler version a Ruby project requires",
    version,
    long_about = "bundler-detect reads buildpack.yml and Gemfile.lock in a project root and \
                  emits a build plan that provides bundler and lists every version requirement \
                  found, tagged with the file it came from."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Write the Bundler build plan for a project",
        long_about = "Reads buildpack.yml and Gemfile.lock under PATH and prints the build plan.\n\n\
                      Examples:\n  \
                      bundler-detect detect\n  \
                      bundler-detect detect /workspace\n  \
                      bundler-detect detect --format json --output plan.json"
    )]
    Detect(DetectArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "PATH",
        help = "Project root (defaults to BUNDLER_DETECT_WORKING_DIR or the current directory)"
    )]
    pub working_dir: Option<PathBuf>,

    #[arg(short = 'f', long, value_enum, help = "Plan output format")]
    pub format: Option<OutputFormatArg>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the plan to a file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Toml,
    Json,
}

impl From<OutputFormatArg> for PlanFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Toml => PlanFormat::Toml,
            OutputFormatArg::Json => PlanFormat::Json,
        }
    }
}
