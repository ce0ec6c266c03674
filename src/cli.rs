use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "gcovr-action",
    version,
    about = "Run gcovr from named coverage options",
    long_about = None
)]
pub struct Args {
    /// JSON config: an object of named options or an array of raw gcovr arguments
    #[arg(long = "config", short = 'c', value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Named option, e.g. -O output=reports/cov.xml -O xml (repeatable)
    #[arg(long = "option", short = 'O', value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    /// List the supported option names and the gcovr flags they map to
    #[arg(long = "list-options", action = ArgAction::SetTrue)]
    pub list_options: bool,

    /// Print --list-options as JSON
    #[arg(long = "json", action = ArgAction::SetTrue, requires = "list_options")]
    pub json: bool,

    /// Print the assembled command without checking for or running gcovr
    #[arg(long = "dry-run", action = ArgAction::SetTrue)]
    pub dry_run: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Raw gcovr arguments, passed through unchanged
    #[arg(last = true, value_name = "GCOVR_ARGS", conflicts_with_all = ["config", "options"])]
    pub raw: Vec<String>,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if the configuration is invalid, gcovr is missing, or
/// gcovr exits non-zero.
pub fn run() -> Result<()> {
    let args = Args::parse();
    run_impl::init_logging(args.verbose);
    run_impl::run_with_args(&args)
}
