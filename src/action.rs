use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::process::Command;

use colored::Colorize;

use crate::error::{GcovrError, Result};
use crate::options::GcovrParams;
use crate::tool::{self, GCOVR_BIN};

/// Environment variable that puts the action in test mode.
pub const TEST_MODE_ENV: &str = "GCOVR_ACTION_TEST_MODE";

/// What the surrounding runtime tells the action about its environment.
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    /// Skip the installation check and do not spawn gcovr.
    pub test_mode: bool,
    /// Search path used to locate gcovr.
    pub path_var: Option<OsString>,
}

impl ActionContext {
    pub fn from_env() -> Self {
        let test_mode = env::var(TEST_MODE_ENV)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false);
        ActionContext {
            test_mode,
            path_var: env::var_os("PATH"),
        }
    }
}

/// The action only applies to iOS builds.
pub fn is_supported(platform: &str) -> bool {
    platform == "ios"
}

/// Creates the directory holding `output` (and its ancestors) when missing.
pub fn create_output_dir_if_not_exists(output: &str) -> Result<()> {
    let Some(dir) = Path::new(output).parent() else {
        return Ok(());
    };
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    log::debug!("Creating output directory {}", dir.display());
    fs::create_dir_all(dir)
        .map_err(|e| GcovrError::io(format!("create output directory {}", dir.display()), e))
}

/// Assembles the shell command for the given argument tokens.
pub fn build_command(args: &[String]) -> String {
    format!("{GCOVR_BIN} {}", args.join(" "))
}

/// Runs gcovr for `params` and returns the command that was executed.
///
/// # Errors
/// [`GcovrError::ToolNotFound`] before anything happens when gcovr is not on
/// the path, [`GcovrError::ExecutionFailure`] when gcovr exits non-zero.
pub fn run(ctx: &ActionContext, params: &GcovrParams) -> Result<String> {
    tool::ensure_installed(ctx)?;

    if let Some(output) = params.output_path() {
        create_output_dir_if_not_exists(output)?;
    }

    let command = build_command(&params.to_args());
    log::info!("{}", "Generating code coverage.".green());
    log::debug!("{command}");

    if ctx.test_mode {
        return Ok(command);
    }
    sh(&command)?;
    Ok(command)
}

fn sh(command: &str) -> Result<()> {
    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .status()
        .map_err(|e| GcovrError::io(format!("spawn `{command}`"), e))?;
    if status.success() {
        Ok(())
    } else {
        Err(GcovrError::ExecutionFailure {
            command: command.to_string(),
            code: status.code(),
        })
    }
}
