//! Locating the gcovr executable before any work is attempted.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::action::ActionContext;
use crate::error::{GcovrError, Result};

/// Name gcovr is invoked by.
pub const GCOVR_BIN: &str = "gcovr";

/// Searches the directories of a PATH-style variable for `program`.
pub fn find_on_path(program: &str, path_var: &OsStr) -> Option<PathBuf> {
    env::split_paths(path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|md| md.is_file() && md.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Fails with [`GcovrError::ToolNotFound`] unless gcovr resolves on the path.
/// Skipped in test mode.
pub fn ensure_installed(ctx: &ActionContext) -> Result<()> {
    if ctx.test_mode {
        return Ok(());
    }
    let found = ctx
        .path_var
        .as_deref()
        .and_then(|path| find_on_path(GCOVR_BIN, path));
    match found {
        Some(path) => {
            log::debug!("Using {}", path.display());
            Ok(())
        }
        None => Err(GcovrError::ToolNotFound),
    }
}
