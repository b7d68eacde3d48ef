//! Opening folders in the platform file manager.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Result, RunwayError};

/// Program used to reveal a folder on this platform.
pub fn file_manager() -> &'static str {
    if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Open `path` in the file manager without waiting for it.
///
/// # Errors
///
/// Returns `InvalidPath` for empty or relative paths and `LaunchFailed`
/// when the file manager cannot be started.
pub fn show_in_explorer(path: &Path) -> Result<()> {
    check_folder_path(path)?;

    let program = file_manager();
    Command::new(program)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            tracing::error!("Error opening folder {}: {}", path.display(), e);
            RunwayError::LaunchFailed {
                editor: program.to_string(),
                message: e.to_string(),
            }
        })?;

    tracing::debug!("Opened {} with {}", path.display(), program);
    Ok(())
}

fn check_folder_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(RunwayError::InvalidPath {
            message: "path is empty".to_string(),
        });
    }
    if !path.is_absolute() {
        return Err(RunwayError::InvalidPath {
            message: format!("{} is not absolute", path.display()),
        });
    }
    Ok(())
}
