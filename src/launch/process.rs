//! Editor process launching.

use serde::Serialize;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Result, RunwayError};

/// Flag the editor expects before the project folder.
pub const PROJECT_PATH_FLAG: &str = "-projectPath";

/// Whether to wait for the editor to exit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LaunchMode {
    /// Return as soon as the process is spawned.
    #[default]
    Detached,
    /// Wait for exit and log the editor's output.
    Wait,
}

/// Result of a launch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchOutcome {
    pub success: bool,
    pub message: String,
}

/// Build `"<editor>" -projectPath "<project>"`.
///
/// Arguments are passed directly to the process, so paths with spaces or
/// quotes need no escaping.
pub fn build_command(editor: &Path, project: &Path) -> Command {
    let mut cmd = Command::new(editor);
    cmd.arg(PROJECT_PATH_FLAG).arg(project);
    cmd
}

/// Launch `editor` against `project`.
///
/// # Errors
///
/// Returns `InvalidPath` if either path is empty and `LaunchFailed` if the
/// process cannot be spawned. Once spawned, the editor's own failures are
/// only logged and reflected in [`LaunchOutcome::success`].
pub fn launch(editor: &Path, project: &Path, mode: LaunchMode) -> Result<LaunchOutcome> {
    if editor.as_os_str().is_empty() || project.as_os_str().is_empty() {
        return Err(RunwayError::InvalidPath {
            message: "both the editor path and the project path must be provided".to_string(),
        });
    }

    let mut cmd = build_command(editor, project);
    cmd.stdin(Stdio::null());

    match mode {
        LaunchMode::Detached => {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
            let child = cmd.spawn().map_err(|e| spawn_error(editor, e))?;
            tracing::info!(
                "Launched {} for {} (pid {})",
                editor.display(),
                project.display(),
                child.id()
            );
            Ok(LaunchOutcome {
                success: true,
                message: format!("Unity project at {} is launching...", project.display()),
            })
        }
        LaunchMode::Wait => {
            cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
            let child = cmd.spawn().map_err(|e| spawn_error(editor, e))?;
            let output = child
                .wait_with_output()
                .map_err(|e| spawn_error(editor, e))?;

            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stdout.trim().is_empty() {
                tracing::info!("Unity stdout: {}", stdout.trim_end());
            }
            if !stderr.trim().is_empty() {
                tracing::warn!("Unity stderr: {}", stderr.trim_end());
            }

            if output.status.success() {
                Ok(LaunchOutcome {
                    success: true,
                    message: format!("Unity project at {} closed", project.display()),
                })
            } else {
                tracing::error!("Error launching Unity project: {}", output.status);
                Ok(LaunchOutcome {
                    success: false,
                    message: format!("Editor exited with {}", output.status),
                })
            }
        }
    }
}

fn spawn_error(editor: &Path, e: std::io::Error) -> RunwayError {
    tracing::error!("Error launching {}: {}", editor.display(), e);
    RunwayError::LaunchFailed {
        editor: editor.display().to_string(),
        message: e.to_string(),
    }
}
