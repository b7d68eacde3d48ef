//! Show command implementation.
//!
//! The `runway show` command reveals a folder in the platform file manager.

use crate::cli::args::ShowArgs;
use crate::error::{Result, RunwayError};
use crate::launch::show_in_explorer;
use crate::project::resolve_path;
use crate::ui::UserInterface;

use super::dispatcher::{report_failure, Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    args: ShowArgs,
}

impl ShowCommand {
    pub fn new(args: ShowArgs) -> Self {
        Self { args }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.path.as_os_str().is_empty() {
            return Ok(report_failure(
                ui,
                RunwayError::InvalidPath {
                    message: "path is empty".to_string(),
                },
            ));
        }

        let path = resolve_path(&self.args.path);
        if !path.is_dir() {
            return Ok(report_failure(ui, RunwayError::FolderNotFound { path }));
        }

        match show_in_explorer(&path) {
            Ok(()) => {
                ui.message(&format!("Opened {}", path.display()));
                Ok(CommandResult::success())
            }
            Err(e) => Ok(report_failure(ui, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn empty_path_is_invalid() {
        let mut ui = MockUI::new();
        let result = ShowCommand::new(ShowArgs {
            path: PathBuf::new(),
        })
        .execute(&mut ui)
        .unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Invalid folder path"));
    }

    #[test]
    fn missing_folder_fails() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let result = ShowCommand::new(ShowArgs {
            path: temp.path().join("missing"),
        })
        .execute(&mut ui)
        .unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Folder not found"));
    }
}
