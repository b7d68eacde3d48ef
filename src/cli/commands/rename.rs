//! Rename command implementation.
//!
//! The `runway rename` command renames a project folder, the files inside it
//! that carry the folder's name, and the stored record.

use crate::cli::args::RenameArgs;
use crate::error::{Result, RunwayError};
use crate::project::{absolute, find_project, rename_project};
use crate::store::folder_name;
use crate::ui::{Prompt, UserInterface};

use super::context::CommandContext;
use super::dispatcher::{report_failure, Command, CommandResult, EXIT_FAILURE};

/// The rename command implementation.
pub struct RenameCommand {
    context: CommandContext,
    args: RenameArgs,
}

impl RenameCommand {
    pub fn new(context: &CommandContext, args: RenameArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for RenameCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = self.context.open_store()?;
        let Some(path) = find_project(&store, &self.args.path) else {
            let path = absolute(&self.args.path);
            return Ok(report_failure(ui, RunwayError::ProjectNotFound { path }));
        };

        let current = folder_name(&path);
        let new_name = match &self.args.new_name {
            Some(name) => name.clone(),
            None => ui
                .prompt(&Prompt::input("name", "New folder name", Some(&current)))?
                .as_string(),
        };

        if new_name.trim() == current {
            ui.message(&format!("Name unchanged, {} was not renamed.", current));
            return Ok(CommandResult::success());
        }

        let outcome = rename_project(&mut store, &path, &new_name);
        if !outcome.success {
            ui.error(&outcome.message);
            return Ok(CommandResult::failure(EXIT_FAILURE));
        }

        ui.success(&outcome.message);
        if let Some(new_path) = &outcome.new_path {
            ui.message(&format!("  {} -> {}", path.display(), new_path.display()));
        }
        Ok(CommandResult::success())
    }
}
