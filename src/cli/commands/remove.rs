//! Remove command implementation.
//!
//! The `runway remove` command forgets a project. The folder on disk is
//! left untouched.

use crate::cli::args::RemoveArgs;
use crate::error::{Result, RunwayError};
use crate::project::{absolute, find_project};
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{report_failure, Command, CommandResult};

/// The remove command implementation.
pub struct RemoveCommand {
    context: CommandContext,
    args: RemoveArgs,
}

impl RemoveCommand {
    pub fn new(context: &CommandContext, args: RemoveArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for RemoveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = self.context.open_store()?;
        let Some(path) = find_project(&store, &self.args.path) else {
            let path = absolute(&self.args.path);
            return Ok(report_failure(ui, RunwayError::ProjectNotFound { path }));
        };

        let name = store
            .project(&path)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        if store.remove_project(&path) {
            store.save()?;
            tracing::info!("Removed project {}", path.display());
        }

        ui.success(&format!("Removed {} ({})", name, path.display()));
        Ok(CommandResult::success())
    }
}
