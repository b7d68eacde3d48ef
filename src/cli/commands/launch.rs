//! Launch command implementation.
//!
//! The `runway launch` command starts an explicit editor executable against
//! a project folder, without consulting the store.

use crate::cli::args::LaunchArgs;
use crate::error::Result;
use crate::launch::{launch, LaunchMode};
use crate::ui::UserInterface;

use super::dispatcher::{report_failure, Command, CommandResult, EXIT_FAILURE};

/// The launch command implementation.
pub struct LaunchCommand {
    args: LaunchArgs,
}

impl LaunchCommand {
    pub fn new(args: LaunchArgs) -> Self {
        Self { args }
    }
}

impl Command for LaunchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mode = if self.args.wait {
            LaunchMode::Wait
        } else {
            LaunchMode::Detached
        };

        match launch(&self.args.editor, &self.args.project, mode) {
            Ok(outcome) if outcome.success => {
                ui.success(&outcome.message);
                Ok(CommandResult::success())
            }
            Ok(outcome) => {
                ui.error(&outcome.message);
                Ok(CommandResult::failure(EXIT_FAILURE))
            }
            Err(e) => Ok(report_failure(ui, e)),
        }
    }
}
