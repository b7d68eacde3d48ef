//! Add command implementation.
//!
//! The `runway add` command registers a project folder.

use std::path::PathBuf;

use crate::cli::args::AddArgs;
use crate::error::{Result, RunwayError};
use crate::probe::{editor_version, VERSION_FILE};
use crate::project::{normalize_tags, resolve_path};
use crate::store::ProjectRecord;
use crate::ui::{Prompt, UserInterface};

use super::context::CommandContext;
use super::dispatcher::{report_failure, Command, CommandResult};

/// The add command implementation.
pub struct AddCommand {
    context: CommandContext,
    args: AddArgs,
}

impl AddCommand {
    pub fn new(context: &CommandContext, args: AddArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }

    /// The folder from the arguments, or asked for.
    fn folder(&self, ui: &mut dyn UserInterface) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.args.path {
            return Ok(Some(path.clone()));
        }
        let answer = ui.prompt(&Prompt::input("folder", "Project folder", None))?;
        let answer = answer.as_string();
        Ok((!answer.trim().is_empty()).then(|| PathBuf::from(answer.trim())))
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(input) = self.folder(ui)? else {
            ui.warning("No folder selected; nothing added.");
            return Ok(CommandResult::success());
        };

        let path = resolve_path(&input);
        if !path.is_dir() {
            return Ok(report_failure(ui, RunwayError::FolderNotFound { path }));
        }

        let mut store = self.context.open_store()?;
        let mut record = ProjectRecord::from_path(&path);
        record.tags = normalize_tags(&self.args.tags);
        let name = record.name.clone();

        if !store.add_project(record) {
            ui.warning(&format!("{} is already registered.", path.display()));
            return Ok(CommandResult::success());
        }
        store.save()?;
        tracing::info!("Registered project {}", path.display());

        ui.success(&format!("Added {} ({})", name, path.display()));
        match editor_version(&path) {
            Some(version) => ui.message(&format!("  Editor version: {}", version)),
            None => ui.warning(&format!(
                "No editor version found in {}; the project cannot be opened until it has one.",
                VERSION_FILE
            )),
        }

        Ok(CommandResult::success())
    }
}
