//! Editor folder commands.
//!
//! - `runway editors list` - registered editor folders
//! - `runway editors add` - register a folder
//! - `runway editors remove` - forget a folder
//! - `runway editors versions` - installed editor versions

use serde::Serialize;
use std::path::PathBuf;

use crate::cli::args::{EditorsAddArgs, EditorsListArgs, EditorsRemoveArgs, EditorsVersionsArgs};
use crate::error::{Result, RunwayError};
use crate::probe::{discover_editors, list_editors};
use crate::project::{absolute, find_editor_folder, resolve_path};
use crate::store::EditorFolderRecord;
use crate::ui::{Prompt, Table, UserInterface};

use super::context::CommandContext;
use super::dispatcher::{report_failure, Command, CommandResult};

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| RunwayError::Other(e.into()))
}

/// The `editors list` command implementation.
pub struct EditorsListCommand {
    context: CommandContext,
    args: EditorsListArgs,
}

impl EditorsListCommand {
    pub fn new(context: &CommandContext, args: EditorsListArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for EditorsListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.context.open_store()?;
        let folders = store.editor_folders();

        if self.args.json {
            ui.data(&to_json(folders)?);
            return Ok(CommandResult::success());
        }

        if folders.is_empty() {
            ui.message("No editor folders registered.");
            ui.show_hint("Add one with `runway editors add <PATH>`");
            return Ok(CommandResult::success());
        }

        let executable = &self.context.config().editor_executable;
        let mut table = Table::new(vec!["Folder", "Versions"]);
        for folder in folders {
            let versions = if folder.path.is_dir() {
                discover_editors(&folder.path, executable).len().to_string()
            } else {
                "missing".to_string()
            };
            table.add_row(vec![folder.path.display().to_string(), versions]);
        }

        ui.show_header("Editor folders");
        ui.data(&table.render());
        Ok(CommandResult::success())
    }
}

/// The `editors add` command implementation.
pub struct EditorsAddCommand {
    context: CommandContext,
    args: EditorsAddArgs,
}

impl EditorsAddCommand {
    pub fn new(context: &CommandContext, args: EditorsAddArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }

    fn folder(&self, ui: &mut dyn UserInterface) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.args.path {
            return Ok(Some(path.clone()));
        }
        let answer = ui
            .prompt(&Prompt::input("folder", "Editor folder", None))?
            .as_string();
        Ok((!answer.trim().is_empty()).then(|| PathBuf::from(answer.trim())))
    }
}

impl Command for EditorsAddCommand {
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
        if !store.add_editor_folder(EditorFolderRecord::new(&path)) {
            ui.warning(&format!("{} is already registered.", path.display()));
            return Ok(CommandResult::success());
        }
        store.save()?;
        tracing::info!("Registered editor folder {}", path.display());

        ui.success(&format!("Added editor folder {}", path.display()));
        let found = discover_editors(&path, &self.context.config().editor_executable);
        if found.is_empty() {
            ui.warning(&format!(
                "No editors found (looking for <version>/{})",
                self.context.config().editor_executable.display()
            ));
        } else {
            let versions: Vec<_> = found.iter().map(|e| e.version.as_str()).collect();
            ui.message(&format!("  Found: {}", versions.join(", ")));
        }

        Ok(CommandResult::success())
    }
}

/// The `editors remove` command implementation.
pub struct EditorsRemoveCommand {
    context: CommandContext,
    args: EditorsRemoveArgs,
}

impl EditorsRemoveCommand {
    pub fn new(context: &CommandContext, args: EditorsRemoveArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for EditorsRemoveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = self.context.open_store()?;
        let Some(path) = find_editor_folder(&store, &self.args.path) else {
            let path = absolute(&self.args.path);
            return Ok(report_failure(ui, RunwayError::EditorFolderNotFound { path }));
        };

        if store.remove_editor_folder(&path) {
            store.save()?;
            tracing::info!("Removed editor folder {}", path.display());
        }

        ui.success(&format!("Removed editor folder {}", path.display()));
        Ok(CommandResult::success())
    }
}

/// The `editors versions` command implementation.
pub struct EditorsVersionsCommand {
    context: CommandContext,
    args: EditorsVersionsArgs,
}

impl EditorsVersionsCommand {
    pub fn new(context: &CommandContext, args: EditorsVersionsArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for EditorsVersionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.context.open_store()?;

        let scope = match &self.args.folder {
            Some(folder) => {
                let path = resolve_path(folder);
                if !path.is_dir() {
                    return Ok(report_failure(ui, RunwayError::FolderNotFound { path }));
                }
                Some(path)
            }
            None => None,
        };

        let editors = list_editors(
            store.editor_folders(),
            scope.as_deref(),
            &self.context.config().editor_executable,
        );

        if self.args.json {
            ui.data(&to_json(&editors)?);
            return Ok(CommandResult::success());
        }

        if editors.is_empty() {
            ui.message("No editors found.");
            if store.editor_folders().is_empty() && scope.is_none() {
                ui.show_hint("Register an editor folder with `runway editors add <PATH>`");
            }
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(vec!["Version", "Executable"]);
        for editor in &editors {
            table.add_row(vec![
                editor.version.clone(),
                editor.executable.display().to_string(),
            ]);
        }

        ui.show_header("Installed editors");
        ui.data(&table.render());
        Ok(CommandResult::success())
    }
}
