//! Open command implementation.
//!
//! The `runway open` command launches a registered project in the editor
//! matching its version, or in an explicitly chosen one.

use crate::catalog::{resolve_editor, ProjectView};
use crate::cli::args::OpenArgs;
use crate::error::{Result, RunwayError};
use crate::launch::{launch, LaunchMode};
use crate::probe::EditorInstall;
use crate::project::{absolute, find_project};
use crate::ui::{Prompt, PromptOption, UserInterface};

use super::context::CommandContext;
use super::dispatcher::{report_failure, Command, CommandResult, EXIT_FAILURE};

/// The open command implementation.
pub struct OpenCommand {
    context: CommandContext,
    args: OpenArgs,
}

impl OpenCommand {
    pub fn new(context: &CommandContext, args: OpenArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }

    /// Let the user pick an installed editor when the project's own version
    /// is not installed. Only offered interactively and without `--editor`.
    fn choose_editor<'a>(
        &self,
        ui: &mut dyn UserInterface,
        view: &ProjectView,
        editors: &'a [EditorInstall],
    ) -> Result<Option<&'a EditorInstall>> {
        if self.args.editor.is_some() || !ui.is_interactive() || editors.is_empty() {
            return Ok(None);
        }

        ui.warning(&format!(
            "Editor {} is not installed for {}",
            view.editor_version, view.name
        ));
        let options = editors
            .iter()
            .map(|e| PromptOption::new(format!("{} ({})", e.version, e.folder.display()), &e.version))
            .collect();
        let answer = ui.prompt(&Prompt::select("editor", "Open with", options))?;
        if answer.is_empty() {
            return Ok(None);
        }

        let chosen = answer.as_string();
        Ok(editors.iter().find(|e| e.version == chosen))
    }

    fn mode(&self) -> LaunchMode {
        if self.args.wait {
            LaunchMode::Wait
        } else {
            LaunchMode::Detached
        }
    }
}

impl Command for OpenCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.context.open_store()?;
        let Some(record) = find_project(&store, &self.args.path).and_then(|p| store.project(&p))
        else {
            let path = absolute(&self.args.path);
            return Ok(report_failure(ui, RunwayError::ProjectNotFound { path }));
        };

        if !record.path.is_dir() {
            let path = record.path.clone();
            return Ok(report_failure(ui, RunwayError::FolderNotFound { path }));
        }

        let editors = self.context.editors(&store);
        let view = ProjectView::load(record, &editors);
        let resolved = match resolve_editor(&view, &editors, self.args.editor.as_deref()) {
            Some(editor) => Some(editor),
            None => self.choose_editor(ui, &view, &editors)?,
        };
        let Some(editor) = resolved else {
            let version = self
                .args
                .editor
                .clone()
                .unwrap_or_else(|| view.editor_version.clone());
            let result = report_failure(ui, RunwayError::NoMatchingEditor { version });
            ui.show_hint("Install that version or register its folder with `runway editors add`");
            return Ok(result);
        };

        tracing::debug!(
            "Opening {} with {} ({})",
            view.path.display(),
            editor.version,
            editor.executable.display()
        );

        match launch(&editor.executable, &view.path, self.mode()) {
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
