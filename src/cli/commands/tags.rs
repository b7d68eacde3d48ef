//! Tags command implementation.
//!
//! The `runway tags` command edits a project's tags. Without edit flags it
//! prompts for the full comma-separated list.

use crate::cli::args::TagsArgs;
use crate::error::{Result, RunwayError};
use crate::project::{absolute, apply_edits, find_project, normalize_tags, parse_tag_list, TagEdit};
use crate::store::ProjectUpdate;
use crate::ui::{Prompt, RunwayTheme, UserInterface};

use super::context::CommandContext;
use super::dispatcher::{report_failure, Command, CommandResult};

/// The tags command implementation.
pub struct TagsCommand {
    context: CommandContext,
    args: TagsArgs,
}

impl TagsCommand {
    pub fn new(context: &CommandContext, args: TagsArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }

    /// Edits requested by flags: replace or clear first, then add, then remove.
    fn flag_edits(&self) -> Vec<TagEdit> {
        let mut edits = Vec::new();
        if let Some(set) = &self.args.set {
            edits.push(TagEdit::Set(parse_tag_list(set)));
        }
        if self.args.clear {
            edits.push(TagEdit::Clear);
        }
        if !self.args.add.is_empty() {
            edits.push(TagEdit::Add(normalize_tags(&self.args.add)));
        }
        if !self.args.remove.is_empty() {
            edits.push(TagEdit::Remove(normalize_tags(&self.args.remove)));
        }
        edits
    }
}

impl Command for TagsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = self.context.open_store()?;
        let Some(path) = find_project(&store, &self.args.path) else {
            let path = absolute(&self.args.path);
            return Ok(report_failure(ui, RunwayError::ProjectNotFound { path }));
        };
        let (name, current) = match store.project(&path) {
            Some(record) => (record.name.clone(), record.tags.clone()),
            None => return Ok(report_failure(ui, RunwayError::ProjectNotFound { path })),
        };

        let edits = if self.args.has_edits() {
            self.flag_edits()
        } else {
            let answer = ui.prompt(&Prompt::input(
                "tags",
                "Tags (comma-separated)",
                Some(&current.join(", ")),
            ))?;
            vec![TagEdit::Set(parse_tag_list(&answer.as_string()))]
        };

        let tags = apply_edits(&current, &edits);
        let theme = RunwayTheme::plain();
        let shown = if tags.is_empty() {
            "(none)".to_string()
        } else {
            theme.format_tags(&tags)
        };

        if !store.update_project(&path, &ProjectUpdate::tags(tags)) {
            ui.message(&format!("Tags for {} unchanged: {}", name, shown));
            return Ok(CommandResult::success());
        }
        store.save()?;
        tracing::info!("Updated tags for {}", path.display());

        ui.success(&format!("Tags for {}: {}", name, shown));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunwayConfig;
    use crate::store::{ProjectRecord, Store};
    use crate::ui::MockUI;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn setup(temp: &TempDir, tags: &[&str]) -> (CommandContext, PathBuf) {
        let project = temp.path().join("Racer");
        let store_path = temp.path().join("store.json");
        let mut store = Store::open(&store_path).unwrap();
        let mut record = ProjectRecord::from_path(&project);
        record.tags = tags.iter().map(|t| t.to_string()).collect();
        store.add_project(record);
        store.save().unwrap();
        (CommandContext::new(store_path, RunwayConfig::default()), project)
    }

    fn args(path: PathBuf) -> TagsArgs {
        TagsArgs {
            path,
            add: Vec::new(),
            remove: Vec::new(),
            set: None,
            clear: false,
        }
    }

    fn stored_tags(ctx: &CommandContext) -> Vec<String> {
        Store::open(ctx.store_path()).unwrap().projects()[0].tags.clone()
    }

    #[test]
    fn add_and_remove_flags() {
        let temp = TempDir::new().unwrap();
        let (ctx, project) = setup(&temp, &["jam", "old"]);
        let mut ui = MockUI::new();

        let mut args = args(project);
        args.add = vec!["2d".to_string(), "jam".to_string()];
        args.remove = vec!["old".to_string()];
        let result = TagsCommand::new(&ctx, args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(stored_tags(&ctx), vec!["jam".to_string(), "2d".to_string()]);
        assert!(ui.has_success("#jam #2d"));
    }

    #[test]
    fn set_replaces_and_clear_empties() {
        let temp = TempDir::new().unwrap();
        let (ctx, project) = setup(&temp, &["jam"]);
        let mut ui = MockUI::new();

        let mut set = args(project.clone());
        set.set = Some("vr, mobile,".to_string());
        TagsCommand::new(&ctx, set).execute(&mut ui).unwrap();
        assert_eq!(stored_tags(&ctx), vec!["vr".to_string(), "mobile".to_string()]);

        let mut clear = args(project);
        clear.clear = true;
        TagsCommand::new(&ctx, clear).execute(&mut ui).unwrap();
        assert!(stored_tags(&ctx).is_empty());
        assert!(ui.has_success("(none)"));
    }

    #[test]
    fn equal_tags_do_not_rewrite_store() {
        let temp = TempDir::new().unwrap();
        let (ctx, project) = setup(&temp, &["jam"]);
        let before = fs::read_to_string(ctx.store_path()).unwrap();
        fs::write(ctx.store_path(), format!("{}\n", before)).unwrap();
        let mut ui = MockUI::new();

        let mut args = args(project);
        args.add = vec![" jam ".to_string()];
        let result = TagsCommand::new(&ctx, args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("unchanged"));
        // The trailing newline written above survives because nothing was saved.
        assert_eq!(
            fs::read_to_string(ctx.store_path()).unwrap(),
            format!("{}\n", before)
        );
    }

    #[test]
    fn prompts_without_flags() {
        let temp = TempDir::new().unwrap();
        let (ctx, project) = setup(&temp, &["jam"]);
        let mut ui = MockUI::new();
        ui.set_prompt_response("tags", "jam, 3d");

        TagsCommand::new(&ctx, args(project)).execute(&mut ui).unwrap();

        assert_eq!(ui.prompts_shown(), &["tags".to_string()]);
        assert_eq!(stored_tags(&ctx), vec!["jam".to_string(), "3d".to_string()]);
    }

    #[test]
    fn unknown_project_fails() {
        let temp = TempDir::new().unwrap();
        let (ctx, _) = setup(&temp, &[]);
        let mut ui = MockUI::new();

        let result = TagsCommand::new(&ctx, args(temp.path().join("Other")))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 2);
    }
}
