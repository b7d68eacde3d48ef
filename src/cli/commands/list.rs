//! List command implementation.
//!
//! The `runway list` command shows every registered project with its
//! detected editor version and last modification time.

use crate::catalog::{filter_views, load_views, sort_views, ProjectView, SortDirection};
use crate::cli::args::ListArgs;
use crate::error::{Result, RunwayError};
use crate::ui::{RunwayTheme, Table, UserInterface};

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    context: CommandContext,
    args: ListArgs,
}

impl ListCommand {
    pub fn new(context: &CommandContext, args: ListArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }

    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn render_table(&self, views: &[ProjectView], verbose: bool) -> String {
        let theme = RunwayTheme::plain();
        let mut headers = vec!["Name", "Editor", "Modified", "Tags"];
        if verbose {
            headers.push("Path");
        }

        let mut table = Table::new(headers);
        for view in views {
            let editor = if view.launchable {
                view.editor_version.clone()
            } else {
                format!("{} (not installed)", view.editor_version)
            };
            let mut row = vec![
                view.name.clone(),
                editor,
                view.modified_text.clone(),
                theme.format_tags(&view.tags),
            ];
            if verbose {
                row.push(view.path.display().to_string());
            }
            table.add_row(row);
        }
        table.render()
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.context.open_store()?;
        let editors = self.context.editors(&store);

        let mut views = load_views(store.projects(), &editors);
        if let Some(term) = &self.args.search {
            views = filter_views(views, term);
        }

        let key = self.args.sort.unwrap_or(self.context.config().default_sort);
        let direction = if self.args.asc {
            SortDirection::Ascending
        } else if self.args.desc {
            SortDirection::Descending
        } else {
            key.default_direction()
        };
        sort_views(&mut views, key, direction);
        tracing::debug!("Listing {} projects sorted by {:?}", views.len(), key);

        if self.args.json {
            let json = serde_json::to_string_pretty(&views)
                .map_err(|e| RunwayError::Other(e.into()))?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        if views.is_empty() {
            match &self.args.search {
                Some(term) if !store.projects().is_empty() => {
                    ui.message(&format!("No projects match '{}'.", term));
                }
                _ => {
                    ui.message("No projects registered.");
                    ui.show_hint("Add one with `runway add <PATH>`");
                }
            }
            return Ok(CommandResult::success());
        }

        let table = self.render_table(&views, ui.output_mode().shows_detail());
        ui.show_header("Projects");
        ui.data(&table);

        if editors.is_empty() {
            ui.show_hint("No editors found. Register an editor folder with `runway editors add`");
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SortKey;
    use crate::config::RunwayConfig;
    use crate::store::{EditorFolderRecord, ProjectRecord, Store};
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn make_project(root: &Path, name: &str, version: Option<&str>) -> PathBuf {
        let path = root.join(name);
        fs::create_dir_all(path.join("ProjectSettings")).unwrap();
        if let Some(version) = version {
            fs::write(
                path.join("ProjectSettings/ProjectVersion.txt"),
                format!("m_EditorVersion: {}\n", version),
            )
            .unwrap();
        }
        path
    }

    fn setup(temp: &TempDir) -> CommandContext {
        let store_path = temp.path().join("store.json");
        let editors = temp.path().join("editors");
        fs::create_dir_all(editors.join("2021.3.5f1/Editor")).unwrap();
        fs::write(editors.join("2021.3.5f1/Editor/Unity.exe"), "").unwrap();

        let mut store = Store::open(&store_path).unwrap();
        let mut racer = ProjectRecord::from_path(&make_project(temp.path(), "Racer", Some("2021.3.5f1")));
        racer.tags = vec!["jam".to_string()];
        store.add_project(racer);
        store.add_project(ProjectRecord::from_path(&make_project(temp.path(), "Puzzle", Some("2019.4.0f1"))));
        store.add_editor_folder(EditorFolderRecord::new(&editors));
        store.save().unwrap();

        CommandContext::new(store_path, RunwayConfig::default())
    }

    #[test]
    fn list_empty_store() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path().join("store.json"), RunwayConfig::default());
        let cmd = ListCommand::new(&ctx, ListArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("No projects registered."));
        assert!(ui.has_hint("runway add"));
    }

    #[test]
    fn list_renders_table() {
        let temp = TempDir::new().unwrap();
        let ctx = setup(&temp);
        let cmd = ListCommand::new(&ctx, ListArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let output = ui.data_text();
        assert!(output.contains("Racer"));
        assert!(output.contains("#jam"));
        assert!(output.contains("2019.4.0f1 (not installed)"));
        assert!(!output.contains("Path"));
    }

    #[test]
    fn verbose_list_shows_paths() {
        let temp = TempDir::new().unwrap();
        let ctx = setup(&temp);
        let cmd = ListCommand::new(&ctx, ListArgs::default());
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute(&mut ui).unwrap();

        assert!(ui.data_text().contains("Path"));
    }

    #[test]
    fn search_filters_by_tag() {
        let temp = TempDir::new().unwrap();
        let ctx = setup(&temp);
        let args = ListArgs {
            search: Some("JAM".to_string()),
            json: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        ListCommand::new(&ctx, args).execute(&mut ui).unwrap();

        let views: serde_json::Value = serde_json::from_str(&ui.data_text()).unwrap();
        let names: Vec<_> = views
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Racer".to_string()]);
    }

    #[test]
    fn search_without_match_says_so() {
        let temp = TempDir::new().unwrap();
        let ctx = setup(&temp);
        let args = ListArgs {
            search: Some("zzz".to_string()),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        ListCommand::new(&ctx, args).execute(&mut ui).unwrap();

        assert!(ui.has_message("No projects match 'zzz'"));
    }

    #[test]
    fn json_has_derived_fields() {
        let temp = TempDir::new().unwrap();
        let ctx = setup(&temp);
        let args = ListArgs {
            sort: Some(SortKey::Name),
            asc: true,
            json: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        ListCommand::new(&ctx, args).execute(&mut ui).unwrap();

        let views: serde_json::Value = serde_json::from_str(&ui.data_text()).unwrap();
        let first = &views[0];
        assert_eq!(first["name"], "Puzzle");
        assert_eq!(first["editorVersion"], "2019.4.0f1");
        assert_eq!(first["launchable"], false);
        assert!(first.get("modifiedText").is_some());
        assert_eq!(views[1]["name"], "Racer");
        assert_eq!(views[1]["launchable"], true);
    }

    fn listed_names(ui: &MockUI) -> Vec<String> {
        let views: serde_json::Value = serde_json::from_str(&ui.data_text()).unwrap();
        views
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn name_sort_defaults_to_a_to_z() {
        let temp = TempDir::new().unwrap();
        let ctx = setup(&temp);
        let args = ListArgs {
            sort: Some(SortKey::Name),
            json: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        ListCommand::new(&ctx, args).execute(&mut ui).unwrap();

        assert_eq!(listed_names(&ui), vec!["Puzzle", "Racer"]);
    }

    #[test]
    fn desc_flag_reverses_name_sort() {
        let temp = TempDir::new().unwrap();
        let ctx = setup(&temp);
        let args = ListArgs {
            sort: Some(SortKey::Name),
            desc: true,
            json: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        ListCommand::new(&ctx, args).execute(&mut ui).unwrap();

        assert_eq!(listed_names(&ui), vec!["Racer", "Puzzle"]);
    }

    #[test]
    fn malformed_store_is_an_error() {
        let temp = TempDir::new().unwrap();
        let store_path = temp.path().join("store.json");
        fs::write(&store_path, "{not json").unwrap();
        let ctx = CommandContext::new(store_path, RunwayConfig::default());
        let mut ui = MockUI::new();

        let err = ListCommand::new(&ctx, ListArgs::default())
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, RunwayError::StoreParseError { .. }));
    }
}
