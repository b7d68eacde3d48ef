//! State shared by every command.

use std::path::{Path, PathBuf};

use crate::config::RunwayConfig;
use crate::error::Result;
use crate::probe::{list_editors, EditorInstall};
use crate::store::Store;

/// Resolved store location and configuration for one invocation.
#[derive(Debug, Clone)]
pub struct CommandContext {
    store_path: PathBuf,
    config: RunwayConfig,
}

impl CommandContext {
    pub fn new(store_path: PathBuf, config: RunwayConfig) -> Self {
        Self { store_path, config }
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn config(&self) -> &RunwayConfig {
        &self.config
    }

    /// Load the store document.
    pub fn open_store(&self) -> Result<Store> {
        Store::open(&self.store_path)
    }

    /// Editors installed under every folder registered in `store`.
    pub fn editors(&self, store: &Store) -> Vec<EditorInstall> {
        list_editors(store.editor_folders(), None, &self.config.editor_executable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EditorFolderRecord;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn open_store_on_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path().join("store.json"), RunwayConfig::default());
        let store = ctx.open_store().unwrap();
        assert!(store.projects().is_empty());
        assert_eq!(ctx.store_path(), temp.path().join("store.json"));
    }

    #[test]
    fn editors_use_configured_executable() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("editors");
        fs::create_dir_all(base.join("6000.0.1f1/Editor")).unwrap();
        fs::write(base.join("6000.0.1f1/Editor/Unity"), "").unwrap();

        let config = RunwayConfig {
            editor_executable: PathBuf::from("Editor/Unity"),
            ..Default::default()
        };
        let ctx = CommandContext::new(temp.path().join("store.json"), config);
        let mut store = ctx.open_store().unwrap();
        store.add_editor_folder(EditorFolderRecord::new(&base));

        let editors = ctx.editors(&store);
        assert_eq!(editors.len(), 1);
        assert_eq!(editors[0].version, "6000.0.1f1");
    }
}
