//! The persisted store document.
//!
//! A single JSON file holds two ordered collections:
//!
//! ```json
//! { "Projects": [ ... ], "EditorFolders": [ ... ] }
//! ```
//!
//! Mutating methods only touch the in-memory document and report whether
//! anything changed; callers decide when to [`Store::save`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::records::{EditorFolderRecord, ProjectRecord, ProjectUpdate};
use crate::error::{Result, RunwayError};

/// On-disk layout of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(rename = "Projects", default)]
    pub projects: Vec<ProjectRecord>,

    #[serde(rename = "EditorFolders", default)]
    pub editor_folders: Vec<EditorFolderRecord>,
}

/// Store document bound to its file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    document: StoreDocument,
}

impl Store {
    /// Load the store at `path`. A missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Store {} does not exist yet", path.display());
            return Ok(Self {
                path: path.to_path_buf(),
                document: StoreDocument::default(),
            });
        }

        let content = fs::read_to_string(path)?;
        let document = if content.trim().is_empty() {
            StoreDocument::default()
        } else {
            serde_json::from_str(&content).map_err(|e| RunwayError::StoreParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    /// Save the whole document using atomic write.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.document).map_err(|e| {
            RunwayError::StoreWriteError {
                path: self.path.clone(),
                message: e.to_string(),
            }
        })?;

        // Write to temp file, then rename over the target
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(
            "Saved store with {} projects and {} editor folders",
            self.document.projects.len(),
            self.document.editor_folders.len()
        );
        Ok(())
    }

    /// Get the store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the underlying document.
    pub fn document(&self) -> &StoreDocument {
        &self.document
    }

    // --- Projects ---

    /// All registered projects in insertion order.
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.document.projects
    }

    /// Find a project by path.
    pub fn project(&self, path: &Path) -> Option<&ProjectRecord> {
        self.document.projects.iter().find(|p| p.path == path)
    }

    /// Append a project unless its path is already registered.
    pub fn add_project(&mut self, record: ProjectRecord) -> bool {
        if self.project(&record.path).is_some() {
            tracing::debug!("Project {} already registered", record.path.display());
            return false;
        }
        self.document.projects.push(record);
        true
    }

    /// Merge `update` into the project at `path`.
    ///
    /// Returns false when the path is unknown or the merged record equals
    /// the stored one.
    pub fn update_project(&mut self, path: &Path, update: &ProjectUpdate) -> bool {
        let Some(record) = self.document.projects.iter_mut().find(|p| p.path == path) else {
            return false;
        };

        let updated = update.apply(record);
        if updated == *record {
            return false;
        }
        *record = updated;
        true
    }

    /// Remove the project at `path`, if any.
    pub fn remove_project(&mut self, path: &Path) -> bool {
        let before = self.document.projects.len();
        self.document.projects.retain(|p| p.path != path);
        self.document.projects.len() != before
    }

    /// Point the project at `path` to its renamed folder.
    ///
    /// Returns the new path, or `None` if the project is not registered.
    pub fn rename_project(&mut self, path: &Path, new_name: &str) -> Option<PathBuf> {
        let record = self.document.projects.iter_mut().find(|p| p.path == path)?;
        let new_path = record.renamed_path(new_name);
        record.path = new_path.clone();
        record.name = new_name.to_string();
        Some(new_path)
    }

    // --- Editor folders ---

    /// All registered editor folders in insertion order.
    pub fn editor_folders(&self) -> &[EditorFolderRecord] {
        &self.document.editor_folders
    }

    /// Append an editor folder unless its path is already registered.
    pub fn add_editor_folder(&mut self, record: EditorFolderRecord) -> bool {
        if self
            .document
            .editor_folders
            .iter()
            .any(|f| f.path == record.path)
        {
            tracing::debug!("Editor folder {} already registered", record.path.display());
            return false;
        }
        self.document.editor_folders.push(record);
        true
    }

    /// Remove the editor folder at `path`, if any.
    pub fn remove_editor_folder(&mut self, path: &Path) -> bool {
        let before = self.document.editor_folders.len();
        self.document.editor_folders.retain(|f| f.path != path);
        self.document.editor_folders.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn empty_store(temp: &TempDir) -> Store {
        Store::open(&temp.path().join("store.json")).unwrap()
    }

    fn project(path: &str) -> ProjectRecord {
        ProjectRecord::from_path(Path::new(path))
    }

    #[test]
    fn open_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = empty_store(&temp);
        assert!(store.projects().is_empty());
        assert!(store.editor_folders().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn save_and_reopen() {
        let temp = TempDir::new().unwrap();
        let mut store = empty_store(&temp);
        store.add_project(project("/work/Game"));
        store.add_editor_folder(EditorFolderRecord::new(Path::new("/opt/unity")));
        store.save().unwrap();

        let reopened = Store::open(store.path()).unwrap();
        assert_eq!(reopened.document(), store.document());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("store.json");
        let store = Store::open(&path).unwrap();
        store.save().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let store = empty_store(&temp);
        store.save().unwrap();
        assert!(!temp.path().join("store.json.tmp").exists());
    }

    #[test]
    fn document_uses_top_level_collection_names() {
        let temp = TempDir::new().unwrap();
        let mut store = empty_store(&temp);
        store.add_project(project("/work/Game"));
        store.save().unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value["Projects"].is_array());
        assert!(value["EditorFolders"].is_array());
        assert_eq!(value["Projects"][0]["name"], "Game");
        assert!(value["Projects"][0].get("editorVersion").is_none());
    }

    #[test]
    fn open_rejects_malformed_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Store::open(&path).unwrap_err();
        assert!(matches!(err, RunwayError::StoreParseError { .. }));
    }

    #[test]
    fn open_accepts_missing_collections() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.json");
        fs::write(&path, r#"{ "Projects": [ { "path": "/a", "name": "a" } ] }"#).unwrap();
        let store = Store::open(&path).unwrap();
        assert_eq!(store.projects().len(), 1);
        assert!(store.editor_folders().is_empty());
    }

    #[test]
    fn add_duplicate_project_is_noop() {
        let temp = TempDir::new().unwrap();
        let mut store = empty_store(&temp);
        assert!(store.add_project(project("/work/Game")));
        assert!(!store.add_project(project("/work/Game")));
        assert_eq!(store.projects().len(), 1);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let temp = TempDir::new().unwrap();
        let mut store = empty_store(&temp);
        store.add_project(project("/work/B"));
        store.add_project(project("/work/A"));
        let names: Vec<_> = store.projects().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn remove_unknown_project_is_noop() {
        let temp = TempDir::new().unwrap();
        let mut store = empty_store(&temp);
        store.add_project(project("/work/Game"));
        assert!(!store.remove_project(Path::new("/work/Other")));
        assert_eq!(store.projects().len(), 1);
    }

    #[test]
    fn remove_project_by_path() {
        let temp = TempDir::new().unwrap();
        let mut store = empty_store(&temp);
        store.add_project(project("/work/Game"));
        assert!(store.remove_project(Path::new("/work/Game")));
        assert!(store.projects().is_empty());
    }

    #[test]
    fn update_with_equal_tags_reports_unchanged() {
        let temp = TempDir::new().unwrap();
        let mut store = empty_store(&temp);
        let mut record = project("/work/Game");
        record.tags = vec!["jam".into()];
        store.add_project(record);

        let update = ProjectUpdate::tags(vec!["jam".into()]);
        assert!(!store.update_project(Path::new("/work/Game"), &update));
    }

    #[test]
    fn update_changes_tags() {
        let temp = TempDir::new().unwrap();
        let mut store = empty_store(&temp);
        store.add_project(project("/work/Game"));

        let update = ProjectUpdate::tags(vec!["jam".into(), "2d".into()]);
        assert!(store.update_project(Path::new("/work/Game"), &update));
        assert_eq!(
            store.project(Path::new("/work/Game")).unwrap().tags,
            vec!["jam".to_string(), "2d".to_string()]
        );
    }

    #[test]
    fn update_unknown_project_is_noop() {
        let temp = TempDir::new().unwrap();
        let mut store = empty_store(&temp);
        let update = ProjectUpdate::tags(vec!["x".into()]);
        assert!(!store.update_project(Path::new("/nope"), &update));
    }

    #[test]
    fn rename_updates_path_and_name() {
        let temp = TempDir::new().unwrap();
        let mut store = empty_store(&temp);
        let mut record = project("/work/Old");
        record.tags = vec!["keep".into()];
        store.add_project(record);

        let new_path = store.rename_project(Path::new("/work/Old"), "New").unwrap();
        assert_eq!(new_path, PathBuf::from("/work/New"));

        let renamed = store.project(&new_path).unwrap();
        assert_eq!(renamed.name, "New");
        assert_eq!(renamed.tags, vec!["keep".to_string()]);
        assert!(store.project(Path::new("/work/Old")).is_none());
    }

    #[test]
    fn rename_unknown_project_returns_none() {
        let temp = TempDir::new().unwrap();
        let mut store = empty_store(&temp);
        assert!(store.rename_project(Path::new("/work/Old"), "New").is_none());
    }

    #[test]
    fn editor_folder_duplicates_and_removal() {
        let temp = TempDir::new().unwrap();
        let mut store = empty_store(&temp);
        let folder = EditorFolderRecord::new(Path::new("/opt/unity"));

        assert!(store.add_editor_folder(folder.clone()));
        assert!(!store.add_editor_folder(folder));
        assert_eq!(store.editor_folders().len(), 1);

        assert!(!store.remove_editor_folder(Path::new("/opt/other")));
        assert!(store.remove_editor_folder(Path::new("/opt/unity")));
        assert!(store.editor_folders().is_empty());
    }
}
