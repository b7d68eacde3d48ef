//! Persisted record shapes.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A registered project folder.
///
/// Only these fields are persisted. Preview, modification time and editor
/// version are derived on every read (see [`crate::catalog::ProjectView`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Folder path; also the record's identity.
    pub path: PathBuf,

    /// Display name.
    pub name: String,

    /// User-assigned tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProjectRecord {
    /// Create a record named after the folder's last path segment.
    pub fn from_path(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            name: folder_name(path),
            tags: Vec::new(),
        }
    }

    /// Path this record would have after renaming its folder to `new_name`.
    pub fn renamed_path(&self, new_name: &str) -> PathBuf {
        self.path.with_file_name(new_name)
    }
}

/// Partial update for a project record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ProjectUpdate {
    /// Update that only replaces tags.
    pub fn tags(tags: Vec<String>) -> Self {
        Self {
            name: None,
            tags: Some(tags),
        }
    }

    /// Return `record` with this update merged over it.
    pub fn apply(&self, record: &ProjectRecord) -> ProjectRecord {
        ProjectRecord {
            path: record.path.clone(),
            name: self.name.clone().unwrap_or_else(|| record.name.clone()),
            tags: self.tags.clone().unwrap_or_else(|| record.tags.clone()),
        }
    }
}

/// A directory scanned for installed editor versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorFolderRecord {
    pub path: PathBuf,
}

impl EditorFolderRecord {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

/// Last non-empty path segment, accepting either separator style.
pub fn folder_name(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .last()
        .unwrap_or_default()
        .to_string()
}
