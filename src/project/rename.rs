//! Renaming a project folder together with its store record.
//!
//! Renaming `<parent>/Old` to `<parent>/New` also renames entries inside the
//! folder that carry the old name as a prefix (`Old.sln`, `Old.Editor.csproj`),
//! replacing the first occurrence of the old name.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RunwayError};
use crate::store::{folder_name, Store};

/// Result of a rename request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_path: Option<PathBuf>,
}

impl RenameOutcome {
    fn renamed(new_path: PathBuf) -> Self {
        Self {
            success: true,
            message: "Folder and files renamed successfully.".to_string(),
            new_path: Some(new_path),
        }
    }

    fn failed(message: String, new_path: Option<PathBuf>) -> Self {
        Self {
            success: false,
            message,
            new_path,
        }
    }
}

/// Rename the registered project at `path` to `new_name`.
///
/// Never returns an error: failures are logged and reported through the
/// outcome. Once the folder itself has moved, the store is updated and
/// saved before sibling entries are renamed, so a failure there leaves a
/// record that still points at the folder.
pub fn rename_project(store: &mut Store, path: &Path, new_name: &str) -> RenameOutcome {
    let new_folder = match move_folder(store, path, new_name) {
        Ok(new_folder) => new_folder,
        Err(e) => {
            tracing::error!("Error renaming folder {}: {}", path.display(), e);
            return RenameOutcome::failed(e.to_string(), None);
        }
    };

    let old_name = folder_name(path);
    match rename_entries(&new_folder, &old_name, new_name.trim()) {
        Ok(count) => {
            tracing::info!(
                "Renamed {} to {} ({} matching entries)",
                path.display(),
                new_folder.display(),
                count
            );
            RenameOutcome::renamed(new_folder)
        }
        Err(e) => {
            tracing::error!("Error renaming files in {}: {}", new_folder.display(), e);
            RenameOutcome::failed(e.to_string(), Some(new_folder))
        }
    }
}

/// Check a requested name against the current folder name.
pub fn validate_name(current: &str, requested: &str) -> Result<String> {
    let name = requested.trim();
    let reject = |message: &str| RunwayError::InvalidName {
        name: requested.to_string(),
        message: message.to_string(),
    };

    if name.is_empty() {
        return Err(reject("name must not be empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(reject("name must not contain path separators"));
    }
    if name == "." || name == ".." {
        return Err(reject("name must be a folder name"));
    }
    if name == current {
        return Err(reject("name is unchanged"));
    }

    Ok(name.to_string())
}

fn move_folder(store: &mut Store, path: &Path, new_name: &str) -> Result<PathBuf> {
    if store.project(path).is_none() {
        return Err(RunwayError::ProjectNotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(RunwayError::FolderNotFound {
            path: path.to_path_buf(),
        });
    }

    let old_name = folder_name(path);
    let new_name = validate_name(&old_name, new_name)?;
    let new_folder = path.with_file_name(&new_name);

    if new_folder.exists() {
        return Err(RunwayError::InvalidName {
            name: new_name,
            message: format!("{} already exists", new_folder.display()),
        });
    }

    fs::rename(path, &new_folder)?;

    let stored = store.rename_project(path, &new_name);
    debug_assert_eq!(stored.as_deref(), Some(new_folder.as_path()));
    if let Err(e) = store.save() {
        store.rename_project(&new_folder, &old_name);
        if let Err(undo) = fs::rename(&new_folder, path) {
            tracing::error!(
                "Could not move {} back to {}: {}",
                new_folder.display(),
                path.display(),
                undo
            );
        }
        return Err(e);
    }

    Ok(new_folder)
}

fn rename_entries(folder: &Path, old_name: &str, new_name: &str) -> Result<usize> {
    let matching: Vec<String> = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with(old_name))
        .collect();

    for name in &matching {
        let renamed = name.replacen(old_name, new_name, 1);
        fs::rename(folder.join(name), folder.join(&renamed))?;
    }

    Ok(matching.len())
}
