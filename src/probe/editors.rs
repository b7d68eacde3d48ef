//! Installed editor discovery.
//!
//! An editor folder contains one directory per installed version, e.g.
//!
//! ```text
//! C:/Program Files/Unity/Hub/Editor/
//!   2021.3.5f1/Editor/Unity.exe
//!   2022.3.10f1/Editor/Unity.exe
//! ```

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::EditorFolderRecord;

/// One installed editor version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorInstall {
    /// Editor folder the version was found in.
    pub folder: PathBuf,
    /// Version directory name.
    pub version: String,
    /// Full path to the editor binary.
    pub executable: PathBuf,
}

/// Scan the immediate subdirectories of `base` for editor installs.
///
/// A subdirectory counts when `<subdir>/<executable>` exists. Results are
/// sorted by version name; an unreadable `base` yields nothing.
pub fn discover_editors(base: &Path, executable: &Path) -> Vec<EditorInstall> {
    let entries = match fs::read_dir(base) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Error while scanning editor folder {}: {}", base.display(), e);
            return Vec::new();
        }
    };

    let mut installs: Vec<EditorInstall> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| {
            let version = entry.file_name().to_string_lossy().to_string();
            let exe = entry.path().join(executable);
            if exe.exists() {
                Some(EditorInstall {
                    folder: base.to_path_buf(),
                    version,
                    executable: exe,
                })
            } else {
                tracing::debug!("Skipping {}: no {}", entry.path().display(), executable.display());
                None
            }
        })
        .collect();

    installs.sort_by(|a, b| a.version.cmp(&b.version));
    installs
}

/// Installed editors in `scope`, or across every registered folder.
pub fn list_editors(
    folders: &[EditorFolderRecord],
    scope: Option<&Path>,
    executable: &Path,
) -> Vec<EditorInstall> {
    match scope {
        Some(base) => discover_editors(base, executable),
        None => folders
            .iter()
            .flat_map(|folder| discover_editors(&folder.path, executable))
            .collect(),
    }
}
