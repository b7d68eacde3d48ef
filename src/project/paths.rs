//! Command-line path normalisation.

use std::path::{Path, PathBuf};

use crate::store::Store;

/// Make `input` absolute, canonicalizing it when it exists.
pub fn resolve_path(input: &Path) -> PathBuf {
    if let Ok(canonical) = input.canonicalize() {
        return canonical;
    }
    absolute(input)
}

/// Make `input` absolute without touching the filesystem.
pub fn absolute(input: &Path) -> PathBuf {
    if input.is_absolute() {
        return input.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(input),
        Err(_) => input.to_path_buf(),
    }
}

/// Find the stored path of a registered project named by `input`.
///
/// Tries the canonical form first, then the plain absolute form, so that
/// projects whose folder has since disappeared can still be addressed.
pub fn find_project(store: &Store, input: &Path) -> Option<PathBuf> {
    candidates(input)
        .into_iter()
        .find(|candidate| store.project(candidate).is_some())
}

/// Find the stored path of a registered editor folder named by `input`.
pub fn find_editor_folder(store: &Store, input: &Path) -> Option<PathBuf> {
    candidates(input).into_iter().find(|candidate| {
        store
            .editor_folders()
            .iter()
            .any(|folder| &folder.path == candidate)
    })
}

fn candidates(input: &Path) -> Vec<PathBuf> {
    let mut paths = vec![resolve_path(input)];
    let plain = absolute(input);
    if !paths.contains(&plain) {
        paths.push(plain);
    }
    paths
}
