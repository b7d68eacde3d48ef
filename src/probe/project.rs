//! Per-project filesystem probes.
//!
//! Each probe logs its own failure and returns `None` instead of an error.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Location of the version file inside a project.
pub const VERSION_FILE: &str = "ProjectSettings/ProjectVersion.txt";

const VERSION_KEY: &str = "m_EditorVersion:";

/// Preview image names, in lookup order.
const PREVIEW_FILES: &[&str] = &["preview.png", "preview.jpg"];

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^m_EditorVersion:\s*(\d+\.\d+\.\d+[a-zA-Z\d]*)").expect("valid version regex")
});

/// Everything probed from one project folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectProbe {
    pub preview: Option<PathBuf>,
    pub modified: Option<DateTime<Utc>>,
    pub editor_version: Option<String>,
}

impl ProjectProbe {
    /// Run all probes against `path`.
    pub fn run(path: &Path) -> Self {
        Self {
            preview: preview(path),
            modified: modified(path),
            editor_version: editor_version(path),
        }
    }
}

/// `preview.png` at the project root, else `preview.jpg`.
pub fn preview(project: &Path) -> Option<PathBuf> {
    PREVIEW_FILES
        .iter()
        .map(|name| project.join(name))
        .find(|candidate| candidate.exists())
}

/// Modification time of the project folder itself.
pub fn modified(project: &Path) -> Option<DateTime<Utc>> {
    match fs::metadata(project).and_then(|m| m.modified()) {
        Ok(time) => Some(DateTime::<Utc>::from(time)),
        Err(e) => {
            tracing::warn!(
                "Error fetching folder modified date for {}: {}",
                project.display(),
                e
            );
            None
        }
    }
}

/// Editor version recorded in `ProjectSettings/ProjectVersion.txt`.
pub fn editor_version(project: &Path) -> Option<String> {
    let version_file = project.join(VERSION_FILE);

    let content = match fs::read_to_string(&version_file) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No version file at {}", version_file.display());
            return None;
        }
        Err(e) => {
            tracing::warn!("Error reading {}: {}", version_file.display(), e);
            return None;
        }
    };

    let parsed = parse_editor_version(&content);
    if parsed.is_none() {
        tracing::warn!(
            "No valid {} entry in {}",
            VERSION_KEY,
            version_file.display()
        );
    }
    parsed
}

/// Extract the version token from version file content.
///
/// The first line starting with `m_EditorVersion:` decides the result; a
/// token must look like `<major>.<minor>.<patch><suffix>`.
pub fn parse_editor_version(content: &str) -> Option<String> {
    let line = content.lines().find(|line| line.starts_with(VERSION_KEY))?;
    VERSION_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
