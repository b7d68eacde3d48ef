//! Read-time projection of project records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::probe::{humanize_distance, EditorInstall, ProjectProbe};
use crate::store::ProjectRecord;

/// Version shown when a project's editor version cannot be determined.
pub const UNKNOWN_VERSION: &str = "unknown";

/// A project as displayed: the stored record plus freshly probed fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: String,
    pub name: String,
    pub path: PathBuf,
    pub tags: Vec<String>,
    pub editor_version: String,
    pub modified: Option<DateTime<Utc>>,
    pub modified_text: String,
    pub preview: Option<PathBuf>,
    pub launchable: bool,
}

impl ProjectView {
    /// Combine a record with its probe result.
    ///
    /// Pure: nothing here touches the filesystem, so the same inputs always
    /// give the same view.
    pub fn project(
        record: &ProjectRecord,
        probe: ProjectProbe,
        editors: &[EditorInstall],
        now: DateTime<Utc>,
    ) -> Self {
        let editor_version = probe
            .editor_version
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string());
        let modified_text = probe
            .modified
            .map(|m| humanize_distance(m, now))
            .unwrap_or_default();
        let launchable = editors.iter().any(|e| e.version == editor_version);

        Self {
            id: record.path.to_string_lossy().to_string(),
            name: record.name.clone(),
            path: record.path.clone(),
            tags: record.tags.clone(),
            editor_version,
            modified: probe.modified,
            modified_text,
            preview: probe.preview,
            launchable,
        }
    }

    /// Probe `record`'s folder and project it.
    pub fn load(record: &ProjectRecord, editors: &[EditorInstall]) -> Self {
        Self::project(record, ProjectProbe::run(&record.path), editors, Utc::now())
    }
}

/// Project every record, in store order.
pub fn load_views(records: &[ProjectRecord], editors: &[EditorInstall]) -> Vec<ProjectView> {
    records
        .iter()
        .map(|record| ProjectView::load(record, editors))
        .collect()
}

/// Pick the editor used to open `view`.
///
/// An explicitly selected version wins; otherwise the editor matching the
/// project's detected version.
pub fn resolve_editor<'a>(
    view: &ProjectView,
    editors: &'a [EditorInstall],
    selected: Option<&str>,
) -> Option<&'a EditorInstall> {
    let wanted = selected.unwrap_or(&view.editor_version);
    editors.iter().find(|e| e.version == wanted)
}
