//! Search and sort over project views.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::view::ProjectView;

/// Column a project list is sorted by.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    #[default]
    Modified,
    Version,
}

impl SortKey {
    /// Newest first for `modified`, A to Z and oldest version first otherwise.
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortKey::Modified => SortDirection::Descending,
            SortKey::Name | SortKey::Version => SortDirection::Ascending,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Case-insensitive match against the name or any tag.
///
/// An empty term matches every project.
pub fn matches_search(view: &ProjectView, term: &str) -> bool {
    let term = term.to_lowercase();
    view.name.to_lowercase().contains(&term)
        || view.tags.iter().any(|t| t.to_lowercase().contains(&term))
}

/// Keep only the views matching `term`.
pub fn filter_views(views: Vec<ProjectView>, term: &str) -> Vec<ProjectView> {
    views
        .into_iter()
        .filter(|view| matches_search(view, term))
        .collect()
}

/// Sort views in place. Ties keep their store order.
pub fn sort_views(views: &mut [ProjectView], key: SortKey, direction: SortDirection) {
    views.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare(a: &ProjectView, b: &ProjectView, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        // None sorts before any timestamp, i.e. as the oldest
        SortKey::Modified => a.modified.cmp(&b.modified),
        SortKey::Version => version_parts(&a.editor_version).cmp(&version_parts(&b.editor_version)),
    }
}

/// Split a version like `2021.3.10f1` into numeric-aware segments so that
/// `2021.3.10f1` sorts after `2021.3.5f1`.
fn version_parts(version: &str) -> Vec<(u64, String)> {
    version
        .split('.')
        .map(|segment| {
            let digits: String = segment.chars().take_while(|c| c.is_ascii_digit()).collect();
            let rest = segment[digits.len()..].to_string();
            (digits.parse().unwrap_or(0), rest)
        })
        .collect()
}
