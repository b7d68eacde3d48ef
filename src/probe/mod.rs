//! Filesystem probes.
//!
//! Probes never fail: a missing file, unreadable folder or malformed
//! version line is logged and replaced by an empty result.
//!
//! - [`project`] - preview image, folder modification time, editor version
//! - [`editors`] - installed editor discovery
//! - [`humanize`] - relative time wording for modification times

pub mod editors;
pub mod humanize;
pub mod project;

pub use editors::{discover_editors, list_editors, EditorInstall};
pub use humanize::humanize_distance;
pub use project::{
    editor_version, modified, parse_editor_version, preview, ProjectProbe, VERSION_FILE,
};
