//! Project-level operations beyond plain store CRUD.
//!
//! - [`rename`] - folder rename kept in step with the store
//! - [`tags`] - tag normalisation and editing
//! - [`paths`] - resolving command-line paths to registered entries

pub mod paths;
pub mod rename;
pub mod tags;

pub use paths::{absolute, find_editor_folder, find_project, resolve_path};
pub use rename::{rename_project, validate_name, RenameOutcome};
pub use tags::{apply_edits, normalize_tags, parse_tag_list, TagEdit};
