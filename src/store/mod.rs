//! Persistent store for registered projects and editor folders.
//!
//! The store is one JSON document with two ordered collections. Paths are
//! unique within each collection; inserting a known path is a no-op.

pub mod document;
pub mod records;

pub use document::{Store, StoreDocument};
pub use records::{folder_name, EditorFolderRecord, ProjectRecord, ProjectUpdate};
