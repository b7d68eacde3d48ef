//! Project list view model.
//!
//! Derived fields (preview, modification time, editor version) are
//! recomputed on every read by projecting stored records through the
//! filesystem probes; nothing here is persisted.

pub mod query;
pub mod view;

pub use query::{filter_views, matches_search, sort_views, SortDirection, SortKey};
pub use view::{load_views, resolve_editor, ProjectView, UNKNOWN_VERSION};
