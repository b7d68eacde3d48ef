//! Runway - a command-line launcher for Unity projects.
//!
//! Runway keeps a small store of project folders and editor install folders,
//! works out which editor version each project was last saved with, and
//! opens the project in that editor.
//!
//! # Modules
//!
//! - [`catalog`] - Project views: derived fields, search and sort
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`launch`] - Starting the editor and the file manager
//! - [`probe`] - Filesystem probes for projects and editor installs
//! - [`project`] - Rename, tag editing and path lookup
//! - [`store`] - The persisted JSON document
//! - [`ui`] - Prompts, tables and terminal output
//!
//! # Example
//!
//! ```
//! use runway::probe::parse_editor_version;
//!
//! let content = "m_EditorVersion: 2021.3.5f1\nm_EditorVersionWithRevision: 2021.3.5f1 (40eb3a945986)";
//! assert_eq!(parse_editor_version(content).as_deref(), Some("2021.3.5f1"));
//! ```
//!
//! For store round trips and the command surface, see the integration tests.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod launch;
pub mod probe;
pub mod project;
pub mod store;
pub mod ui;

pub use error::{Result, RunwayError};
