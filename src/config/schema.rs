//! Configuration schema definitions for Runway.
//!
//! This module contains the struct definitions that map to the
//! YAML configuration file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::SortKey;

/// Relative location of the editor binary inside a version directory.
pub const DEFAULT_EDITOR_EXECUTABLE: &str = "Editor/Unity.exe";

/// Root configuration structure for `~/.runway/config.yml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunwayConfig {
    /// Store document location (overrides `~/.runway/store.json`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,

    /// Editor binary path relative to each installed version directory
    pub editor_executable: PathBuf,

    /// Sort order used by `runway list` when `--sort` is not given
    pub default_sort: SortKey,

    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,
}

impl Default for RunwayConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            editor_executable: PathBuf::from(DEFAULT_EDITOR_EXECUTABLE),
            default_sort: SortKey::default(),
            default_output: OutputMode::default(),
        }
    }
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}
