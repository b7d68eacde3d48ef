//! Configuration loading and validation for Runway.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use runway::config::{parse_config, SortKey};
//! use std::path::Path;
//!
//! let config = parse_config("default_sort: name", Path::new("config.yml")).unwrap();
//! assert_eq!(config.default_sort, SortKey::Name);
//! ```
//!
//! # Configuration File Location
//!
//! `~/.runway/config.yml`, or the file named by `--config` / `RUNWAY_CONFIG`.

pub mod loader;
pub mod schema;

pub use crate::catalog::SortKey;
pub use loader::{
    default_config_path, default_store_path, load_config, load_config_file, parse_config,
    runway_home, validate,
};
pub use schema::{OutputMode, RunwayConfig, DEFAULT_EDITOR_EXECUTABLE};
