//! Error types for Runway operations.
//!
//! This module defines [`RunwayError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RunwayError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RunwayError::Other`) for unexpected errors
//! - Filesystem probes never return errors; they log and fall back to defaults

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Runway operations.
#[derive(Debug, Error)]
pub enum RunwayError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The store document could not be parsed.
    #[error("Failed to read store at {path}: {message}")]
    StoreParseError { path: PathBuf, message: String },

    /// The store document could not be serialized.
    #[error("Failed to write store at {path}: {message}")]
    StoreWriteError { path: PathBuf, message: String },

    /// The path is not a registered project.
    #[error("Project not registered: {path}")]
    ProjectNotFound { path: PathBuf },

    /// The path is not a registered editor folder.
    #[error("Editor folder not registered: {path}")]
    EditorFolderNotFound { path: PathBuf },

    /// A folder expected on disk does not exist.
    #[error("Folder not found: {path}")]
    FolderNotFound { path: PathBuf },

    /// No installed editor matches the requested version.
    #[error("No installed editor matches version '{version}'")]
    NoMatchingEditor { version: String },

    /// The editor process could not be started.
    #[error("Failed to launch {editor}: {message}")]
    LaunchFailed { editor: String, message: String },

    /// A new project name was rejected.
    #[error("Invalid name '{name}': {message}")]
    InvalidName { name: String, message: String },

    /// A path argument was rejected.
    #[error("Invalid folder path: {message}")]
    InvalidPath { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Runway operations.
pub type Result<T> = std::result::Result<T, RunwayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = RunwayError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn store_parse_error_displays_path() {
        let err = RunwayError::StoreParseError {
            path: PathBuf::from("/home/me/.runway/store.json"),
            message: "expected value".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("store.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn project_not_found_displays_path() {
        let err = RunwayError::ProjectNotFound {
            path: PathBuf::from("/projects/Space"),
        };
        assert!(err.to_string().contains("/projects/Space"));
    }

    #[test]
    fn no_matching_editor_displays_version() {
        let err = RunwayError::NoMatchingEditor {
            version: "2021.3.5f1".into(),
        };
        assert!(err.to_string().contains("2021.3.5f1"));
    }

    #[test]
    fn launch_failed_displays_editor_and_message() {
        let err = RunwayError::LaunchFailed {
            editor: "/opt/Unity/Editor/Unity".into(),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/opt/Unity/Editor/Unity"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn invalid_path_displays_message() {
        let err = RunwayError::InvalidPath {
            message: "path must be absolute".into(),
        };
        assert!(err.to_string().starts_with("Invalid folder path"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RunwayError = io_err.into();
        assert!(matches!(err, RunwayError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(RunwayError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
