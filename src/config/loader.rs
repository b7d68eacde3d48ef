//! Configuration file discovery and loading.
//!
//! Runway reads a single optional YAML file. When no path is given
//! explicitly, `~/.runway/config.yml` is used if it exists; otherwise
//! defaults apply.

use crate::config::schema::RunwayConfig;
use crate::error::{Result, RunwayError};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Directory holding Runway's config and store: `~/.runway`.
pub fn runway_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(".runway")
}

/// Default config file location: `~/.runway/config.yml`.
pub fn default_config_path() -> PathBuf {
    runway_home().join("config.yml")
}

/// Default store document location: `~/.runway/store.json`.
pub fn default_store_path() -> PathBuf {
    runway_home().join("store.json")
}

/// Load the user configuration.
///
/// An explicit path must exist. The default path is optional and a
/// missing file yields [`RunwayConfig::default`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if a value is out of range.
pub fn load_config(explicit: Option<&Path>) -> Result<RunwayConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => {
            let path = default_config_path();
            if path.exists() {
                load_config_file(&path)
            } else {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(RunwayConfig::default())
            }
        }
    }
}

/// Load a single config file and parse it into [`RunwayConfig`].
pub fn load_config_file(path: &Path) -> Result<RunwayConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RunwayError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RunwayError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`RunwayConfig`] and validate it.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<RunwayConfig> {
    if content.trim().is_empty() {
        return Ok(RunwayConfig::default());
    }

    let config: RunwayConfig =
        serde_yaml::from_str(content).map_err(|e| RunwayError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate(&config)?;
    Ok(config)
}

/// Check values serde cannot express.
pub fn validate(config: &RunwayConfig) -> Result<()> {
    let exe = &config.editor_executable;

    if exe.as_os_str().is_empty() {
        return Err(RunwayError::ConfigValidationError {
            message: "editor_executable must not be empty".to_string(),
        });
    }

    if exe.is_absolute() || exe.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(RunwayError::ConfigValidationError {
            message: format!(
                "editor_executable must be relative to the version folder, got {}",
                exe.display()
            ),
        });
    }

    Ok(())
}
