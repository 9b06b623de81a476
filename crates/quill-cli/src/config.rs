//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).
//!
//! A configuration file may carry a `[limits]` table with default character
//! limits and an `[analyzer]` table with analyzer thresholds:
//!
//! ```toml
//! [limits]
//! title = 60
//! total = 500
//!
//! [analyzer]
//! max_text_length = 1000
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use quill::{QuillError, config::AppConfig, limits::LimitKey};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for QuillError {
    fn from(err: ConfigError) -> Self {
        QuillError::Config(err.to_string())
    }
}

/// Project-local configuration, relative to the working directory.
const LOCAL_CONFIG: &str = "quill/config.toml";

/// Resolve and load the configuration.
///
/// An explicit path must exist. Without one, the first existing file among
/// `quill/config.toml` and the platform config directory is used, falling
/// back to the built-in defaults.
///
/// # Errors
///
/// Returns [`QuillError::Config`] if the explicit file is missing, a file
/// does not parse, or a configured limit is zero.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, QuillError> {
    let path = match explicit_path {
        Some(path) => path.as_ref().to_path_buf(),
        None => match discover() {
            Some(path) => path,
            None => {
                debug!("No configuration file found, using defaults");
                return Ok(AppConfig::default());
            }
        },
    };

    info!(path = path.display().to_string(); "Loading configuration");
    load_config_file(&path)
}

/// Find the first configuration file that exists.
fn discover() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return Some(local);
    }

    let Some(dirs) = ProjectDirs::from("com", "quill", "quill") else {
        debug!("Could not determine platform-specific config directory");
        return None;
    };
    let system = dirs.config_dir().join("config.toml");
    if system.exists() {
        Some(system)
    } else {
        debug!(path = system.display().to_string(); "System configuration file not found");
        None
    }
}

/// Load and check configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, QuillError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    validate(&config)?;
    Ok(config)
}

/// Reject limits that no post could satisfy.
fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    for key in LimitKey::ALL {
        if config.limits().get(key) == 0 {
            return Err(ConfigError::Validation(format!(
                "limit `{key}` must be greater than zero"
            )));
        }
    }
    Ok(())
}
