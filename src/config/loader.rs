//! Settings loading and discovery
//!
//! The file format is picked from the extension: `.json`, `.toml`, `.yaml`
//! or `.yml`.

use super::schema::Settings;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable naming a settings file when none is given explicitly
pub const CONFIG_ENV: &str = "PROMPTPIX_CONFIG";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error
    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML parsing error
    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    /// YAML parsing error
    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Extension is not one of json, toml, yaml, yml
    #[error("Unsupported config format: '{0}'")]
    UnsupportedFormat(String),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Supported settings file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Pick the settings file: an explicit path wins over [`CONFIG_ENV`].
pub fn find_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Load settings from a file.
///
/// # Errors
///
/// - `Io` if the file cannot be read
/// - `UnsupportedFormat` for unknown extensions
/// - `Json`/`Toml`/`Yaml` on parse failure
/// - `Validation` if [`Settings::validate`] reports problems
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    let contents = fs::read_to_string(path)?;
    let settings = parse_settings(&contents, format)?;
    debug!(path = %path.display(), overrides = settings.colors.len(), "settings loaded");
    Ok(settings)
}

/// Load settings from a discovered file, or defaults when there is none.
pub fn load_or_default(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    match find_config(explicit) {
        Some(path) => load_settings(&path),
        None => Ok(Settings::default()),
    }
}

/// Parse and validate settings text in the given format.
pub fn parse_settings(contents: &str, format: ConfigFormat) -> Result<Settings, ConfigError> {
    let settings: Settings = match format {
        ConfigFormat::Json => serde_json::from_str(contents)?,
        ConfigFormat::Toml => toml::from_str(contents)?,
        ConfigFormat::Yaml => serde_yaml::from_str(contents)?,
    };

    let errors = settings.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(settings)
}
