//! core::config
//!
//! Explicit JSON config file loading.
//!
//! # Overview
//!
//! The config file is optional, but once a path is given it is read
//! strictly: a missing file, malformed JSON, or a field outside the schema
//! is an error rather than a silent fallback to defaults.
//!
//! # Precedence
//!
//! Settings are resolved in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Package manifest
//! 3. Config file (this module)
//! 4. CLI flags (not handled here)
//!
//! # Example
//!
//! ```no_run
//! use readmecraft::core::config::read_config;
//! use std::path::Path;
//!
//! let config = read_config(Some(Path::new("readme.json")), Path::new("/path/to/project"))
//!     .unwrap()
//!     .unwrap_or_default();
//!
//! if let Some(name) = &config.project_name {
//!     println!("Project: {}", name);
//! }
//! ```

pub mod schema;

pub use schema::{ConfigFile, ALLOWED_FIELDS};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file '{}': {source}", .path.display())]
    ReadError { path: PathBuf, source: io::Error },

    #[error("invalid JSON in config file '{}': {message}", .path.display())]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config file '{}': {message}", .path.display())]
    SchemaError { path: PathBuf, message: String },
}

/// Resolve a possibly-relative config path against the working directory.
pub fn resolve_config_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Read and validate an explicit config file.
///
/// Returns `Ok(None)` when no path was given. No defaults are injected:
/// fields absent from the file stay `None`.
///
/// # Errors
///
/// - [`ConfigError::NotFound`] if the path does not exist
/// - [`ConfigError::ReadError`] if it exists but cannot be read
/// - [`ConfigError::ParseError`] if the content is not JSON
/// - [`ConfigError::SchemaError`] if the JSON is not an object or breaks
///   the schema
pub fn read_config(path: Option<&Path>, cwd: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    let Some(path) = path else {
        return Ok(None);
    };

    let path = resolve_config_path(path, cwd);
    if !path.exists() {
        return Err(ConfigError::NotFound { path });
    }

    let contents = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;

    parse_config(&contents, &path).map(Some)
}

/// Parse config file contents.
///
/// `path` is used only for error messages.
pub fn parse_config(contents: &str, path: &Path) -> Result<ConfigFile, ConfigError> {
    let value: Value = serde_json::from_str(contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let object = value.as_object().ok_or_else(|| ConfigError::SchemaError {
        path: path.to_path_buf(),
        message: "config must be a JSON object".to_string(),
    })?;

    schema::validate_object(object).map_err(|message| ConfigError::SchemaError {
        path: path.to_path_buf(),
        message,
    })?;

    serde_json::from_value(value).map_err(|e| ConfigError::SchemaError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
