//! core::config::schema
//!
//! Config file schema.
//!
//! # Format
//!
//! A single JSON object. Every field is optional; absent fields leave the
//! lower-precedence value in place.
//!
//! ```json
//! {
//!   "projectName": "my-tool",
//!   "description": "Does one thing well",
//!   "features": ["Fast", "Small"],
//!   "install": "cargo install my-tool",
//!   "usage": "my-tool --help",
//!   "license": "Apache-2.0",
//!   "lang": "zh",
//!   "out": "docs/README.md"
//! }
//! ```
//!
//! # Validation
//!
//! The raw JSON object is shape-checked before deserialization so that every
//! rejection names the offending field. Unknown keys are rejected rather
//! than ignored, so a typo never silently has no effect.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::types::Lang;

/// Keys accepted in a config file, in display order.
pub const ALLOWED_FIELDS: [&str; 8] = [
    "projectName",
    "description",
    "features",
    "install",
    "usage",
    "license",
    "lang",
    "out",
];

/// Partial settings read from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    /// Project name
    pub project_name: Option<String>,

    /// Description
    pub description: Option<String>,

    /// Feature list; replaces the default list wholesale
    pub features: Option<Vec<String>>,

    /// Install command
    pub install: Option<String>,

    /// Usage example
    pub usage: Option<String>,

    /// License identifier
    pub license: Option<String>,

    /// Output language
    pub lang: Option<Lang>,

    /// Output path
    pub out: Option<PathBuf>,
}

/// Check a parsed config object against the allow-list and field types.
///
/// Returns a message naming the first offending field.
pub fn validate_object(object: &Map<String, Value>) -> Result<(), String> {
    for (key, value) in object {
        match key.as_str() {
            "features" => match value {
                Value::Array(items) => {
                    if items.iter().any(|item| !item.is_string()) {
                        return Err("\"features\" must be an array of strings.".to_string());
                    }
                }
                _ => return Err("\"features\" must be an array of strings.".to_string()),
            },
            "lang" => {
                let valid = value
                    .as_str()
                    .map(|s| s.parse::<Lang>().is_ok())
                    .unwrap_or(false);
                if !valid {
                    return Err("\"lang\" must be \"en\" or \"zh\".".to_string());
                }
            }
            known if ALLOWED_FIELDS.contains(&known) => {
                if !value.is_string() {
                    return Err(format!("\"{}\" must be a string.", known));
                }
            }
            unknown => {
                return Err(format!(
                    "Unknown config field \"{}\". Allowed: {}",
                    unknown,
                    ALLOWED_FIELDS.join(", ")
                ));
            }
        }
    }

    Ok(())
}
