//! core::manifest
//!
//! Best-effort project manifest reading.
//!
//! # Sources
//!
//! Searched in order, first file present wins:
//! 1. `package.json`
//! 2. `Cargo.toml` (`[package]` table)
//!
//! # Invariants
//!
//! - Never fails outward. A manifest that is missing, unreadable, or
//!   malformed means "no information", not an error.
//! - Only `name`, `description` and `license` are extracted, and only when
//!   they are strings.

use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;
use toml::Value as TomlValue;

/// File name of the npm-style manifest.
pub const PACKAGE_JSON: &str = "package.json";

/// File name of the Cargo manifest.
pub const CARGO_TOML: &str = "Cargo.toml";

/// Metadata extracted from a project manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestInfo {
    /// Manifest file the data came from
    pub source: &'static str,
    /// Package name
    pub name: Option<String>,
    /// Package description
    pub description: Option<String>,
    /// License expression
    pub license: Option<String>,
}

/// Read manifest metadata from the working directory.
///
/// Returns `None` if no manifest exists or the first one found cannot be
/// parsed.
pub fn read_manifest(cwd: &Path) -> Option<ManifestInfo> {
    let package_json = cwd.join(PACKAGE_JSON);
    if package_json.exists() {
        let contents = fs::read_to_string(&package_json).ok()?;
        return parse_package_json(&contents);
    }

    let cargo_toml = cwd.join(CARGO_TOML);
    if cargo_toml.exists() {
        let contents = fs::read_to_string(&cargo_toml).ok()?;
        return parse_cargo_toml(&contents);
    }

    None
}

/// Extract metadata from `package.json` contents.
pub fn parse_package_json(contents: &str) -> Option<ManifestInfo> {
    let pkg: JsonValue = serde_json::from_str(contents).ok()?;
    let field = |key: &str| pkg.get(key).and_then(JsonValue::as_str).map(str::to_string);

    Some(ManifestInfo {
        source: PACKAGE_JSON,
        name: field("name"),
        description: field("description"),
        license: field("license"),
    })
}

/// Extract metadata from `Cargo.toml` contents.
///
/// Workspace-inherited fields (`license.workspace = true`) are tables and
/// therefore read as absent.
pub fn parse_cargo_toml(contents: &str) -> Option<ManifestInfo> {
    let manifest: TomlValue = toml::from_str(contents).ok()?;
    let package = manifest.get("package");
    let field = |key: &str| {
        package
            .and_then(|p| p.get(key))
            .and_then(TomlValue::as_str)
            .map(str::to_string)
    };

    Some(ManifestInfo {
        source: CARGO_TOML,
        name: field("name"),
        description: field("description"),
        license: field("license"),
    })
}
