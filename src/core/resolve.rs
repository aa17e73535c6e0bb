//! core::resolve
//!
//! The settings resolution pipeline.
//!
//! # Layers
//!
//! Lowest to highest precedence:
//! 1. Built-in [`Defaults`]
//! 2. Manifest `name`/`description`/`license` (non-empty values only)
//! 3. Config file fields that are present
//! 4. CLI `lang` and `out`, when given
//!
//! Every layer replaces whole values. In particular `features` from a config
//! file replaces the default list; lists are never merged.
//!
//! # Example
//!
//! ```
//! use readmecraft::core::config::ConfigFile;
//! use readmecraft::core::resolve::{resolve, CliOverrides, Defaults};
//! use readmecraft::core::types::Lang;
//! use std::path::Path;
//!
//! let defaults = Defaults::for_dir(Path::new("/work/my-tool"));
//! let config = ConfigFile {
//!     features: Some(vec!["A".into(), "B".into()]),
//!     lang: Some(Lang::Zh),
//!     ..Default::default()
//! };
//! let cli = CliOverrides { lang: Some(Lang::En), out: None };
//!
//! let settings = resolve(&defaults, None, Some(&config), &cli);
//! assert_eq!(settings.project_name, "my-tool");
//! assert_eq!(settings.features, vec!["A", "B"]);
//! assert_eq!(settings.lang, Lang::En);
//! ```

use std::path::{Path, PathBuf};

use crate::core::config::ConfigFile;
use crate::core::manifest::ManifestInfo;
use crate::core::types::{Lang, Settings};

/// Project name used when the working directory has no base name.
pub const FALLBACK_PROJECT_NAME: &str = "project";

/// Default output file name.
pub const DEFAULT_OUT: &str = "README.md";

/// Built-in, project-agnostic defaults.
///
/// Constructed once per run; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    settings: Settings,
}

impl Defaults {
    /// Defaults for a project rooted at `cwd`.
    ///
    /// The project name is the directory's base name.
    pub fn for_dir(cwd: &Path) -> Self {
        let project_name = cwd
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_PROJECT_NAME.to_string());

        Self {
            settings: Settings {
                project_name,
                description: "A lightweight CLI tool to generate a clean, structured README."
                    .to_string(),
                features: ["Fast", "Lightweight", "No config", "Clean template"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                install: "cargo install readmecraft".to_string(),
                usage: "readmecraft --out README.md".to_string(),
                license: "MIT".to_string(),
                lang: Lang::default(),
                out: PathBuf::from(DEFAULT_OUT),
            },
        }
    }

    /// The default settings record.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Per-invocation overrides from CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--en` / `--zh`
    pub lang: Option<Lang>,
    /// `--out`
    pub out: Option<PathBuf>,
}

/// Merge all layers into a complete settings record.
///
/// The result is not re-validated; an empty project name coming from a
/// config file passes through unchanged.
pub fn resolve(
    defaults: &Defaults,
    manifest: Option<&ManifestInfo>,
    config: Option<&ConfigFile>,
    cli: &CliOverrides,
) -> Settings {
    let mut settings = defaults.settings().clone();

    if let Some(manifest) = manifest {
        overlay_manifest(&mut settings, manifest);
    }

    if let Some(config) = config {
        overlay_config(&mut settings, config);
    }

    if let Some(lang) = cli.lang {
        settings.lang = lang;
    }
    if let Some(out) = &cli.out {
        settings.out = out.clone();
    }

    settings
}

fn overlay_manifest(settings: &mut Settings, manifest: &ManifestInfo) {
    let non_empty = |value: &Option<String>| value.as_ref().filter(|s| !s.is_empty()).cloned();

    if let Some(name) = non_empty(&manifest.name) {
        settings.project_name = name;
    }
    if let Some(description) = non_empty(&manifest.description) {
        settings.description = description;
    }
    if let Some(license) = non_empty(&manifest.license) {
        settings.license = license;
    }
}

fn overlay_config(settings: &mut Settings, config: &ConfigFile) {
    if let Some(name) = &config.project_name {
        settings.project_name = name.clone();
    }
    if let Some(description) = &config.description {
        settings.description = description.clone();
    }
    if let Some(features) = &config.features {
        settings.features = features.clone();
    }
    if let Some(install) = &config.install {
        settings.install = install.clone();
    }
    if let Some(usage) = &config.usage {
        settings.usage = usage.clone();
    }
    if let Some(license) = &config.license {
        settings.license = license.clone();
    }
    if let Some(lang) = config.lang {
        settings.lang = lang;
    }
    if let Some(out) = &config.out {
        settings.out = out.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Defaults {
        Defaults::for_dir(Path::new("/home/dev/widget"))
    }

    fn manifest(name: Option<&str>, description: Option<&str>, license: Option<&str>) -> ManifestInfo {
        ManifestInfo {
            source: "package.json",
            name: name.map(String::from),
            description: description.map(String::from),
            license: license.map(String::from),
        }
    }

    #[test]
    fn defaults_only() {
        let settings = resolve(&defaults(), None, None, &CliOverrides::default());

        assert_eq!(settings.project_name, "widget");
        assert_eq!(settings.license, "MIT");
        assert_eq!(settings.lang, Lang::En);
        assert_eq!(settings.out, PathBuf::from("README.md"));
        assert_eq!(settings.features.len(), 4);
    }

    #[test]
    fn root_directory_falls_back() {
        let defaults = Defaults::for_dir(Path::new("/"));
        assert_eq!(defaults.settings().project_name, FALLBACK_PROJECT_NAME);
    }

    #[test]
    fn manifest_overrides_defaults() {
        let m = manifest(Some("foo"), None, Some("Apache-2.0"));
        let settings = resolve(&defaults(), Some(&m), None, &CliOverrides::default());

        assert_eq!(settings.project_name, "foo");
        assert_eq!(settings.license, "Apache-2.0");
        assert_eq!(settings.description, defaults().settings().description);
    }

    #[test]
    fn empty_manifest_values_are_ignored() {
        let m = manifest(Some(""), Some(""), None);
        let settings = resolve(&defaults(), Some(&m), None, &CliOverrides::default());

        assert_eq!(settings.project_name, "widget");
        assert_eq!(settings.description, defaults().settings().description);
    }

    #[test]
    fn config_overrides_manifest() {
        let m = manifest(Some("foo"), Some("from manifest"), Some("Apache-2.0"));
        let config = ConfigFile {
            project_name: Some("bar".to_string()),
            license: Some("GPL-3.0".to_string()),
            ..Default::default()
        };
        let settings = resolve(&defaults(), Some(&m), Some(&config), &CliOverrides::default());

        assert_eq!(settings.project_name, "bar");
        assert_eq!(settings.description, "from manifest");
        assert_eq!(settings.license, "GPL-3.0");
    }

    #[test]
    fn config_features_replace_defaults() {
        let config = ConfigFile {
            features: Some(vec!["A".to_string(), "B".to_string()]),
            ..Default::default()
        };
        let settings = resolve(&defaults(), None, Some(&config), &CliOverrides::default());

        assert_eq!(settings.features, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn config_empty_features_clear_list() {
        let config = ConfigFile {
            features: Some(vec![]),
            ..Default::default()
        };
        let settings = resolve(&defaults(), None, Some(&config), &CliOverrides::default());

        assert!(settings.features.is_empty());
    }

    #[test]
    fn cli_overrides_config() {
        let config = ConfigFile {
            lang: Some(Lang::Zh),
            out: Some(PathBuf::from("docs/README.md")),
            ..Default::default()
        };
        let cli = CliOverrides {
            lang: Some(Lang::En),
            out: Some(PathBuf::from("OUT.md")),
        };
        let settings = resolve(&defaults(), None, Some(&config), &cli);

        assert_eq!(settings.lang, Lang::En);
        assert_eq!(settings.out, PathBuf::from("OUT.md"));
    }

    #[test]
    fn config_lang_used_without_cli_flag() {
        let config = ConfigFile {
            lang: Some(Lang::Zh),
            ..Default::default()
        };
        let settings = resolve(&defaults(), None, Some(&config), &CliOverrides::default());

        assert_eq!(settings.lang, Lang::Zh);
        assert_eq!(settings.out, PathBuf::from(DEFAULT_OUT));
    }

    #[test]
    fn empty_config_project_name_passes_through() {
        let config = ConfigFile {
            project_name: Some(String::new()),
            ..Default::default()
        };
        let settings = resolve(&defaults(), None, Some(&config), &CliOverrides::default());

        assert_eq!(settings.project_name, "");
    }
}
