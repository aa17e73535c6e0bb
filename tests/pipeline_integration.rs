//! Integration tests for the generate pipeline.
//!
//! These tests drive `commands::generate` directly with an explicit
//! context and collector, so no terminal or subprocess is involved.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use readmecraft::cli::{commands, Context};
use readmecraft::core::config::ConfigError;
use readmecraft::core::resolve::CliOverrides;
use readmecraft::core::types::Lang;
use readmecraft::core::write::WriteError;
use readmecraft::ui::prompts::{Interactive, NoPrompt};

// =============================================================================
// Test Fixtures
// =============================================================================

/// A scratch project directory.
struct TestProject {
    dir: TempDir,
}

impl TestProject {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, name: &str, contents: &str) {
        fs::write(self.path().join(name), contents).expect("failed to write fixture");
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(name)).expect("failed to read output")
    }

    /// Quiet, no-prompt context rooted at the project.
    fn context(&self) -> Context {
        Context {
            cwd: Some(self.path().to_path_buf()),
            debug: false,
            quiet: true,
            interactive: false,
        }
    }

    fn dir_name(&self) -> String {
        self.path()
            .canonicalize()
            .unwrap()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned()
    }
}

fn options(force: bool, config: Option<&str>, overrides: CliOverrides) -> commands::GenerateOptions {
    commands::GenerateOptions {
        force,
        config: config.map(PathBuf::from),
        overrides,
    }
}

// =============================================================================
// Pipeline
// =============================================================================

#[test]
fn returns_absolute_output_path() {
    let project = TestProject::new();

    let path = commands::generate(
        &project.context(),
        &options(false, None, CliOverrides::default()),
        &mut NoPrompt,
    )
    .unwrap();

    assert!(path.is_absolute());
    assert!(path.ends_with("README.md"));
    assert!(project.read("README.md").starts_with(&format!("# {}\n", project.dir_name())));
}

#[test]
fn all_layers_apply_in_order() {
    let project = TestProject::new();
    project.write(
        "package.json",
        r#"{ "name": "from-manifest", "description": "manifest description", "license": "ISC" }"#,
    );
    project.write(
        "readme.json",
        r#"{ "license": "GPL-3.0", "install": "make install", "lang": "zh", "out": "config.md" }"#,
    );
    let overrides = CliOverrides {
        lang: None,
        out: Some(PathBuf::from("cli.md")),
    };

    commands::generate(
        &project.context(),
        &options(false, Some("readme.json"), overrides),
        &mut NoPrompt,
    )
    .unwrap();

    assert!(!project.path().join("config.md").exists());
    let readme = project.read("cli.md");
    assert!(readme.starts_with("# from-manifest\n\nmanifest description\n"));
    assert!(readme.contains("make install"));
    assert!(readme.contains("GPL-3.0"));
    assert!(!readme.contains("ISC"));
    assert!(readme.contains("## 安装"));
}

#[test]
fn generation_is_idempotent() {
    let project = TestProject::new();
    project.write("package.json", r#"{ "name": "stable" }"#);
    let opts = options(true, None, CliOverrides::default());

    commands::generate(&project.context(), &opts, &mut NoPrompt).unwrap();
    let first = fs::read(project.path().join("README.md")).unwrap();
    commands::generate(&project.context(), &opts, &mut NoPrompt).unwrap();
    let second = fs::read(project.path().join("README.md")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn existing_output_is_already_exists_error() {
    let project = TestProject::new();
    project.write("README.md", "keep me");

    let err = commands::generate(
        &project.context(),
        &options(false, None, CliOverrides::default()),
        &mut NoPrompt,
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<WriteError>(),
        Some(WriteError::AlreadyExists { .. })
    ));
    assert_eq!(project.read("README.md"), "keep me");
}

#[test]
fn config_errors_surface_typed() {
    let project = TestProject::new();
    project.write("readme.json", r#"{ "features": "A, B" }"#);

    let err = commands::generate(
        &project.context(),
        &options(false, Some("readme.json"), CliOverrides::default()),
        &mut NoPrompt,
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::SchemaError { .. })
    ));
    assert!(!project.path().join("README.md").exists());
}

#[test]
fn interactive_collector_sees_resolved_defaults() {
    let project = TestProject::new();
    project.write("package.json", r#"{ "name": "foo" }"#);
    let mut prompts = Vec::new();
    let mut collector = Interactive::new("\n\nX,Y\n\n\n\n".as_bytes(), &mut prompts);
    let ctx = Context {
        interactive: true,
        ..project.context()
    };

    commands::generate(
        &ctx,
        &options(false, None, CliOverrides { lang: Some(Lang::En), out: None }),
        &mut collector,
    )
    .unwrap();

    let prompts = String::from_utf8(prompts).unwrap();
    assert!(prompts.contains("Project name (foo): "));
    assert!(prompts.contains("License (MIT): "));

    let readme = project.read("README.md");
    assert!(readme.starts_with("# foo\n"));
    assert!(readme.contains("## Features\n\n- X\n- Y\n"));
}

#[test]
fn missing_cwd_fails() {
    let project = TestProject::new();
    let ctx = Context {
        cwd: Some(project.path().join("does-not-exist")),
        ..project.context()
    };

    let result = commands::generate(
        &ctx,
        &options(false, None, CliOverrides::default()),
        &mut NoPrompt,
    );

    assert!(result.is_err());
}
