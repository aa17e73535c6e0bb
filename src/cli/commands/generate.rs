//! generate command - Resolve settings, collect answers, write the README

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::config::{read_config, resolve_config_path};
use crate::core::manifest::read_manifest;
use crate::core::resolve::{resolve, CliOverrides, Defaults};
use crate::core::write::safe_write;
use crate::ui::output;
use crate::ui::prompts::{Collector, PROMPTED_FIELDS};
use crate::ui::readme::generate_readme;

/// Options for a generate run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Overwrite an existing output file
    pub force: bool,
    /// Config file path, relative to the working directory
    pub config: Option<PathBuf>,
    /// Language and output path from flags
    pub overrides: CliOverrides,
}

/// Generate the README.
///
/// Returns the absolute path of the written file.
pub fn generate(
    ctx: &Context,
    options: &GenerateOptions,
    collector: &mut dyn Collector,
) -> Result<PathBuf> {
    let verbosity = ctx.verbosity();
    let cwd = ctx.working_dir()?;
    output::debug(format!("working directory: {}", cwd.display()), verbosity);

    let manifest = read_manifest(&cwd);
    match &manifest {
        Some(info) => output::debug(format!("using metadata from {}", info.source), verbosity),
        None => output::debug("no usable manifest found", verbosity),
    }

    let config = read_config(options.config.as_deref(), &cwd)?;
    if let Some(path) = &options.config {
        output::debug(
            format!("using config file {}", resolve_config_path(path, &cwd).display()),
            verbosity,
        );
    }

    let defaults = Defaults::for_dir(&cwd);
    let resolved = resolve(&defaults, manifest.as_ref(), config.as_ref(), &options.overrides);
    if let Ok(json) = serde_json::to_string(&resolved) {
        output::debug(format!("resolved settings: {}", json), verbosity);
    }

    let settings = collector
        .collect(&PROMPTED_FIELDS, &resolved)
        .context("Failed to collect project details")?;

    if settings.project_name.trim().is_empty() {
        output::warn("project name is empty; the README title will be blank", verbosity);
    }

    let readme = generate_readme(&settings);
    let out_path = cwd.join(&settings.out);
    safe_write(&out_path, &readme, options.force)?;

    output::success(
        format!("README generated: {}", out_path.display()),
        verbosity,
    );
    output::print(
        format!(
            "   Mode: {} | Language: {}",
            if ctx.interactive { "interactive" } else { "no-prompt" },
            settings.lang.label()
        ),
        verbosity,
    );

    Ok(out_path)
}
