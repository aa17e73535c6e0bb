//! cli
//!
//! Command-line interface layer for ReadmeCraft.
//!
//! # Responsibilities
//!
//! - Define command-line arguments
//! - Build the run [`Context`] and pick a collector
//! - Delegate to the command handlers in [`commands`]

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::resolve::CliOverrides;
use crate::ui::output::Verbosity;
use crate::ui::prompts;

/// Per-invocation execution context.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override (`--cwd`)
    pub cwd: Option<PathBuf>,
    /// Debug output enabled
    pub debug: bool,
    /// Quiet mode
    pub quiet: bool,
    /// Prompts enabled
    pub interactive: bool,
}

impl Context {
    /// Output verbosity for this run.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Absolute working directory.
    ///
    /// An explicit `--cwd` is canonicalized so that the default project
    /// name is its real base name even for inputs like `.` or `..`.
    pub fn working_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(dir) => dir
                .canonicalize()
                .with_context(|| format!("Failed to resolve working directory '{}'", dir.display())),
            None => std::env::current_dir().context("Failed to determine current directory"),
        }
    }
}

/// Run the CLI application with parsed arguments.
///
/// This is the main entry point called from `main.rs`.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        return commands::completion(shell);
    }

    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        interactive: cli.interactive(),
    };

    let options = commands::GenerateOptions {
        force: cli.force,
        config: cli.config.clone(),
        overrides: CliOverrides {
            lang: cli.lang(),
            out: cli.out.clone(),
        },
    };

    let mut collector = prompts::collector(ctx.interactive);
    commands::generate(&ctx, &options, collector.as_mut())?;
    Ok(())
}
