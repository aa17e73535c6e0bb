//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--force` / `-f`: Overwrite an existing output file
//! - `--no-prompt`: Use resolved defaults without asking
//! - `--out <path>`: Output path (overrides the config file)
//! - `--config <path>`: JSON config file
//! - `--zh` / `--en`: Output language (overrides the config file)
//! - `--cwd <path>`: Run as if started in that directory
//! - `--quiet` / `-q`: Errors only
//! - `--debug`: Show where each setting came from
//! - `--completions <shell>`: Print a completion script and exit

use clap::Parser;
use std::path::PathBuf;

use crate::core::types::Lang;

/// ReadmeCraft - Generate a clean, structured README from project metadata
#[derive(Parser, Debug)]
#[command(name = "readmecraft")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
PRECEDENCE (highest first):
    --zh/--en and --out flags
    --config file
    package.json (or Cargo.toml)
    built-in defaults

EXAMPLES:
    # Answer a few questions, write README.md
    readmecraft

    # Non-interactive, Chinese template, custom path
    readmecraft --no-prompt --zh --out docs/README.zh.md

    # Settings from a file, replacing an existing README
    readmecraft --config readme.json --no-prompt --force")]
pub struct Cli {
    /// Overwrite the output file if it already exists
    #[arg(short, long)]
    pub force: bool,

    /// Skip prompts and use the resolved defaults
    #[arg(long)]
    pub no_prompt: bool,

    /// Output file path, relative to the working directory
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// JSON config file, relative to the working directory
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Generate the Chinese template
    #[arg(long, conflicts_with = "en")]
    pub zh: bool,

    /// Generate the English template
    #[arg(long)]
    pub en: bool,

    /// Run as if readmecraft was started in this directory
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Print resolution details to stderr
    #[arg(long)]
    pub debug: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Usage errors are returned instead of exiting so the caller controls
    /// the exit code.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Parser::try_parse()
    }

    /// Language requested on the command line, if any.
    pub fn lang(&self) -> Option<Lang> {
        if self.zh {
            Some(Lang::Zh)
        } else if self.en {
            Some(Lang::En)
        } else {
            None
        }
    }

    /// Whether prompts are enabled.
    pub fn interactive(&self) -> bool {
        !self.no_prompt
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
