//! ui::prompts
//!
//! Collection of settings from the user.
//!
//! # Design
//!
//! Collection is a capability behind the [`Collector`] trait so the command
//! layer does not care whether a human is answering:
//! - [`NoPrompt`] returns the resolved defaults unchanged
//! - [`Interactive`] asks for each field in order, offering the resolved
//!   value as the default answer
//!
//! Language and output path are never prompted for; they come from flags or
//! the config file.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use thiserror::Error;

use crate::core::types::Settings;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled: input closed")]
    Cancelled,

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::IoError(e.to_string())
    }
}

/// A settings field that can be collected from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProjectName,
    Description,
    Features,
    Install,
    Usage,
    License,
}

/// Fields prompted for, in prompt order.
pub const PROMPTED_FIELDS: [Field; 6] = [
    Field::ProjectName,
    Field::Description,
    Field::Features,
    Field::Install,
    Field::Usage,
    Field::License,
];

impl Field {
    /// Prompt label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::ProjectName => "Project name",
            Field::Description => "Short description",
            Field::Features => "Key features (comma separated)",
            Field::Install => "Install command",
            Field::Usage => "Usage example",
            Field::License => "License",
        }
    }
}

/// Something that turns resolved defaults into final settings.
pub trait Collector {
    /// Collect `fields`, starting from `defaults`.
    ///
    /// Fields not listed keep their default value.
    fn collect(&mut self, fields: &[Field], defaults: &Settings) -> Result<Settings, PromptError>;
}

/// Select the collector for this run.
pub fn collector(interactive: bool) -> Box<dyn Collector> {
    if interactive {
        Box::new(Interactive::stdio())
    } else {
        Box::new(NoPrompt)
    }
}

/// Passthrough collector for `--no-prompt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl Collector for NoPrompt {
    fn collect(&mut self, _fields: &[Field], defaults: &Settings) -> Result<Settings, PromptError> {
        Ok(defaults.clone())
    }
}

/// Line-oriented prompts over any reader/writer pair.
pub struct Interactive<R, W> {
    input: R,
    output: W,
}

impl Interactive<StdinLock<'static>, Stdout> {
    /// Prompt on the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Interactive<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask one question. An empty answer takes `default`.
    fn ask(&mut self, label: &str, default: &str) -> Result<String, PromptError> {
        if default.is_empty() {
            write!(self.output, "{}: ", label)?;
        } else {
            write!(self.output, "{} ({}): ", label, default)?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Cancelled);
        }

        let answer = line.trim();
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer.to_string())
        }
    }

    fn ask_required(&mut self, label: &str, default: &str) -> Result<String, PromptError> {
        loop {
            let answer = self.ask(label, default)?;
            if !answer.trim().is_empty() {
                return Ok(answer);
            }
            writeln!(self.output, "{} is required.", label)?;
        }
    }
}

impl<R: BufRead, W: Write> Collector for Interactive<R, W> {
    fn collect(&mut self, fields: &[Field], defaults: &Settings) -> Result<Settings, PromptError> {
        let mut answers = defaults.clone();

        for field in fields {
            let label = field.label();
            match field {
                Field::ProjectName => {
                    answers.project_name = self.ask_required(label, &defaults.project_name)?;
                }
                Field::Description => {
                    answers.description = self.ask(label, &defaults.description)?;
                }
                Field::Features => {
                    let raw = self.ask(label, &defaults.features.join(", "))?;
                    answers.features = split_features(&raw);
                }
                Field::Install => {
                    answers.install = self.ask(label, &defaults.install)?;
                }
                Field::Usage => {
                    answers.usage = self.ask(label, &defaults.usage)?;
                }
                Field::License => {
                    answers.license = self.ask(label, &defaults.license)?;
                }
            }
        }

        Ok(answers)
    }
}

/// Split a comma-separated answer into trimmed, non-empty entries.
pub fn split_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
