//! core::types
//!
//! Strong types for the README domain.
//!
//! # Types
//!
//! - [`Lang`] - Output language of the generated document
//! - [`Settings`] - Fully resolved record handed to the generator
//!
//! # Examples
//!
//! ```
//! use readmecraft::core::types::Lang;
//!
//! let lang: Lang = "zh".parse().unwrap();
//! assert_eq!(lang, Lang::Zh);
//! assert_eq!(lang.label(), "ZH");
//!
//! assert!("fr".parse::<Lang>().is_err());
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid language '{0}', must be \"en\" or \"zh\"")]
    InvalidLang(String),
}

/// Output language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// English
    #[default]
    En,
    /// Simplified Chinese
    Zh,
}

impl Lang {
    /// Lowercase code as used in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }

    /// Uppercase label for console output.
    pub fn label(&self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Zh => "ZH",
        }
    }
}

impl FromStr for Lang {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Lang::En),
            "zh" => Ok(Lang::Zh),
            other => Err(TypeError::InvalidLang(other.to_string())),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fully resolved settings record.
///
/// Built once per invocation by [`crate::core::resolve::resolve`], optionally
/// replaced wholesale by the interactive collector, then rendered. Nothing
/// mutates a `Settings` after it leaves the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Project name, used as the document title
    pub project_name: String,
    /// One-line description
    pub description: String,
    /// Ordered feature list
    pub features: Vec<String>,
    /// Install command
    pub install: String,
    /// Usage example
    pub usage: String,
    /// License identifier
    pub license: String,
    /// Output language
    pub lang: Lang,
    /// Output path, relative to the working directory unless absolute
    pub out: PathBuf,
}
