//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Interactive and no-prompt settings collection
//! - [`output`] - Console output and verbosity
//! - [`readme`] - README rendering
//!
//! # Design
//!
//! All console output and prompting goes through this module so that
//! quiet and no-prompt modes are honored consistently.

pub mod output;
pub mod prompts;
pub mod readme;
