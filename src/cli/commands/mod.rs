//! cli::commands
//!
//! Command handlers.
//!
//! # Architecture
//!
//! Each handler:
//! 1. Reads its inputs through [`crate::core`]
//! 2. Talks to the user only through [`crate::ui`]
//! 3. Returns `anyhow::Result` so `main` can report any failure uniformly
//!
//! Handlers take their collaborators (context, collector) as arguments so
//! tests can drive them without a terminal.

mod completion;
mod generate;

pub use completion::{completion, write_completion};
pub use generate::{generate, GenerateOptions};
