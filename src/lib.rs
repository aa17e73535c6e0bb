//! ReadmeCraft - Generate a clean, structured README from project metadata
//!
//! ReadmeCraft reads what it can about a project (its manifest, an optional
//! JSON config file, command-line flags), optionally asks the user to
//! confirm or change each value, and writes a README from a fixed template
//! in English or Chinese.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, runs the pipeline)
//! - [`core`] - Settings types, manifest/config readers, resolution, safe write
//! - [`ui`] - Prompts, console output and README rendering
//!
//! # Correctness Invariants
//!
//! 1. Settings resolve in a fixed order: defaults, manifest, config file, flags
//! 2. A config file that is named but broken always fails the run
//! 3. An existing output file is never replaced without `--force`
//! 4. Rendering is a pure function of the resolved settings

pub mod cli;
pub mod core;
pub mod ui;
