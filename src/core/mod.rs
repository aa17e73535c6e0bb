//! core
//!
//! Domain types and the settings pipeline.
//!
//! # Modules
//!
//! - [`types`] - Settings record and language enum
//! - [`manifest`] - Best-effort project manifest reading
//! - [`config`] - Strict JSON config file reading
//! - [`resolve`] - Layered settings resolution
//! - [`write`] - Refuse-to-clobber output writes
//!
//! # Invariants
//!
//! - Only [`write`] mutates the filesystem
//! - Manifest problems never fail a run; config problems always do

pub mod config;
pub mod manifest;
pub mod resolve;
pub mod types;
pub mod write;
