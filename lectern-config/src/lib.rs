//! Shared configuration library for Lectern.
//!
//! This crate centralizes config loading and validation for the watch
//! tracker and its reporting client so every embedder resolves policy the
//! same way: explicit file, environment override, or defaults, followed by
//! guard-rail validation.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::ConfigSource;
pub use models::{ApiSettings, Config};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
