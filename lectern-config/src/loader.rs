//! Config resolution.
//!
//! Evaluation order mirrors the rest of the platform tooling:
//! 1) `$LECTERN_CONFIG_PATH` (TOML or JSON file),
//! 2) `$LECTERN_CONFIG_JSON` (inline JSON),
//! 3) defaults if neither is set.

use anyhow::Context;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::models::Config;

/// Source that produced the effective configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl Config {
    /// Load configuration overrides using environment variables.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        if let Ok(path_str) = env::var("LECTERN_CONFIG_PATH")
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var("LECTERN_CONFIG_JSON")
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .context("failed to parse LECTERN_CONFIG_JSON")?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    /// Load configuration from a TOML or JSON file, picked by extension.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| {
            format!("failed to read config file {}", path.display())
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::parse_json(&raw).with_context(|| {
                format!("failed to parse JSON config {}", path.display())
            })
        } else {
            Self::parse_toml(&raw).with_context(|| {
                format!("failed to parse TOML config {}", path.display())
            })
        }
    }

    fn parse_json(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    fn parse_toml(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
