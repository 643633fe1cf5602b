// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Session and logging configuration.
//!
//! ```toml
//! [session]
//! max_filters = 4            # user filters per search
//! max_invalid_attempts = 4   # consecutive bad inputs before escalating
//!
//! [logging]
//! level = "warn"
//! ```
//!
//! Resolution order: the explicit `--config` path, else the file named by
//! `JOBSIFT_CONFIG`, else built-in defaults. Keys missing from the file keep
//! their defaults. `JOBSIFT_MAX_FILTERS` and `JOBSIFT_MAX_INVALID_ATTEMPTS`
//! override the file. Page size and scoring weights are constants, not
//! configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiftError};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "JOBSIFT_CONFIG";

/// Default number of user filters per search.
pub const DEFAULT_MAX_FILTERS: u32 = 4;

/// Default number of consecutive invalid inputs tolerated per stage.
pub const DEFAULT_MAX_INVALID_ATTEMPTS: u32 = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub max_filters: u32,
    pub max_invalid_attempts: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_filters: DEFAULT_MAX_FILTERS,
            max_invalid_attempts: DEFAULT_MAX_INVALID_ATTEMPTS,
        }
    }
}

impl SessionConfig {
    fn merge(&mut self, patch: SessionPatch) {
        if let Some(value) = patch.max_filters {
            self.max_filters = value;
        }
        if let Some(value) = patch.max_invalid_attempts {
            self.max_invalid_attempts = value;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_filters < 1 {
            return Err(SiftError::config("session.max_filters must be at least 1"));
        }
        if self.max_invalid_attempts < 1 {
            return Err(SiftError::config(
                "session.max_invalid_attempts must be at least 1",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when neither `RUST_LOG` nor `-v` is given.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigPatch {
    session: Option<SessionPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SessionPatch {
    max_filters: Option<u32>,
    max_invalid_attempts: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingPatch {
    level: Option<String>,
}

impl Config {
    /// Load configuration from `explicit_path`, else `$JOBSIFT_CONFIG`, else defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
        Self::load_with(path.as_deref(), |key| std::env::var(key).ok())
    }

    /// [`Config::load`] with an explicit path and environment lookup.
    pub fn load_with<F>(path: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = path {
            config.merge_patch(Self::load_patch(path)?);
        }
        config.apply_env_overrides(env)?;
        config.session.validate()?;
        Ok(config)
    }

    /// Parse a TOML document on top of the defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let mut config = Self::default();
        config.merge_patch(toml::from_str(raw)?);
        config.session.validate()?;
        Ok(config)
    }

    fn load_patch(path: &Path) -> Result<ConfigPatch> {
        if !path.exists() {
            return Err(SiftError::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|err| SiftError::config(format!("read config {}: {err}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|err| SiftError::config(format!("parse config {}: {err}", path.display())))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.session {
            self.session.merge(patch);
        }
        if let Some(level) = patch.logging.and_then(|p| p.level) {
            self.logging.level = level;
        }
    }

    fn apply_env_overrides<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = env_u32(&env, "JOBSIFT_MAX_FILTERS")? {
            self.session.max_filters = value;
        }
        if let Some(value) = env_u32(&env, "JOBSIFT_MAX_INVALID_ATTEMPTS")? {
            self.session.max_invalid_attempts = value;
        }
        Ok(())
    }
}

fn env_u32<F>(env: &F, key: &str) -> Result<Option<u32>>
where
    F: Fn(&str) -> Option<String>,
{
    match env(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SiftError::config(format!("{key} must be a whole number, got '{raw}'"))),
    }
}
