//! Read-only target configuration supplied by the host environment.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, Revision};

/// Target configuration loaded from a `target.toml` file.
///
/// The engine root is owned by the host environment, never discovered by
/// this crate; when it is absent, engine-relative include paths are simply
/// skipped during resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    /// Build-rules revision key.
    #[serde(default = "default_revision")]
    pub revision: String,
    /// Root directory of the engine checkout, if the host supplies one.
    #[serde(default)]
    pub engine_root: Option<PathBuf>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self { revision: default_revision(), engine_root: None }
    }
}

fn default_revision() -> String {
    Revision::Initial.key_name().to_string()
}

impl TargetConfig {
    /// Load a target config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::TargetConfigMissing(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Parse the configured revision key.
    pub fn revision(&self) -> Result<Revision, AppError> {
        Revision::from_key_name(&self.revision)
    }
}

/// The fully resolved target inputs a command runs against.
#[derive(Debug, Clone)]
pub struct TargetSelection {
    pub revision: Revision,
    pub engine_root: Option<PathBuf>,
}

impl TargetSelection {
    /// Merge a target file with command-line overrides.
    ///
    /// Flags win over file values; with neither, the initial revision and no
    /// engine root apply.
    pub fn resolve(
        target_file: Option<&Path>,
        revision_flag: Option<&str>,
        engine_root_flag: Option<PathBuf>,
    ) -> Result<Self, AppError> {
        let config = match target_file {
            Some(path) => TargetConfig::load(path)?,
            None => TargetConfig::default(),
        };

        let revision = match revision_flag {
            Some(key) => Revision::from_key_name(key)?,
            None => config.revision()?,
        };
        let engine_root = engine_root_flag.or(config.engine_root);

        Ok(Self { revision, engine_root })
    }
}
