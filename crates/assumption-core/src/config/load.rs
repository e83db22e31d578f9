//! Configuration loading from files and environment (Immutable functional pattern)
//!
//! This module handles loading configuration from:
//! 1. Built-in defaults
//! 2. Global config: <config dir>/assumption/config.toml
//! 3. Project config: .assumption/config.toml
//! 4. Environment variables: ASSUMPTION_*
//!
//! All operations return new instances rather than mutating in place.

use std::path::{Path, PathBuf};

use super::types::{CodecConfig, Config, OutputConfig, PartialConfig};
use crate::{Error, OutputFormat, Result};

/// Config files to layer on top of the defaults, lowest precedence first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    pub global: Option<PathBuf>,
    pub project: Option<PathBuf>,
}

impl ConfigSources {
    /// The standard global and project locations.
    ///
    /// # Errors
    ///
    /// Returns error if the current directory cannot be determined.
    pub fn standard() -> Result<Self> {
        Ok(Self {
            global: global_config_path(),
            project: Some(project_config_path()?),
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

/// Load configuration from the standard locations and the environment.
///
/// # Errors
///
/// Returns error if:
/// - A config file is malformed TOML or has unknown keys
/// - An `ASSUMPTION_*` variable cannot be parsed
/// - The merged values fail validation
pub fn load_config() -> Result<Config> {
    load_config_from(&ConfigSources::standard()?)
}

/// Load configuration from explicit sources and the environment.
///
/// Missing files are skipped.
pub fn load_config_from(sources: &ConfigSources) -> Result<Config> {
    let config = [sources.global.as_deref(), sources.project.as_deref()]
        .into_iter()
        .flatten()
        .filter(|path| path.exists())
        .try_fold(Config::default(), |config, path| {
            tracing::debug!(path = %path.display(), "loading config file");
            load_toml_file(path).map(|partial| config.merge(partial))
        })?;

    let config = config.apply_env_vars()?;
    config.validate()?;
    Ok(config)
}

// ═══════════════════════════════════════════════════════════════════════════
// PATH HELPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Get path to global config file
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "assumption")
        .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
}

/// Get path to project config file
///
/// # Errors
///
/// Returns error if current directory cannot be determined
pub fn project_config_path() -> Result<PathBuf> {
    std::env::current_dir()
        .map(|dir| dir.join(".assumption/config.toml"))
        .map_err(|e| Error::io_error(format!("Failed to get current directory: {e}")))
}

/// Load a TOML file into a partial config
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read
/// - Path is a directory instead of a file
/// - TOML is malformed or has unknown keys
pub fn load_toml_file(path: &Path) -> Result<PartialConfig> {
    if path.is_dir() {
        return Err(Error::io_error(format!(
            "Config path is a directory, not a file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::io_error(format!("Failed to read config file {}: {e}", path.display()))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::invalid_config(format!(
            "Failed to parse config file {}: {e}",
            path.display()
        ))
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// MERGE / ENV / VALIDATE (Immutable pattern)
// ═══════════════════════════════════════════════════════════════════════════

impl Config {
    /// Layer a partial config on top of this one; keys set in `other` win.
    pub fn merge(self, other: PartialConfig) -> Self {
        Self {
            codec: CodecConfig {
                strict_keys: other.codec.strict_keys.unwrap_or(self.codec.strict_keys),
                max_document_bytes: other
                    .codec
                    .max_document_bytes
                    .unwrap_or(self.codec.max_document_bytes),
            },
            output: OutputConfig {
                format: other.output.format.unwrap_or(self.output.format),
            },
        }
    }

    /// Apply `ASSUMPTION_*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set to an unparseable value.
    pub fn apply_env_vars(mut self) -> Result<Self> {
        // ASSUMPTION_STRICT_KEYS
        if let Ok(value) = std::env::var("ASSUMPTION_STRICT_KEYS") {
            self.codec.strict_keys = value.parse().map_err(|e| {
                Error::invalid_config(format!("Invalid ASSUMPTION_STRICT_KEYS value: {e}"))
            })?;
        }

        // ASSUMPTION_MAX_DOCUMENT_BYTES
        if let Ok(value) = std::env::var("ASSUMPTION_MAX_DOCUMENT_BYTES") {
            self.codec.max_document_bytes = value.parse().map_err(|e| {
                Error::invalid_config(format!("Invalid ASSUMPTION_MAX_DOCUMENT_BYTES value: {e}"))
            })?;
        }

        // ASSUMPTION_OUTPUT_FORMAT
        if let Ok(value) = std::env::var("ASSUMPTION_OUTPUT_FORMAT") {
            self.output.format = value.parse::<OutputFormat>().map_err(|_| {
                Error::invalid_config(format!(
                    "Invalid ASSUMPTION_OUTPUT_FORMAT value: {value}. Must be one of: yaml, json"
                ))
            })?;
        }

        Ok(self)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns error if `codec.max_document_bytes` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.codec.max_document_bytes == 0 {
            return Err(Error::invalid_config(
                "codec.max_document_bytes must be greater than zero",
            ));
        }
        Ok(())
    }
}
