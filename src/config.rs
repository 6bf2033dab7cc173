//! User configuration loaded from TOML.
//!
//! Everything is optional: a missing file, or a file that only sets a
//! few keys, falls back to the built-in defaults. Unknown keys are an
//! error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::display::Presentation;
use crate::form::{FormField, TriStateForm};
use crate::types::{IconSet, ParsePolicy, StateOverrides};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Label overrides merged over Unknown / Yes / No.
    pub labels: StateOverrides,
    /// Style token overrides merged over the default utility classes.
    pub styles: StateOverrides,
    /// Icon set prefix: `pi`, `fa`, or any custom prefix.
    pub icon_set: IconSet,
    /// How the `parse` command treats unrecognized text.
    pub parse_policy: ParsePolicy,
    /// Fields shown by the interactive form when none are given.
    pub fields: Vec<FieldSpec>,
}

/// One form field in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    pub key: String,
    /// Defaults to `"<key>?"`.
    #[serde(default)]
    pub label: Option<String>,
}

impl FieldSpec {
    fn new(key: &str, label: &str) -> Self {
        FieldSpec {
            key: key.to_string(),
            label: Some(label.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            labels: StateOverrides::default(),
            styles: StateOverrides::default(),
            icon_set: IconSet::default(),
            parse_policy: ParsePolicy::default(),
            fields: vec![
                FieldSpec::new("hasFusing", "Has Fusing?"),
                FieldSpec::new("isVerified", "Is Verified?"),
                FieldSpec::new("hasWarranty", "Has Warranty?"),
                FieldSpec::new("isActive", "Is Active?"),
                FieldSpec::new("isPublic", "Is Public?"),
            ],
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `<config_dir>/tri-state/config.toml` via `dirs::config_dir()`,
    /// falling back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tri-state").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!(path = %path.display(), fields = config.fields.len(), "loaded config");
        Ok(config)
    }

    /// Checks that field keys are non-empty and unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, field) in self.fields.iter().enumerate() {
            if field.key.trim().is_empty() {
                return Err(ConfigError::Validation {
                    message: format!("Field #{} has an empty key", i + 1),
                });
            }
            if self.fields[..i].iter().any(|f| f.key == field.key) {
                return Err(ConfigError::Validation {
                    message: format!("Field key '{}' is defined more than once", field.key),
                });
            }
        }
        Ok(())
    }

    /// Presentation overrides for the mapping functions.
    pub fn presentation(&self) -> Presentation {
        Presentation {
            labels: self.labels.clone(),
            styles: self.styles.clone(),
            icon_set: self.icon_set.clone(),
        }
    }

    /// A fresh form built from the configured fields.
    pub fn form(&self) -> TriStateForm {
        TriStateForm::new(
            self.fields
                .iter()
                .map(|spec| {
                    let label = spec
                        .label
                        .clone()
                        .unwrap_or_else(|| format!("{}?", spec.key));
                    FormField::new(spec.key.clone(), label)
                })
                .collect(),
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
