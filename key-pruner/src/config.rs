// Pruner configuration
use ::config::{Config, Environment, File};
use error_common::{PruneError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::keys::KeySet;
use crate::pruner::{KeyPruner, DEFAULT_MAX_DEPTH};

/// Prefix for environment overrides, e.g. `KEY_PRUNER_KEYS=password,token`
pub const ENV_PREFIX: &str = "KEY_PRUNER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrunerConfig {
    /// Key names removed from every mapping
    pub keys: Vec<String>,
    /// Maximum container nesting; `null` disables the budget
    pub max_depth: Option<usize>,
}

impl Default for PrunerConfig {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl PrunerConfig {
    /// Load configuration from defaults, an optional file, then the environment.
    ///
    /// The file format follows its extension (`.toml`, `.yaml`, `.json`, ...).
    /// `KEY_PRUNER_KEYS` takes a comma-separated list and
    /// `KEY_PRUNER_MAX_DEPTH` a number.
    ///
    /// # Errors
    ///
    /// Returns [`PruneError::Config`] when the file is missing or malformed, or
    /// an override has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    /// Same as [`PrunerConfig::load`] with a custom environment prefix.
    ///
    /// # Errors
    ///
    /// Returns [`PruneError::Config`] when any source fails to load or
    /// deserialize.
    pub fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(env_prefix)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("keys"),
        );

        let config: Self = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| PruneError::config(e.to_string()))?;

        tracing::debug!(
            keys = config.keys.len(),
            max_depth = ?config.max_depth,
            source = ?path,
            "Loaded pruner configuration"
        );

        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`PruneError::Config`] for a zero depth budget or a blank key
    /// name.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == Some(0) {
            return Err(PruneError::config("max_depth must be at least 1"));
        }

        if let Some(position) = self.keys.iter().position(|key| key.trim().is_empty()) {
            return Err(PruneError::config(format!("keys[{position}] is blank")));
        }

        Ok(())
    }

    /// Validate and turn the configuration into a ready pruner.
    ///
    /// # Errors
    ///
    /// Returns [`PruneError::Config`] when validation fails.
    pub fn build(&self) -> Result<KeyPruner> {
        self.validate()?;

        let pruner = KeyPruner::new(self.keys.iter().cloned().collect::<KeySet>());
        Ok(match self.max_depth {
            Some(limit) => pruner.with_max_depth(limit),
            None => pruner.without_depth_limit(),
        })
    }
}
