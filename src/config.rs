use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::EndDatePolicy;
use crate::consts::{END_DATE_ID, START_DATE_ID};

/// Which controls receive the defaults and how the end date is chosen.
///
/// Every key is optional in the TOML form:
///
/// ```toml
/// policy = "day-of-year"
/// start_control = "from"
/// end_control = "to"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitializerConfig {
    pub policy:        EndDatePolicy,
    pub start_control: String,
    pub end_control:   String,
}

/// Error type for loading an [`InitializerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Default for InitializerConfig {
    fn default() -> Self {
        Self {
            policy:        EndDatePolicy::default(),
            start_control: START_DATE_ID.to_owned(),
            end_control:   END_DATE_ID.to_owned(),
        }
    }
}

impl InitializerConfig {
    #[must_use]
    pub fn with_policy(mut self, policy: EndDatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// # Errors
    /// Returns `ConfigError::Parse` on malformed TOML, unknown keys or an unknown policy.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// # Errors
    /// Returns `ConfigError::Read` if the file cannot be read, or `ConfigError::Parse`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), policy = %config.policy, "Loaded initializer config");
        Ok(config)
    }
}
