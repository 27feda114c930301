use serde::Deserialize;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for the stock collaborator.
///
/// Only reaches a collaborator built with `JustAnother::with_config`.
/// `Collaborator::create` takes no inputs, so collaborators created on behalf
/// of an entry always use the defaults.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LibraryConfig {
    pub collaborator: CollaboratorConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CollaboratorConfig {
    /// Name attached to the collaborator's trace events.
    pub label: String,
}

impl Default for CollaboratorConfig {
    fn default() -> Self {
        Self {
            label: "just-another".to_string(),
        }
    }
}

impl LibraryConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load from `path`, falling back to defaults when the file is missing or
    /// malformed. Only a malformed file is reported.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Parse(e)) => {
                warn!(path = %path.display(), error = %e, "failed to parse config");
                Self::default()
            }
            Err(ConfigError::Io(_)) => Self::default(),
        }
    }
}
