use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dataset;
use crate::directory::DirectoryConfig;
use crate::models::{Category, IntentRule};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed reading assistant config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid assistant config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid assistant config: {0}")]
    Invalid(String),
}

/// Rule and directory tables handed to the resolver at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub rules: Vec<IntentRule>,
    pub directory: DirectoryConfig,
    #[serde(default = "dataset::default_greetings")]
    pub greetings: Vec<String>,
    #[serde(default = "dataset::default_greeting_response")]
    pub greeting_response: String,
    #[serde(default = "dataset::default_fallback_response")]
    pub fallback_response: String,
}

impl AssistantConfig {
    pub fn campus_default() -> Self {
        Self {
            rules: dataset::campus_rules(),
            directory: dataset::campus_directory(),
            greetings: dataset::default_greetings(),
            greeting_response: dataset::default_greeting_response(),
            fallback_response: dataset::default_fallback_response(),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.greeting_response.trim().is_empty() {
            return Err(ConfigError::Invalid("greeting_response is empty".to_string()));
        }
        if self.fallback_response.trim().is_empty() {
            return Err(ConfigError::Invalid("fallback_response is empty".to_string()));
        }

        for rule in &self.rules {
            if rule.response.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "rule `{}` has an empty response",
                    rule.id
                )));
            }
            if rule.triggers.iter().all(|trigger| trigger.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "rule `{}` has no trigger keywords",
                    rule.id
                )));
            }
        }

        for category in Category::ALL {
            if let Some(entry) = self
                .directory
                .entries(category)
                .iter()
                .find(|entry| entry.name.trim().is_empty())
            {
                return Err(ConfigError::Invalid(format!(
                    "{} record with role `{}` has no name",
                    category.as_code(),
                    entry.role
                )));
            }
        }

        Ok(())
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self::campus_default()
    }
}
