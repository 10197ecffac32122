use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON configuration: {reason}")]
    InvalidJson { reason: String },

    #[error("Invalid YAML configuration: {reason}")]
    InvalidYaml { reason: String },

    #[error("Configuration is missing the '{key}' execution order")]
    MissingDefaultPipeline { key: String },

    #[error("Execution order for '{module_type}' is empty")]
    EmptyPipeline { module_type: String },

    #[error("Execution order for '{module_type}' contains an empty action name")]
    EmptyActionName { module_type: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::InvalidJson {
            reason: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::InvalidYaml {
            reason: err.to_string(),
        }
    }
}
