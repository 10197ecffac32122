use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building, resolving or planning a module
#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("Invalid module argument '{token}': {reason}")]
    InvalidArgument { token: String, reason: String },

    #[error("Invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: String },

    #[error("Invalid platform '{platform}': {reason}")]
    InvalidPlatform { platform: String, reason: String },

    #[error("Module not found: {name} for platform {platform} (searched: {searched:?})")]
    ModuleNotFound {
        name: String,
        platform: String,
        searched: Vec<PathBuf>,
    },

    #[error("Failed to check {path}: {source}")]
    ResolveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration has not been initialized")]
    ConfigurationNotInitialized,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ModuleError {
    pub(crate) fn invalid_argument(token: &str, reason: impl Into<String>) -> Self {
        ModuleError::InvalidArgument {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}
