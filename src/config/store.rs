use super::load::{load_from_path, parse_config, validate, ConfigFormat};
use super::types::DispatchConfig;
use crate::modules::error::ModuleError;
use std::path::Path;
use std::sync::{Arc, RwLock};
use tracing::info;

/// Holds the dispatch configuration once it has been loaded.
///
/// Starts empty; every `init*` call replaces whatever was loaded before.
/// Readers get a shared handle, so a store can be shared by reference across
/// worker threads after startup.
#[derive(Debug, Default)]
pub struct ConfigStore {
    current: RwLock<Option<Arc<DispatchConfig>>>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that is already initialised with `config`.
    pub fn with_config(config: DispatchConfig) -> Result<Self, ModuleError> {
        let store = Self::new();
        store.init(config)?;
        Ok(store)
    }

    pub fn init(&self, config: DispatchConfig) -> Result<(), ModuleError> {
        validate(&config)?;
        info!(
            module_types = config.exec_order.len(),
            "dispatch configuration initialized"
        );

        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = Some(Arc::new(config));
        Ok(())
    }

    pub fn init_from_path(&self, path: &Path) -> Result<(), ModuleError> {
        let config = load_from_path(path)?;
        self.init(config)
    }

    pub fn init_from_str(&self, content: &str, format: ConfigFormat) -> Result<(), ModuleError> {
        let config = parse_config(content, format)?;
        self.init(config)
    }

    pub fn get(&self) -> Result<Arc<DispatchConfig>, ModuleError> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
            .ok_or(ModuleError::ConfigurationNotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.get().is_ok()
    }
}
