//! Maps a module to the ordered actions the execution engine must run

use crate::config::{ConfigError, ConfigStore, DEFAULT_PIPELINE};
use crate::modules::error::ModuleError;
use crate::modules::module::Module;
use std::fmt;
use tracing::debug;

/// Module type used to select an action pipeline.
///
/// Types without a configured pipeline fall back to the default one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModuleType {
    Default,
    Copy,
    Template,
    Named(String),
}

impl ModuleType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            DEFAULT_PIPELINE => ModuleType::Default,
            "copy" => ModuleType::Copy,
            "template" => ModuleType::Template,
            other => ModuleType::Named(other.to_string()),
        }
    }

    /// Key of this type's pipeline in the configuration.
    pub fn config_key(&self) -> &str {
        match self {
            ModuleType::Default => DEFAULT_PIPELINE,
            ModuleType::Copy => "copy",
            ModuleType::Template => "template",
            ModuleType::Named(name) => name,
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// Produces execution orders from the configured pipelines.
///
/// Actions come back exactly as configured: no reordering, deduplication or
/// skipping. Running them, and aborting on the first failure, is up to the
/// execution engine.
pub struct ExecutionPlanner<'a> {
    config: &'a ConfigStore,
}

impl<'a> ExecutionPlanner<'a> {
    pub fn new(config: &'a ConfigStore) -> Self {
        Self { config }
    }

    pub fn execution_order(&self, module: &Module) -> Result<Vec<String>, ModuleError> {
        let config = self.config.get()?;
        let module_type = module.module_type();

        let actions = match config.pipeline(module_type.config_key()) {
            Some(actions) => actions,
            None => config
                .default_pipeline()
                .ok_or_else(|| ConfigError::MissingDefaultPipeline {
                    key: DEFAULT_PIPELINE.to_string(),
                })?,
        };

        debug!(
            module = module.name(),
            %module_type,
            actions = ?actions,
            "planned execution order"
        );
        Ok(actions.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DispatchConfig;

    #[test]
    fn test_type_tags_round_trip() {
        for tag in ["default", "copy", "template", "shell"] {
            assert_eq!(ModuleType::from_tag(tag).config_key(), tag);
        }
    }

    #[test]
    fn test_unknown_type_uses_default_pipeline() {
        let store = ConfigStore::with_config(DispatchConfig::default()).unwrap();
        let planner = ExecutionPlanner::new(&store);

        let module = Module::new("apt", "name=vim").unwrap();
        assert_eq!(planner.execution_order(&module).unwrap(), ["exec_module"]);
    }

    #[test]
    fn test_named_type_with_custom_pipeline() {
        let mut config = DispatchConfig::default();
        config.exec_order.insert(
            "fetch".to_string(),
            vec!["stage".to_string(), "exec_module".to_string(), "stage".to_string()],
        );
        let store = ConfigStore::with_config(config).unwrap();
        let planner = ExecutionPlanner::new(&store);

        let module = Module::new("fetch", "").unwrap();
        assert_eq!(
            planner.execution_order(&module).unwrap(),
            ["stage", "exec_module", "stage"]
        );
    }

    #[test]
    fn test_requires_initialized_config() {
        let store = ConfigStore::new();
        let planner = ExecutionPlanner::new(&store);
        let module = Module::new("shell", "").unwrap();

        assert!(matches!(
            planner.execution_order(&module),
            Err(ModuleError::ConfigurationNotInitialized)
        ));
    }
}
