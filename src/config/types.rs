use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Key of the pipeline used for modules without a specialised one
pub const DEFAULT_PIPELINE: &str = "default";

/// Declarative dispatch configuration, usually loaded from `dispatch.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// JSON log file; logs go to stderr when absent
    #[serde(default)]
    pub log: Option<PathBuf>,

    #[serde(default)]
    pub debug: bool,

    /// Module type -> ordered action names
    #[serde(rename = "execOrder", alias = "exec_order")]
    pub exec_order: HashMap<String, Vec<String>>,
}

impl DispatchConfig {
    pub fn pipeline(&self, module_type: &str) -> Option<&[String]> {
        self.exec_order.get(module_type).map(Vec::as_slice)
    }

    pub fn default_pipeline(&self) -> Option<&[String]> {
        self.pipeline(DEFAULT_PIPELINE)
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        let mut exec_order = HashMap::new();
        exec_order.insert(DEFAULT_PIPELINE.to_string(), vec!["exec_module".to_string()]);
        exec_order.insert(
            "copy".to_string(),
            vec!["stage".to_string(), "exec_module".to_string()],
        );
        exec_order.insert(
            "template".to_string(),
            vec![
                "process_template".to_string(),
                "stage".to_string(),
                "reset_src".to_string(),
                "exec_module".to_string(),
            ],
        );

        Self {
            log: None,
            debug: false,
            exec_order,
        }
    }
}
