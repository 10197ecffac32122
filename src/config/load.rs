use super::error::ConfigError;
use super::types::{DispatchConfig, DEFAULT_PIPELINE};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    /// Pick by file extension, JSON unless `.yaml`/`.yml`
    Auto,
}

impl ConfigFormat {
    fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Json,
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<DispatchConfig, ConfigError> {
    debug!(path = %path.display(), "loading dispatch configuration");

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content, ConfigFormat::detect(path))
}

pub fn parse_config(content: &str, format: ConfigFormat) -> Result<DispatchConfig, ConfigError> {
    let config: DispatchConfig = match format {
        ConfigFormat::Json | ConfigFormat::Auto => serde_json::from_str(content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
    };

    validate(&config)?;
    Ok(config)
}

pub fn validate(config: &DispatchConfig) -> Result<(), ConfigError> {
    if config.default_pipeline().is_none() {
        return Err(ConfigError::MissingDefaultPipeline {
            key: DEFAULT_PIPELINE.to_string(),
        });
    }

    for (module_type, actions) in &config.exec_order {
        if actions.is_empty() {
            return Err(ConfigError::EmptyPipeline {
                module_type: module_type.clone(),
            });
        }
        if actions.iter().any(|action| action.trim().is_empty()) {
            return Err(ConfigError::EmptyActionName {
                module_type: module_type.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "execOrder": {
            "default": ["exec_module"],
            "copy": ["stage", "exec_module"]
        }
    }"#;

    #[test]
    fn test_parse_json() {
        let config = parse_config(JSON, ConfigFormat::Json).unwrap();
        assert_eq!(config.pipeline("copy").unwrap(), ["stage", "exec_module"]);
        assert!(!config.debug);
        assert!(config.log.is_none());
    }

    #[test]
    fn test_parse_yaml_with_snake_case_key() {
        let yaml = "debug: true\nexec_order:\n  default: [exec_module]\n  template: [process_template, stage, reset_src, exec_module]\n";
        let config = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        assert!(config.debug);
        assert_eq!(config.pipeline("template").unwrap().len(), 4);
    }

    #[test]
    fn test_missing_default_pipeline() {
        let json = r#"{"execOrder": {"copy": ["stage", "exec_module"]}}"#;
        assert!(matches!(
            parse_config(json, ConfigFormat::Json),
            Err(ConfigError::MissingDefaultPipeline { .. })
        ));
    }

    #[test]
    fn test_empty_pipeline_rejected() {
        let json = r#"{"execOrder": {"default": ["exec_module"], "copy": []}}"#;
        assert!(matches!(
            parse_config(json, ConfigFormat::Json),
            Err(ConfigError::EmptyPipeline { module_type }) if module_type == "copy"
        ));

        let json = r#"{"execOrder": {"default": [" "]}}"#;
        assert!(matches!(
            parse_config(json, ConfigFormat::Json),
            Err(ConfigError::EmptyActionName { .. })
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse_config("{not json", ConfigFormat::Json),
            Err(ConfigError::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(ConfigFormat::detect(Path::new("a/conf.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::detect(Path::new("conf.YAML")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::detect(Path::new("conf.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::detect(Path::new("conf")), ConfigFormat::Json);
    }

    #[test]
    fn test_builtin_default_is_valid() {
        validate(&DispatchConfig::default()).unwrap();
    }
}
