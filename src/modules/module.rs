use crate::modules::args::{parse_args, ModuleParams};
use crate::modules::error::ModuleError;
use crate::modules::planner::ModuleType;
use serde::Serialize;
use std::path::{Component, Path};

/// Parameter that overrides the name-derived module type
pub const MODULE_TYPE_PARAM: &str = "module_type";

/// A named unit of remote work together with its parsed parameters.
///
/// Modules are immutable once built; fields are only reachable through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    name: String,
    params: ModuleParams,
}

impl Module {
    /// Build a module from its name and raw `key=value` argument string.
    pub fn new(name: &str, raw_args: &str) -> Result<Self, ModuleError> {
        validate_name(name)?;
        let params = parse_args(raw_args)?;

        Ok(Self {
            name: name.to_string(),
            params,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &ModuleParams {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Type used to pick the action pipeline: the explicit `module_type`
    /// parameter when given, the module name otherwise.
    pub fn module_type(&self) -> ModuleType {
        let tag = self.param(MODULE_TYPE_PARAM).unwrap_or(self.name.as_str());
        ModuleType::from_tag(tag)
    }
}

/// The name is joined onto every search root, so it must be exactly one
/// normal path component.
fn validate_name(name: &str) -> Result<(), ModuleError> {
    let invalid = |reason: &str| ModuleError::InvalidModuleName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name contains a path separator"));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid("name is not a plain path component")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_module() {
        let module = Module::new("shell", r#"cmd="ls -al" foo=bar baz=☃"#).unwrap();

        assert_eq!(module.name(), "shell");
        assert_eq!(module.param("cmd"), Some("ls -al"));
        assert_eq!(module.param("foo"), Some("bar"));
        assert_eq!(module.param("baz"), Some("☃"));
        assert_eq!(module.params().len(), 3);
    }

    #[test]
    fn test_name_stored_verbatim() {
        let module = Module::new("MyModule", "").unwrap();
        assert_eq!(module.name(), "MyModule");
        assert!(module.params().is_empty());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let raw = r#"a=1 b="two words" c='x "y"'"#;
        assert_eq!(Module::new("m", raw).unwrap(), Module::new("m", raw).unwrap());
    }

    #[test]
    fn test_invalid_args_propagate() {
        assert!(matches!(
            Module::new("invalid", "foo"),
            Err(ModuleError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Module::new("invalid", "foo bar=baz"),
            Err(ModuleError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", ".", "..", "a/b", "../shell", r"a\b"] {
            assert!(
                matches!(
                    Module::new(name, ""),
                    Err(ModuleError::InvalidModuleName { .. })
                ),
                "name {name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_module_type_from_name_and_param() {
        assert_eq!(Module::new("copy", "").unwrap().module_type(), ModuleType::Copy);
        assert_eq!(
            Module::new("render", "module_type=template src=a")
                .unwrap()
                .module_type(),
            ModuleType::Template
        );
        assert_eq!(
            Module::new("shell", "").unwrap().module_type(),
            ModuleType::Named("shell".to_string())
        );
    }
}
