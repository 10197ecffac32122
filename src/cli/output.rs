use crate::dispatch::DispatchPlan;
use std::fmt::Write;

/// Render a plan in human-readable form
pub fn format_plan_text(plan: &DispatchPlan) -> String {
    let mut out = String::new();
    let layout = if plan.artifact.standalone {
        "standalone"
    } else {
        "packaged"
    };

    let _ = writeln!(out, "📦 Module: {}", plan.module.name());

    let mut params: Vec<_> = plan.module.params().iter().collect();
    params.sort();
    for (key, value) in params {
        let _ = writeln!(out, "  • {key} = {value}");
    }

    let _ = writeln!(out, "🎯 Platform: {}", plan.platform);
    let _ = writeln!(out, "📁 Artifact ({layout}): {}", plan.artifact.path.display());
    let _ = writeln!(out, "🚀 Entry point: {}", plan.entry_point.display());
    let _ = writeln!(out, "📋 Execution order:");
    for (i, action) in plan.actions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, action);
    }

    out
}

pub fn format_plan_json(plan: &DispatchPlan) -> serde_json::Result<String> {
    serde_json::to_string_pretty(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::{Module, ResolvedArtifact};
    use crate::types::Platform;
    use std::path::PathBuf;

    fn sample_plan() -> DispatchPlan {
        DispatchPlan {
            module: Module::new("copy", "src=foo dest=bar").unwrap(),
            platform: Platform::Linux,
            artifact: ResolvedArtifact {
                path: PathBuf::from("/m/copy/copy.linux"),
                standalone: true,
            },
            entry_point: PathBuf::from("/m/copy/copy.linux"),
            actions: vec!["stage".to_string(), "exec_module".to_string()],
        }
    }

    #[test]
    fn test_text_output() {
        let text = format_plan_text(&sample_plan());
        assert!(text.contains("Module: copy"));
        assert!(text.contains("• dest = bar\n  • src = foo"));
        assert!(text.contains("Artifact (standalone): /m/copy/copy.linux"));
        assert!(text.contains("1. stage\n  2. exec_module"));
    }

    #[test]
    fn test_json_output() {
        let json = format_plan_json(&sample_plan()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["platform"], "linux");
        assert_eq!(value["module"]["name"], "copy");
        assert_eq!(value["module"]["params"]["src"], "foo");
        assert_eq!(value["artifact"]["standalone"], true);
        assert_eq!(value["actions"][1], "exec_module");
    }
}
