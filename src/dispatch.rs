//! End-to-end dispatch: parse, resolve and plan a single module invocation

use crate::config::ConfigStore;
use crate::modules::{
    ArtifactResolver, ExecutionPlanner, FileSystemResolver, Module, ModuleError, ResolvedArtifact,
    SearchPath,
};
use crate::types::Platform;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Everything the execution engine needs to run one module on a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchPlan {
    pub module: Module,
    pub platform: Platform,
    pub artifact: ResolvedArtifact,
    pub entry_point: PathBuf,
    pub actions: Vec<String>,
}

pub struct ModuleDispatcher<R = FileSystemResolver> {
    resolver: R,
    config: ConfigStore,
}

impl ModuleDispatcher<FileSystemResolver> {
    pub fn new(search_path: SearchPath, config: ConfigStore) -> Self {
        Self::with_resolver(FileSystemResolver::new(search_path), config)
    }
}

impl<R: ArtifactResolver> ModuleDispatcher<R> {
    pub fn with_resolver(resolver: R, config: ConfigStore) -> Self {
        Self { resolver, config }
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn resolve(
        &self,
        module: &Module,
        platform: &Platform,
    ) -> Result<ResolvedArtifact, ModuleError> {
        self.resolver.resolve(module, platform)
    }

    pub fn execution_order(&self, module: &Module) -> Result<Vec<String>, ModuleError> {
        ExecutionPlanner::new(&self.config).execution_order(module)
    }

    /// Parse `raw_args`, resolve the artifact for `platform` and plan its
    /// actions. Fails on the first error; nothing partial is returned.
    pub fn dispatch(
        &self,
        name: &str,
        raw_args: &str,
        platform: &Platform,
    ) -> Result<DispatchPlan, ModuleError> {
        let module = Module::new(name, raw_args)?;
        let actions = self.execution_order(&module)?;
        let artifact = self.resolve(&module, platform)?;

        info!(
            module = name,
            %platform,
            actions = actions.len(),
            "module dispatch planned"
        );

        Ok(DispatchPlan {
            entry_point: artifact.entry_point(),
            module,
            platform: platform.clone(),
            artifact,
            actions,
        })
    }
}
