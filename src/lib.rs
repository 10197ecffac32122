//! Rustle Dispatch - module dispatch core
//!
//! This crate turns a module name and raw `key=value` argument string into a
//! parsed module, locates the artifact implementing it across an ordered set of
//! module roots, and plans the ordered actions the execution engine must run.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod logging;
pub mod modules;
pub mod types;

pub use config::{ConfigStore, DispatchConfig};
pub use dispatch::{DispatchPlan, ModuleDispatcher};
pub use modules::{Module, ModuleError, ResolvedArtifact, SearchPath};
pub use types::*;
