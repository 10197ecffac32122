//! Module descriptors, artifact resolution and execution planning

pub mod args;
pub mod error;
pub mod module;
pub mod planner;
pub mod resolver;
pub mod search_path;

// Re-export commonly used types
pub use args::{parse_args, ModuleParams};
pub use error::ModuleError;
pub use module::{Module, MODULE_TYPE_PARAM};
pub use planner::{ExecutionPlanner, ModuleType};
pub use resolver::{ArtifactResolver, FileSystemResolver, ResolvedArtifact, PACKAGED_ENTRY_POINT};
pub use search_path::SearchPath;
