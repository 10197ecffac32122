//! Dispatch configuration: which actions run, in which order, per module type

pub mod error;
pub mod load;
pub mod store;
pub mod types;

pub use error::ConfigError;
pub use load::{load_from_path, parse_config, ConfigFormat};
pub use store::ConfigStore;
pub use types::{DispatchConfig, DEFAULT_PIPELINE};
