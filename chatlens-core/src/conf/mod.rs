mod error;
mod loader;
pub mod types;
mod validate;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, LoadedConfig, load_config, resolve_config};
pub use types::ChatlensConfig;
pub use validate::validate_config;
