use crate::conf::error::ConfigError;
use crate::conf::types::ChatlensConfig;
use crate::conf::validate::validate_config;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "chatlens.toml";

/// A validated config together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ChatlensConfig,
    /// Directory relative paths in the config resolve against.
    pub base_dir: PathBuf,
    /// `None` when built-in defaults are in use.
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    pub fn defaults(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            config: ChatlensConfig::default(),
            base_dir: base_dir.into(),
            source: None,
        }
    }

    pub fn stopwords_path(&self) -> PathBuf {
        let path = &self.config.analysis.stopwords;
        if path.is_absolute() {
            path.clone()
        } else {
            self.base_dir.join(path)
        }
    }
}

pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config: ChatlensConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    validate_config(&config)?;

    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    tracing::debug!(path = %path.display(), "config loaded");

    Ok(LoadedConfig {
        config,
        base_dir,
        source: Some(path.to_path_buf()),
    })
}

/// An explicit path must exist. Without one, `chatlens.toml` in the working
/// directory is used when present and built-in defaults otherwise.
pub fn resolve_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.is_file() {
        return load_config(default_path);
    }

    tracing::debug!("no config file found, using defaults");
    Ok(LoadedConfig::defaults(""))
}
