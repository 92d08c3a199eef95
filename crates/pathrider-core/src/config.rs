//! User configuration for pathrider
//!
//! Looked up from `--config <file>`, then `$PATHRIDER_CONFIG_DIR/config.toml`,
//! then the platform config directory. A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PathriderError, Result};

pub use types::{DuplicateEdgePolicy, NetworkConfig, OutputConfig, PathriderConfig, DEFAULT_OUT};

const CONFIG_DIR: &str = "pathrider";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "PATHRIDER_CONFIG_DIR";

impl PathriderConfig {
    /// Default location of the user configuration file
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            return Some(PathBuf::from(env_dir).join(CONFIG_FILE));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the configuration, falling back to defaults when no file exists.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PathriderError::io_operation("read config", path.display(), e))?;

        let config: PathriderConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded_config");
        Ok(config)
    }
}
