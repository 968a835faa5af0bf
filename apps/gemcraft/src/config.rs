//! # Configuration
//!
//! Optional TOML configuration for the gemcraft CLI.
//!
//! ```toml
//! [display]
//! use_colors = true   # group gems by color name instead of effect name
//! show_all = true     # include power and attributes in readouts
//! ```
//!
//! Lookup order: `--config <path>` (must exist), then `gemcraft.toml` in the
//! working directory (optional), then built-in defaults. CLI flags override
//! whatever the file sets.

use gemcraft_core::GemError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "gemcraft.toml";

/// Maximum configuration file size (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

/// Display preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Group gems by color name rather than effect name.
    pub use_colors: bool,
    /// Include power and per-attribute values in readouts.
    pub show_all: bool,
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, GemError> {
        toml::from_str(text)
            .map_err(|e| GemError::SerializationError(format!("Invalid config: {}", e)))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `gemcraft.toml` in the
    /// working directory is used if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, GemError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let metadata = std::fs::metadata(&path).map_err(|e| {
            GemError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(GemError::IoError(format!(
                "Config '{}' is {} bytes, maximum is {}",
                path.display(),
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(&path).map_err(|e| {
            GemError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;

        tracing::debug!("Loaded config from {:?}", path);
        Self::from_toml(&text)
    }
}
