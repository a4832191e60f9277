//! User settings for Libris
//!
//! Manages where the catalog lives, whether mutations are audited,
//! and the default log verbosity.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LibrisPaths;
use crate::error::LibrisError;

/// User settings for Libris
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Settings schema version; files newer than this build are rejected
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Override for the catalog file location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<PathBuf>,

    /// Whether catalog mutations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Newest settings schema this build understands
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

fn default_audit_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            catalog_file: None,
            audit_enabled: default_audit_enabled(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LibrisPaths) -> Result<Self, LibrisError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LibrisError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LibrisError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.schema_version > SCHEMA_VERSION {
                return Err(LibrisError::Config(format!(
                    "Settings schema version {} is newer than supported version {}",
                    settings.schema_version, SCHEMA_VERSION
                )));
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LibrisPaths) -> Result<(), LibrisError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LibrisError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            LibrisError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Resolve the catalog file, honoring the override
    ///
    /// Relative overrides are taken relative to the base directory.
    pub fn catalog_path(&self, paths: &LibrisPaths) -> PathBuf {
        match &self.catalog_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => paths.base_dir().join(path),
            None => paths.catalog_file(),
        }
    }
}
