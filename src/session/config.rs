//! Editing configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::voxel::edit::{DEFAULT_MAX_VOLUME, DEFAULT_UNDO_LIMIT};
use crate::voxel::material::{default_materials, MaterialEntry, MaterialTable};

/// Configuration for the editing service. Missing fields take defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditConfig {
    /// Maximum undo depth per actor
    pub undo_limit: usize,
    /// Maximum candidate cells one region or brush edit may enumerate
    pub max_volume: u64,
    /// Material palette used to parse content, patterns and masks
    pub materials: Vec<MaterialEntry>,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            undo_limit: DEFAULT_UNDO_LIMIT,
            max_volume: DEFAULT_MAX_VOLUME,
            materials: default_materials(),
        }
    }
}

impl EditConfig {
    /// Load from a JSON file.
    pub fn load_sync(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load from a JSON file, falling back to defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::warn!("Config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let config = Self::load_sync(path)?;
        log::info!(
            "Loaded config from {} (undo_limit={}, max_volume={}, {} materials)",
            path.display(),
            config.undo_limit,
            config.max_volume,
            config.materials.len()
        );
        Ok(config)
    }

    /// Save as pretty-printed JSON, creating parent directories.
    pub fn save_sync(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn material_table(&self) -> MaterialTable {
        MaterialTable::new(self.materials.clone())
    }
}
