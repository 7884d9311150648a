//! Editor configuration, persisted as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::edit::ActionMode;
use crate::volume::ground::{default_palette, ground_palette};
use crate::volume::{GroundConfig, Rgb};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Tint drawn on the hovered face
    pub highlight_color: Rgb,
    /// Outline colour for selected volumes
    pub selection_outline_color: Rgb,
    /// How far a stretch pushes the picked face
    pub stretch_increment: f32,
    /// Refuse to delete the last editable volume
    pub protect_last_editable: bool,
    /// Pointer travel (pixels) with a button held before it counts as a drag
    pub drag_threshold: f32,
    /// Mode active at startup
    pub initial_mode: ActionMode,
    pub ground: GroundConfig,
    pub default_palette: [Rgb; 6],
    pub ground_palette: [Rgb; 6],
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            highlight_color: Rgb::FOREST_GREEN,
            selection_outline_color: Rgb::CYAN_OUTLINE,
            stretch_increment: 1.0,
            protect_last_editable: false,
            drag_threshold: 3.0,
            initial_mode: ActionMode::Select,
            ground: GroundConfig::default(),
            default_palette: default_palette(),
            ground_palette: ground_palette(),
        }
    }
}

impl EditorConfig {
    /// Load from a JSON file. Fields missing from the file take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.stretch_increment.is_finite() && self.stretch_increment > 0.0) {
            return Err(Error::Config(format!(
                "stretch_increment must be positive, got {}",
                self.stretch_increment
            )));
        }
        if !(self.drag_threshold >= 0.0) {
            return Err(Error::Config(format!(
                "drag_threshold must not be negative, got {}",
                self.drag_threshold
            )));
        }
        if self.ground.size > GroundConfig::MAX_SIZE {
            return Err(Error::Config(format!(
                "ground.size must be at most {}, got {}",
                GroundConfig::MAX_SIZE,
                self.ground.size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.highlight_color, Rgb::FOREST_GREEN);
        assert_eq!(config.stretch_increment, 1.0);
        assert!(!config.protect_last_editable);
        assert_eq!(config.ground.size, 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("editor.json");

        let config = EditorConfig {
            protect_last_editable: true,
            stretch_increment: 0.5,
            initial_mode: ActionMode::SliceZ,
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = EditorConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.json");
        std::fs::write(&path, r#"{ "ground": { "size": 4 }, "initial_mode": "stretch" }"#).unwrap();

        let loaded = EditorConfig::load(&path).unwrap();
        assert_eq!(loaded.ground.size, 4);
        assert!(loaded.ground.enabled);
        assert_eq!(loaded.initial_mode, ActionMode::Stretch);
        assert_eq!(loaded.highlight_color, Rgb::FOREST_GREEN);
    }

    #[test]
    fn test_invalid_files_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.json");

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(EditorConfig::load(&path), Err(Error::Config(_))));

        std::fs::write(&path, r#"{ "stretch_increment": 0.0 }"#).unwrap();
        assert!(matches!(EditorConfig::load(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_oversized_ground_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.json");

        std::fs::write(&path, r#"{ "ground": { "size": 65536 } }"#).unwrap();
        assert!(matches!(EditorConfig::load(&path), Err(Error::Config(_))));

        std::fs::write(&path, r#"{ "ground": { "size": 1024 } }"#).unwrap();
        assert_eq!(EditorConfig::load(&path).unwrap().ground.size, GroundConfig::MAX_SIZE);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = EditorConfig::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, EditorConfig::default());
    }
}
