//! Style preferences persisted between sessions.

use scorepad_core::shapes::Text;
use scorepad_core::style::{Rgba, ShapeStyle};
use scorepad_core::workspace::Workspace;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Preference errors.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Invalid preferences: {0}")]
    Parse(String),
}

pub type PrefsResult<T> = Result<T, PrefsError>;

/// Palette defaults the platform layer owns and hands to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub color: Rgba,
    pub width: u32,
    pub filled: bool,
    pub text_font: String,
}

impl Default for Preferences {
    fn default() -> Self {
        let style = ShapeStyle::default();
        Self {
            color: style.color,
            width: style.width,
            filled: style.filled,
            text_font: Text::DEFAULT_FONT.to_string(),
        }
    }
}

impl Preferences {
    /// `<config_dir>/scorepad/preferences.json`, if the platform has a
    /// config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scorepad").join("preferences.json"))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> PrefsResult<Self> {
        if !path.exists() {
            log::debug!("no preferences at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)
            .map_err(|e| PrefsError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&json)
            .map_err(|e| PrefsError::Parse(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> PrefsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PrefsError::Io(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| PrefsError::Parse(e.to_string()))?;
        fs::write(path, json)
            .map_err(|e| PrefsError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    pub fn style(&self) -> ShapeStyle {
        ShapeStyle::new(self.color, self.width, self.filled)
    }

    /// Seed a workspace's palette and text font.
    pub fn apply(&self, workspace: &mut Workspace) {
        workspace.shapes_mut().set_style(self.style());
        workspace.notation_mut().set_text_font(self.text_font.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let prefs = Preferences {
            color: Rgba::new(12, 34, 56, 200),
            width: 5,
            filled: true,
            text_font: "Georgia".to_string(),
        };

        prefs.save(&path).unwrap();
        assert_eq!(Preferences::load(&path).unwrap(), prefs);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"width": 9}"#).unwrap();

        let prefs = Preferences::load(&path).unwrap();
        assert_eq!(prefs.width, 9);
        assert_eq!(prefs.text_font, "Arial");
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(Preferences::load(&path), Err(PrefsError::Parse(_))));
    }

    #[test]
    fn test_apply_seeds_workspace() {
        let prefs = Preferences {
            width: 7,
            text_font: "Times".to_string(),
            ..Preferences::default()
        };
        let mut workspace = Workspace::new();
        prefs.apply(&mut workspace);
        assert_eq!(workspace.shapes().style().width, 7);
        assert_eq!(workspace.notation().text_font(), "Times");
    }
}
