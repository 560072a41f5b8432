//! Recorded input scripts.

use scorepad_core::input::InputEvent;
use scorepad_core::workspace::Workspace;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Script errors.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Invalid script: {0}")]
    Parse(String),
}

pub type ScriptResult<T> = Result<T, ScriptError>;

/// A glyph palette plus the events to replay against a fresh workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Glyphs offered to the symbol tool, in palette order.
    #[serde(default)]
    pub glyphs: Vec<String>,
    pub steps: Vec<InputEvent>,
}

impl Script {
    pub fn from_json(json: &str) -> ScriptResult<Self> {
        serde_json::from_str(json).map_err(|e| ScriptError::Parse(e.to_string()))
    }

    pub fn load(path: &Path) -> ScriptResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| ScriptError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
            .map_err(|e| ScriptError::Parse(format!("{}: {}", path.display(), e)))
    }

    /// Install the glyph palette and apply every step in order.
    pub fn replay(&self, workspace: &mut Workspace) {
        if !self.glyphs.is_empty() {
            workspace.notation_mut().set_glyph_palette(self.glyphs.clone());
        }
        for (index, step) in self.steps.iter().enumerate() {
            log::trace!("step {index}: {step:?}");
            workspace.handle(step);
        }
        log::debug!("replayed {} step(s)", self.steps.len());
    }
}
