//! ScorePad application shell.
//!
//! A headless stand-in for the platform layer: it owns style preferences,
//! feeds recorded input to a workspace and writes the rendered frame.

pub mod cli;
pub mod prefs;
pub mod script;

pub use cli::{AppError, Options, run};
pub use prefs::{Preferences, PrefsError};
pub use script::{Script, ScriptError};
