//! Command-line options and the headless run.

use crate::prefs::{Preferences, PrefsError};
use crate::script::{Script, ScriptError};
use kurbo::Size;
use scorepad_core::workspace::Workspace;
use scorepad_render::{RenderContext, Renderer, RendererError, SvgRenderer};
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str =
    "usage: scorepad <script.json> [-o out.svg] [--prefs prefs.json] [--width W] [--height H]";

/// Default canvas size.
const DEFAULT_WIDTH: f64 = 800.0;
const DEFAULT_HEIGHT: f64 = 600.0;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}\n{usage}", usage = USAGE)]
    Usage(String),
    #[error(transparent)]
    Prefs(#[from] PrefsError),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Render(#[from] RendererError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub script: PathBuf,
    pub output: PathBuf,
    /// Explicit preferences file; the platform config path otherwise.
    pub prefs: Option<PathBuf>,
    pub size: Size,
}

impl Options {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut script = None;
        let mut output = None;
        let mut prefs = None;
        let mut size = Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-o" | "--output" => output = Some(PathBuf::from(value(&mut args, &arg)?)),
                "--prefs" => prefs = Some(PathBuf::from(value(&mut args, &arg)?)),
                "--width" => size.width = dimension(&mut args, &arg)?,
                "--height" => size.height = dimension(&mut args, &arg)?,
                flag if flag.starts_with('-') => {
                    return Err(AppError::Usage(format!("unknown option {flag}")));
                }
                _ if script.is_some() => {
                    return Err(AppError::Usage(format!("unexpected argument {arg}")));
                }
                _ => script = Some(PathBuf::from(arg)),
            }
        }

        let script = script.ok_or_else(|| AppError::Usage("missing script path".to_string()))?;
        let output = output.unwrap_or_else(|| script.with_extension("svg"));
        Ok(Self {
            script,
            output,
            prefs,
            size,
        })
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, AppError> {
    args.next()
        .ok_or_else(|| AppError::Usage(format!("{flag} needs a value")))
}

fn dimension(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<f64, AppError> {
    let raw = value(args, flag)?;
    match raw.parse::<f64>() {
        Ok(v) if v > 0.0 => Ok(v),
        _ => Err(AppError::Usage(format!("{flag} must be a positive number, got {raw}"))),
    }
}

/// Load preferences, replay the script and write the final frame.
pub fn run(options: &Options) -> Result<Workspace, AppError> {
    let prefs = match options.prefs.clone().or_else(Preferences::default_path) {
        Some(path) => Preferences::load(&path)?,
        None => {
            log::warn!("no config directory; using default preferences");
            Preferences::default()
        }
    };
    let script = Script::load(&options.script)?;

    let mut workspace = Workspace::new();
    prefs.apply(&mut workspace);
    script.replay(&mut workspace);

    let mut renderer = SvgRenderer::new();
    renderer.build_scene(&RenderContext::new(&workspace, options.size))?;
    renderer.save(&options.output)?;
    Ok(workspace)
}
