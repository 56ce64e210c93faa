/// Configuration resolution module
///
/// This module handles:
/// - Loading the optional TOML settings file
/// - Reading environment overrides
/// - Building a RunPlan from CLI arguments, environment and settings
///
/// Precedence for every setting: CLI flag, then environment, then settings
/// file, then the built-in default.
use crate::cli::CliArgs;
use log::debug;
use serde::Deserialize;
use std::env;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Environment variable overriding the export directory
pub const OUTPUT_DIR_ENV: &str = "RESEARCH_REPORT_OUTPUT_DIR";

/// Contents of the settings file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub output_dir: Option<PathBuf>,
    pub console_width: Option<usize>,
    pub color: Option<bool>,
}

/// The parts of the process environment that influence a run
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub output_dir: Option<PathBuf>,
    pub stdout_is_terminal: bool,
}

impl Environment {
    pub fn from_process() -> Self {
        let output_dir = env::var_os(OUTPUT_DIR_ENV).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self { output_dir, stdout_is_terminal: std::io::stdout().is_terminal() }
    }
}

/// Fully resolved instructions for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    pub input: PathBuf,
    pub render_screen: bool,
    pub console_width: Option<usize>,
    pub use_colors: bool,
    pub export: bool,
    pub output_dir: PathBuf,
    pub json: Option<PathBuf>,
    pub markdown: Option<PathBuf>,
    pub copy: bool,
}

/// Build a RunPlan from CLI arguments and the current process environment
pub fn build_run_plan(args: &CliArgs) -> Result<RunPlan, String> {
    build_run_plan_with(args, &Environment::from_process())
}

/// Build a RunPlan against an explicit environment
pub fn build_run_plan_with(args: &CliArgs, environment: &Environment) -> Result<RunPlan, String> {
    debug!("Building run plan from CLI args");

    let settings = resolve_settings(args)?;
    debug!("Settings: {:?}", settings);

    let output_dir = if let Some(ref dir) = args.output_dir {
        debug!("Output dir from --output-dir: {}", dir.display());
        dir.clone()
    } else if let Some(ref dir) = environment.output_dir {
        debug!("Output dir from {}: {}", OUTPUT_DIR_ENV, dir.display());
        dir.clone()
    } else if let Some(ref dir) = settings.output_dir {
        debug!("Output dir from settings: {}", dir.display());
        dir.clone()
    } else {
        PathBuf::from(".")
    };

    if args.export && !output_dir.is_dir() {
        return Err(format!("Output directory does not exist: {}", output_dir.display()));
    }

    let use_colors = if args.no_color {
        false
    } else {
        settings.color.unwrap_or(environment.stdout_is_terminal)
    };

    Ok(RunPlan {
        input: args.input.clone(),
        render_screen: args.renders_screen(),
        console_width: args.console_width.or(settings.console_width),
        use_colors,
        export: args.export,
        output_dir,
        json: args.json.clone(),
        markdown: args.markdown.clone(),
        copy: args.copy,
    })
}

/// Load the settings file named on the command line, or the default one.
///
/// An explicitly named file must exist; the default file is optional.
fn resolve_settings(args: &CliArgs) -> Result<Settings, String> {
    match (&args.config, args.get_config_path()) {
        (Some(path), _) => load_settings(path),
        (None, Some(path)) if path.exists() => load_settings(&path),
        _ => Ok(Settings::default()),
    }
}

/// Parse a settings file
pub fn load_settings(path: &Path) -> Result<Settings, String> {
    debug!("Loading settings from {}", path.display());
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read settings {}: {}", path.display(), e))?;
    let settings: Settings =
        toml::from_str(&content).map_err(|e| format!("Invalid settings {}: {}", path.display(), e))?;

    if let Some(width) = settings.console_width
        && width < crate::cli::MIN_CONSOLE_WIDTH
    {
        return Err(format!(
            "Invalid settings {}: console_width must be at least {}",
            path.display(),
            crate::cli::MIN_CONSOLE_WIDTH
        ));
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
