use clap::Parser;
use std::path::PathBuf;

/// Narrowest console width the presenter accepts
pub const MIN_CONSOLE_WIDTH: usize = 40;

/// Get the default settings file for research-report
/// Uses platform-specific config directories:
/// - Linux: ~/.config/research-report/config.toml
/// - macOS: ~/Library/Application Support/research-report/config.toml
/// - Windows: %APPDATA%/research-report/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("research-report").join("config.toml"))
}

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "research-report")]
#[command(about = "Render market-research reports in the terminal and export them as PDF")]
#[command(version)]
pub struct CliArgs {
    /// Report JSON file as returned by the analysis backend ("-" reads stdin)
    #[arg(value_name = "REPORT", default_value = "-")]
    pub input: PathBuf,

    /// Export the report as a paginated PDF document
    #[arg(long, short = 'e')]
    pub export: bool,

    /// Directory the PDF is written to (default: current directory)
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Also write the screen view as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Also write the screen view as Markdown
    #[arg(long, value_name = "PATH")]
    pub markdown: Option<PathBuf>,

    /// Copy the raw report text to stdout instead of rendering it
    /// Pipe into a clipboard tool, e.g. `research-report r.json --copy | pbcopy`
    #[arg(long)]
    pub copy: bool,

    /// Override console width (default: auto-detect)
    #[arg(long, value_name = "COLUMNS")]
    pub console_width: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not render the report to the console
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Settings file (default: the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if let Some(width) = self.console_width
            && width < MIN_CONSOLE_WIDTH
        {
            return Err(format!("--console-width must be at least {} (got {})", MIN_CONSOLE_WIDTH, width));
        }

        if let (Some(json), Some(markdown)) = (&self.json, &self.markdown)
            && json == markdown
        {
            return Err(format!("--json and --markdown both write to {}", json.display()));
        }

        if self.quiet && !self.export && !self.copy && self.json.is_none() && self.markdown.is_none() {
            return Err("Nothing to do: --quiet needs at least one of --export, --copy, --json or --markdown"
                .to_string());
        }

        if !self.reads_stdin() && !self.input.exists() {
            return Err(format!("Report file not found: {}", self.input.display()));
        }

        Ok(())
    }

    /// Is the report read from standard input?
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == crate::source::STDIN_PATH
    }

    /// Should the report be drawn to the console?
    /// Copying owns stdout, so it suppresses rendering.
    pub fn renders_screen(&self) -> bool {
        !self.quiet && !self.copy
    }

    /// Get the settings file, using the default location if not specified
    pub fn get_config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(default_config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn stdin_args() -> CliArgs {
        CliArgs { input: PathBuf::from("-"), ..Default::default() }
    }

    #[test]
    fn test_parse_defaults_to_stdin() {
        let args = CliArgs::try_parse_from(["research-report"]).unwrap();
        assert!(args.reads_stdin());
        assert!(!args.export);
        assert!(args.renders_screen());
    }

    #[test]
    fn test_parse_all_flags() {
        let args = CliArgs::try_parse_from([
            "research-report",
            "report.json",
            "--export",
            "--output-dir",
            "out",
            "--json",
            "view.json",
            "--markdown",
            "view.md",
            "--console-width",
            "72",
            "--no-color",
            "--config",
            "settings.toml",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("report.json"));
        assert!(args.export);
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert_eq!(args.json, Some(PathBuf::from("view.json")));
        assert_eq!(args.markdown, Some(PathBuf::from("view.md")));
        assert_eq!(args.console_width, Some(72));
        assert!(args.no_color);
        assert_eq!(args.get_config_path(), Some(PathBuf::from("settings.toml")));
    }

    #[test]
    fn test_validate_narrow_console_fails() {
        let args = CliArgs { console_width: Some(10), ..stdin_args() };
        assert!(args.validate().unwrap_err().contains("--console-width"));
    }

    #[test]
    fn test_validate_same_view_outputs_fails() {
        let args =
            CliArgs { json: Some(PathBuf::from("x")), markdown: Some(PathBuf::from("x")), ..stdin_args() };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_quiet_without_action_fails() {
        let args = CliArgs { quiet: true, ..stdin_args() };
        assert!(args.validate().unwrap_err().starts_with("Nothing to do"));

        let args = CliArgs { quiet: true, export: true, ..stdin_args() };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_input_fails() {
        let temp_dir = TempDir::new().unwrap();
        let args = CliArgs { input: temp_dir.path().join("missing.json"), ..Default::default() };
        assert!(args.validate().unwrap_err().contains("missing.json"));
    }

    #[test]
    fn test_validate_existing_input_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("report.json");
        std::fs::write(&input, "{}").unwrap();

        let args = CliArgs { input, export: true, ..Default::default() };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_copy_suppresses_rendering() {
        let args = CliArgs { copy: true, ..stdin_args() };
        assert!(!args.renders_screen());
    }
}
