// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use research_report::clipboard::{WriterClipboard, copy_report};
use research_report::source::{JsonFileSource, ReportSource};
use research_report::{cli, config, console_format, pdf, report, ui};

/// Exit code when the report was shown but the export failed
const EXIT_EXPORT_FAILED: i32 = 2;

#[tokio::main]
async fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Resolve settings, environment and flags into one plan
    let plan = match config::build_run_plan(&args) {
        Ok(p) => p,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    // Set console width override if specified
    if let Some(width) = plan.console_width {
        console_format::set_console_width(width);
    }

    // Load the report
    let report = match JsonFileSource::new(&plan.input).fetch_report() {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let view = report::render_for_screen(&report);

    if plan.render_screen
        && let Err(e) = console_format::print_screen_view(&view, plan.use_colors)
    {
        ui::print_error(&format!("Failed to write to console: {}", e));
        std::process::exit(1);
    }

    if plan.copy
        && let Err(e) = copy_report(&report, &mut WriterClipboard::stdout())
    {
        ui::print_error(&format!("Failed to copy report text: {}", e));
        std::process::exit(1);
    }

    // Secondary outputs
    if let Some(ref path) = plan.json {
        if let Err(e) = report::export_json_view(&view, path) {
            ui::print_error(&format!("Failed to write JSON view {}: {}", path.display(), e));
            std::process::exit(1);
        }
        ui::status(&format!("JSON view written to {}", path.display()));
    }

    if let Some(ref path) = plan.markdown {
        if let Err(e) = report::export_markdown_report(&view, path) {
            ui::print_error(&format!("Failed to write Markdown view {}: {}", path.display(), e));
            std::process::exit(1);
        }
        ui::status(&format!("Markdown view written to {}", path.display()));
    }

    if plan.export {
        let exporter = pdf::Exporter::new(&plan.output_dir);
        ui::status("Exporting...");
        match exporter.export(&report).await {
            Ok(path) => ui::status_ok("Exported", &path.display().to_string()),
            Err(e) => {
                ui::print_error(&format!("Export failed: {}", e));
                std::process::exit(EXIT_EXPORT_FAILED);
            }
        }
    }
}
