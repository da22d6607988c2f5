//! Validate command handler.
//!
//! Validates one file, every `.yaml` file under a directory, or (with no path)
//! every version in the catalog. Each file is reported on its own; any error
//! or load failure makes the command fail once all files have been checked.

use clap::Args;
use promptguard_core::{config::AppConfig, AppError, AppResult};
use promptguard_prompt::{
    collect_prompt_files, validate_catalog, validate_files, BatchSummary, FileReport,
};
use std::path::PathBuf;

/// Validate prompt definitions
#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Path to a .yaml file or a directory (default: the whole catalog)
    pub path: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ValidateCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing validate command");
        tracing::debug!("Validate options: {:?}", self);

        let reports = match self.path {
            Some(ref path) => {
                if !path.exists() {
                    return Err(AppError::Other(format!(
                        "Path not found: {}",
                        path.display()
                    )));
                }
                validate_files(&collect_prompt_files(path))
            }
            None => validate_catalog(&config.prompts_root_path())?,
        };

        let summary = BatchSummary::from_reports(&reports);

        if self.json {
            let output = serde_json::json!({
                "files": reports.iter().map(report_json).collect::<Vec<_>>(),
                "passed": summary.passed,
                "failed": summary.failed,
                "errored": summary.errored,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else if reports.is_empty() {
            println!("No .yaml files found.");
        } else {
            for report in &reports {
                print_report(report);
            }
            println!();
            println!(
                "{} file(s): {} passed, {} failed, {} could not be loaded",
                summary.total(),
                summary.passed,
                summary.failed,
                summary.errored
            );
        }

        if summary.has_failures() {
            return Err(AppError::Prompt(format!(
                "{} of {} prompt file(s) did not pass validation",
                summary.failed + summary.errored,
                summary.total()
            )));
        }

        Ok(())
    }
}

fn print_report(report: &FileReport) {
    println!("Validating {}", report.label);

    match report.outcome {
        Ok(ref result) => {
            println!("{}", if result.is_valid() { "OK" } else { "FAILED" });
            for e in &result.errors {
                println!("  ✗ {}", e);
            }
            for w in &result.warnings {
                println!("  ! {}", w);
            }
        }
        Err(ref e) => println!("  ✗ {}", e),
    }
}

fn report_json(report: &FileReport) -> serde_json::Value {
    match report.outcome {
        Ok(ref result) => serde_json::json!({
            "label": report.label,
            "path": report.path,
            "valid": result.is_valid(),
            "errors": result.errors,
            "warnings": result.warnings,
        }),
        Err(ref e) => serde_json::json!({
            "label": report.label,
            "path": report.path,
            "valid": false,
            "loadError": e.to_string(),
        }),
    }
}
