//! Output formatting for run reports
//!
//! Reports go to stdout either as human-readable text or as JSON for tooling
//! that consumes the step's output.

use anyhow::{Context, Result};

use crate::error::StepError;
use crate::pipeline::PipelineReport;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// Human-readable formatted text
    Human,
}

/// Output formatter for run reports
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, report: &PipelineReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize run report to JSON"),
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    pub fn format_error(&self, error: &StepError) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "error": {
                        "kind": error.kind(),
                        "message": error.to_string(),
                    }
                });
                serde_json::to_string_pretty(&output).context("Failed to serialize error to JSON")
            }
            OutputFormat::Human => Ok(format!("Error: {}", error)),
        }
    }

    fn format_human(&self, report: &PipelineReport) -> String {
        let mut output = String::new();

        output.push_str("Trace task injected\n");
        output.push_str(&format!("  Project:      {}\n", report.project_dir.display()));
        output.push_str(&format!("  Build script: {}", report.build_script.display()));
        if let Some(dialect) = report.dialect {
            output.push_str(&format!(" ({} DSL)", dialect));
        }
        output.push('\n');
        if let Some(asset) = &report.installed_asset {
            output.push_str(&format!("  Task source:  {}\n", asset.display()));
        }
        if !report.tasks_run.is_empty() {
            output.push_str(&format!("  Tasks run:    {}\n", report.tasks_run.join(", ")));
        }

        output
    }
}
