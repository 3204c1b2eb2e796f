//! Error taxonomy of the injection pipeline

use crate::config::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an injection run
///
/// Every variant is fatal: the pipeline stops at the first one and nothing
/// already written to disk is rolled back.
#[derive(Error, Debug)]
pub enum StepError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not determine the language for gradle file at {}", path.display())]
    UnsupportedDialect { path: PathBuf },

    #[error("no root build script (build.gradle.kts or build.gradle) found in {}", project_dir.display())]
    BuildScriptNotFound { project_dir: PathBuf },

    #[error("failed to open file on path \"{}\": {source}", path.display())]
    FileOpenFailure { path: PathBuf, source: io::Error },

    #[error("failed to write file on path \"{}\": {source}", path.display())]
    FileWriteFailure { path: PathBuf, source: io::Error },

    #[error("task source file missing at \"{}\": {source}", path.display())]
    SourceAssetMissing { path: PathBuf, source: io::Error },

    #[error("failed to write task file to \"{}\": {source}", path.display())]
    DestinationWriteFailure { path: PathBuf, source: io::Error },

    #[error("{task_type} failed. Error: {cause}\nConsole output: {stdout}\nError output: {stderr}")]
    InjectedTaskFailed {
        task_type: String,
        cause: String,
        stdout: String,
        stderr: String,
    },
}

impl StepError {
    /// Short machine-friendly name of the variant, used in reports
    pub fn kind(&self) -> &'static str {
        match self {
            StepError::Config(ConfigError::MissingEnvironmentVariable { .. }) => {
                "missing_environment_variable"
            }
            StepError::Config(_) => "invalid_configuration",
            StepError::UnsupportedDialect { .. } => "unsupported_dialect",
            StepError::BuildScriptNotFound { .. } => "build_script_not_found",
            StepError::FileOpenFailure { .. } => "file_open_failure",
            StepError::FileWriteFailure { .. } => "file_write_failure",
            StepError::SourceAssetMissing { .. } => "source_asset_missing",
            StepError::DestinationWriteFailure { .. } => "destination_write_failure",
            StepError::InjectedTaskFailed { .. } => "injected_task_failed",
        }
    }
}
