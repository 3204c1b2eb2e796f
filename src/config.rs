//! Configuration management for trace-injector
//!
//! Two kinds of values drive a run:
//!
//! - [`StepConstants`]: the fixed names and paths of the injected task. They are
//!   built once at startup and handed to every component, so tests can swap
//!   them out without touching globals.
//! - [`StepConfig`]: the step inputs, loaded from environment variables with
//!   sensible defaults and overridable from the command line.
//!
//! # Environment Variables
//!
//! - `BITRISE_STEP_SOURCE_DIR`: directory the step was installed to - **required**
//! - `project_location`: root directory of the Gradle project - default: "."
//! - `gradle_options`: extra options passed to the Gradle wrapper - default: ""
//! - `APM_COLLECTOR_TOKEN`: trace collector token, only checked for presence
//! - `TRACE_INJECTOR_LOG_LEVEL`: logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use trace_injector::config::{StepConfig, StepConstants};
//!
//! let constants = StepConstants::default();
//! let config = StepConfig::from_env(&constants).expect("invalid step configuration");
//! let project_dir = config.resolve_project_dir().expect("project directory missing");
//! println!("{}", project_dir.display());
//! ```

use std::env;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_PROJECT_LOCATION: &str = ".";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    #[error("{name} is not set as env variable, aborting build. Please set it as env variable before running this step")]
    MissingEnvironmentVariable { name: String },

    /// The project location does not point at an accessible directory
    #[error("Invalid project location {}: {source}", path.display())]
    InvalidProjectLocation { path: PathBuf, source: io::Error },

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Fixed names and paths of the injected trace task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepConstants {
    /// Name the task is registered under in the build graph
    pub inject_task_name: String,

    /// Task that checks the trace SDK was wired in
    pub verify_task_name: String,

    /// Fully-qualified Java type of the injected task
    pub inject_task_type: String,

    /// Task source, relative to the step source directory
    pub task_source_path: PathBuf,

    /// Task destination, relative to the project directory
    pub task_destination_path: PathBuf,

    /// Suffix of Kotlin DSL build scripts
    pub kotlin_script_suffix: String,

    /// Suffix of Groovy DSL build scripts
    pub groovy_script_suffix: String,

    /// File name of the Gradle wrapper inside the project directory
    pub wrapper_name: String,

    /// Variable naming the step source directory
    pub step_source_dir_env: String,

    /// Variable holding the trace collector token
    pub collector_token_env: String,
}

impl Default for StepConstants {
    fn default() -> Self {
        Self {
            inject_task_name: "injectTraceTask".to_string(),
            verify_task_name: "verifyTrace".to_string(),
            inject_task_type: "io.bitrise.trace.step.InjectTraceTask".to_string(),
            task_source_path: PathBuf::from(
                "src/main/java/io/bitrise/trace/step/InjectTraceTask.java",
            ),
            task_destination_path: PathBuf::from(
                "buildSrc/src/main/java/io/bitrise/trace/step/InjectTraceTask.java",
            ),
            kotlin_script_suffix: ".gradle.kts".to_string(),
            groovy_script_suffix: ".gradle".to_string(),
            wrapper_name: "gradlew".to_string(),
            step_source_dir_env: "BITRISE_STEP_SOURCE_DIR".to_string(),
            collector_token_env: "APM_COLLECTOR_TOKEN".to_string(),
        }
    }
}

impl StepConstants {
    /// Candidate root build script names, Kotlin first
    pub fn root_script_names(&self) -> [String; 2] {
        [
            format!("build{}", self.kotlin_script_suffix),
            format!("build{}", self.groovy_script_suffix),
        ]
    }
}

/// Inputs of a single step run
#[derive(Debug, Clone)]
pub struct StepConfig {
    /// Root directory of the Gradle project, as given
    pub project_location: PathBuf,

    /// Free-form options for the Gradle wrapper
    pub gradle_options: String,

    /// Directory the step itself was installed to
    pub step_source_dir: PathBuf,

    /// Whether a trace collector token was found in the environment
    pub collector_token_present: bool,

    /// Effective logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Reads an environment variable, treating an empty value as unset.
pub fn required_env(name: &str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvironmentVariable {
            name: name.to_string(),
        }),
    }
}

fn optional_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Values that take precedence over the environment, usually from CLI flags
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub project_location: Option<PathBuf>,
    pub gradle_options: Option<String>,
    pub step_source_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl StepConfig {
    /// Loads the step inputs from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvironmentVariable` when the step source
    /// directory variable is unset or empty.
    pub fn from_env(constants: &StepConstants) -> Result<Self, ConfigError> {
        Self::load(constants, &ConfigOverrides::default())
    }

    /// Loads the step inputs, preferring `overrides` over the environment.
    pub fn load(
        constants: &StepConstants,
        overrides: &ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let step_source_dir = match &overrides.step_source_dir {
            Some(dir) => dir.clone(),
            None => PathBuf::from(required_env(&constants.step_source_dir_env)?),
        };

        let project_location = overrides
            .project_location
            .clone()
            .or_else(|| optional_env("project_location").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECT_LOCATION));

        let gradle_options = overrides
            .gradle_options
            .clone()
            .or_else(|| optional_env("gradle_options"))
            .unwrap_or_default();

        let collector_token_present = optional_env(&constants.collector_token_env).is_some();

        let log_level = overrides
            .log_level
            .clone()
            .or_else(|| optional_env("TRACE_INJECTOR_LOG_LEVEL"))
            .map(|level| normalize_log_level(&level))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let config = Self {
            project_location,
            gradle_options,
            step_source_dir,
            collector_token_present,
            log_level,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_location.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Project location must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolves the project location to an absolute, canonical directory.
    pub fn resolve_project_dir(&self) -> Result<PathBuf, ConfigError> {
        resolve_dir(&self.project_location)
    }

    /// Splits the Gradle options into individual wrapper arguments.
    pub fn gradle_args(&self) -> Vec<String> {
        self.gradle_options
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

/// Lowercases a level name; names logging does not know map to the default level.
fn normalize_log_level(level: &str) -> String {
    let level = level.to_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => level,
        _ => DEFAULT_LOG_LEVEL.to_string(),
    }
}

fn resolve_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    let resolved = path
        .canonicalize()
        .map_err(|source| ConfigError::InvalidProjectLocation {
            path: path.to_path_buf(),
            source,
        })?;

    if !resolved.is_dir() {
        return Err(ConfigError::InvalidProjectLocation {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        });
    }

    Ok(resolved)
}

impl fmt::Display for StepConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Step Configuration:")?;
        writeln!(f, "  Project Location: {}", self.project_location.display())?;
        writeln!(f, "  Gradle Options: {}", self.gradle_options)?;
        writeln!(f, "  Step Source Dir: {}", self.step_source_dir.display())?;
        let token = if self.collector_token_present {
            "set"
        } else {
            "not set"
        };
        writeln!(f, "  Collector Token: {}", token)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
