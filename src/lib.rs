//! trace-injector - injects the trace task into an Android Gradle build
//!
//! A build step that wires the trace SDK's Gradle task into a project:
//!
//! 1. registers the task at the end of the root build script, in the syntax
//!    of the script's dialect (Kotlin DSL or Groovy DSL),
//! 2. copies the task source shipped with the step into the project's
//!    `buildSrc`,
//! 3. runs the task through the project's Gradle wrapper.
//!
//! The steps run once, in order, and the first failure aborts the run.
//! Nothing is rolled back.
//!
//! # Example
//!
//! ```no_run
//! use trace_injector::{InjectionContext, InjectionOrchestrator, StepConfig, StepConstants};
//!
//! # fn main() -> Result<(), trace_injector::StepError> {
//! let constants = StepConstants::default();
//! let config = StepConfig::from_env(&constants)?;
//! let mut context = InjectionContext::from_config(&config, constants, None)?;
//! let report = InjectionOrchestrator::new(None).execute(&mut context)?;
//! println!("ran: {:?}", report.tasks_run);
//! # Ok(())
//! # }
//! ```

pub mod asset;
pub mod cli;
pub mod config;
pub mod error;
pub mod gradle;
pub mod pipeline;
pub mod progress;
pub mod util;

pub use asset::install_task_asset;
pub use config::{ConfigError, ConfigOverrides, StepConfig, StepConstants};
pub use error::StepError;
pub use gradle::{
    append_registration, detect_dialect, locate_root_build_script, run_injected_task,
    snippet_for_path, Dialect, GradleWrapper,
};
pub use pipeline::{InjectionContext, InjectionOrchestrator, PipelineReport};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
