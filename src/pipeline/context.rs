//! State shared by the phases of one injection run

use super::report::PipelineReport;
use crate::config::{StepConfig, StepConstants};
use crate::error::StepError;
use crate::gradle::locate_root_build_script;
use std::path::PathBuf;

pub struct InjectionContext {
    pub constants: StepConstants,

    /// Absolute project root, resolved once per run
    pub project_dir: PathBuf,

    pub build_script: PathBuf,

    pub step_source_dir: PathBuf,

    /// Extra arguments for every wrapper invocation
    pub gradle_args: Vec<String>,

    pub report: PipelineReport,
}

impl InjectionContext {
    pub fn new(
        constants: StepConstants,
        project_dir: PathBuf,
        build_script: PathBuf,
        step_source_dir: PathBuf,
    ) -> Self {
        let report = PipelineReport::new(project_dir.clone(), build_script.clone());
        Self {
            constants,
            project_dir,
            build_script,
            step_source_dir,
            gradle_args: Vec::new(),
            report,
        }
    }

    pub fn with_gradle_args(mut self, gradle_args: Vec<String>) -> Self {
        self.gradle_args = gradle_args;
        self
    }

    /// Builds the context for a configured run.
    ///
    /// Without an explicit `build_script` the root script is looked up in the
    /// project directory.
    pub fn from_config(
        config: &StepConfig,
        constants: StepConstants,
        build_script: Option<PathBuf>,
    ) -> Result<Self, StepError> {
        let project_dir = config.resolve_project_dir()?;
        let build_script = match build_script {
            Some(script) => script,
            None => locate_root_build_script(&project_dir, &constants)?,
        };

        Ok(Self::new(
            constants,
            project_dir,
            build_script,
            config.step_source_dir.clone(),
        )
        .with_gradle_args(config.gradle_args()))
    }
}
