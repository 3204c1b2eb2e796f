use super::context::InjectionContext;
use super::phase_trait::InjectionPhase;
use super::phases::{InstallAssetPhase, RegisterTaskPhase, RunInjectedTaskPhase, VerifyTracePhase};
use super::report::PipelineReport;
use crate::error::StepError;
use crate::progress::{NoOpHandler, ProgressEvent, ProgressHandler};
use std::time::Instant;
use tracing::{debug, info};

pub struct InjectionOrchestrator {
    progress_handler: Box<dyn ProgressHandler>,
    verify: bool,
}

impl InjectionOrchestrator {
    /// Without a handler, progress events are dropped.
    pub fn new(progress_handler: Option<Box<dyn ProgressHandler>>) -> Self {
        Self {
            progress_handler: progress_handler.unwrap_or_else(|| Box::new(NoOpHandler)),
            verify: false,
        }
    }

    /// Also run the verification task once the injected task succeeded.
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    fn phases(&self) -> Vec<Box<dyn InjectionPhase>> {
        let mut phases: Vec<Box<dyn InjectionPhase>> = vec![
            Box::new(RegisterTaskPhase),
            Box::new(InstallAssetPhase),
            Box::new(RunInjectedTaskPhase),
        ];
        if self.verify {
            phases.push(Box::new(VerifyTracePhase));
        }
        phases
    }

    fn emit(&self, event: ProgressEvent) {
        self.progress_handler.on_progress(&event);
    }

    /// Runs every phase in order, stopping at the first failure.
    pub fn execute(&self, context: &mut InjectionContext) -> Result<PipelineReport, StepError> {
        let start = Instant::now();
        info!(
            "Starting trace injection for: {}",
            context.project_dir.display()
        );
        self.emit(ProgressEvent::Started {
            project_dir: context.project_dir.display().to_string(),
        });

        let phases = self.phases();
        let phase_count = phases.len();

        for phase in phases {
            let phase_name = phase.name();
            self.emit(ProgressEvent::PhaseStarted {
                phase: phase_name.to_string(),
            });

            let phase_start = Instant::now();
            if let Err(e) = phase.execute(context) {
                self.emit(ProgressEvent::PhaseFailed {
                    phase: phase_name.to_string(),
                    error: e.to_string(),
                });
                return Err(e);
            }

            self.emit(ProgressEvent::PhaseComplete {
                phase: phase_name.to_string(),
                duration: phase_start.elapsed(),
            });
            debug!("Phase {} complete", phase_name);
        }

        self.emit(ProgressEvent::Completed {
            phases: phase_count,
            total_time: start.elapsed(),
        });

        Ok(context.report.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StepConstants;
    use crate::progress::LoggingHandler;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_orchestrator_creation() {
        let orchestrator = InjectionOrchestrator::new(None);
        assert!(!orchestrator.verify);
        assert_eq!(orchestrator.phases().len(), 3);
    }

    #[test]
    fn test_orchestrator_with_verification() {
        let orchestrator =
            InjectionOrchestrator::new(Some(Box::new(LoggingHandler))).with_verification(true);
        let names: Vec<_> = orchestrator.phases().iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec![
                "RegisterTaskPhase",
                "InstallAssetPhase",
                "RunInjectedTaskPhase",
                "VerifyTracePhase"
            ]
        );
    }

    #[test]
    fn test_unsupported_script_stops_before_install() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("build.sbt");
        fs::write(&script, "name := \"app\"").unwrap();

        let mut context = InjectionContext::new(
            StepConstants::default(),
            temp_dir.path().to_path_buf(),
            script,
            PathBuf::from("/nonexistent/step"),
        );
        let result = InjectionOrchestrator::new(None).execute(&mut context);

        assert!(matches!(result, Err(StepError::UnsupportedDialect { .. })));
        assert!(!temp_dir.path().join("buildSrc").exists());
        assert!(context.report.tasks_run.is_empty());
    }
}
