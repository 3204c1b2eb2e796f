use crate::error::StepError;
use crate::gradle::GradleWrapper;
use crate::pipeline::context::InjectionContext;
use crate::pipeline::phase_trait::InjectionPhase;
use tracing::debug;

/// Runs the trace verification task after injection.
pub struct VerifyTracePhase;

impl InjectionPhase for VerifyTracePhase {
    fn name(&self) -> &'static str {
        "VerifyTracePhase"
    }

    fn execute(&self, context: &mut InjectionContext) -> Result<(), StepError> {
        let constants = &context.constants;
        let output = GradleWrapper::new(&context.project_dir, constants)
            .with_args(context.gradle_args.clone())
            .run_task(&constants.verify_task_name, &constants.verify_task_name)?;

        debug!("{} output:\n{}", constants.verify_task_name, output.stdout);
        context.report.tasks_run.push(constants.verify_task_name.clone());
        Ok(())
    }
}
