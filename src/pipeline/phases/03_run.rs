use crate::error::StepError;
use crate::gradle::run_injected_task;
use crate::pipeline::context::InjectionContext;
use crate::pipeline::phase_trait::InjectionPhase;
use tracing::debug;

/// Runs the injected task through the project's Gradle wrapper.
pub struct RunInjectedTaskPhase;

impl InjectionPhase for RunInjectedTaskPhase {
    fn name(&self) -> &'static str {
        "RunInjectedTaskPhase"
    }

    fn execute(&self, context: &mut InjectionContext) -> Result<(), StepError> {
        let constants = &context.constants;
        let output = run_injected_task(&context.project_dir, constants, context.gradle_args.clone())?;

        debug!("{} output:\n{}", constants.inject_task_name, output.stdout);
        context.report.tasks_run.push(constants.inject_task_name.clone());
        Ok(())
    }
}
