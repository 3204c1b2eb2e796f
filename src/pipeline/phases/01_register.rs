use crate::error::StepError;
use crate::gradle::append_registration;
use crate::pipeline::context::InjectionContext;
use crate::pipeline::phase_trait::InjectionPhase;

/// Appends the task registration to the root build script.
pub struct RegisterTaskPhase;

impl InjectionPhase for RegisterTaskPhase {
    fn name(&self) -> &'static str {
        "RegisterTaskPhase"
    }

    fn execute(&self, context: &mut InjectionContext) -> Result<(), StepError> {
        let dialect = append_registration(&context.build_script, &context.constants)?;

        context.report.dialect = Some(dialect);
        context.report.snippet = Some(dialect.registration_snippet(
            &context.constants.inject_task_name,
            &context.constants.inject_task_type,
        ));
        Ok(())
    }
}
