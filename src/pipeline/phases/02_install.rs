use crate::asset::install_task_asset;
use crate::error::StepError;
use crate::pipeline::context::InjectionContext;
use crate::pipeline::phase_trait::InjectionPhase;

/// Copies the task source into the project's `buildSrc`.
pub struct InstallAssetPhase;

impl InjectionPhase for InstallAssetPhase {
    fn name(&self) -> &'static str {
        "InstallAssetPhase"
    }

    fn execute(&self, context: &mut InjectionContext) -> Result<(), StepError> {
        let installed = install_task_asset(
            &context.step_source_dir,
            &context.project_dir,
            &context.constants,
        )?;
        context.report.installed_asset = Some(installed);
        Ok(())
    }
}
