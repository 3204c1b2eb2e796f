use super::context::InjectionContext;
use crate::error::StepError;

/// One effect of the injection pipeline
pub trait InjectionPhase: Send + Sync {
    fn name(&self) -> &'static str;

    fn execute(&self, context: &mut InjectionContext) -> Result<(), StepError>;
}
