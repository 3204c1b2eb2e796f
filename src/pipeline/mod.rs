pub mod context;
pub mod orchestrator;
pub mod phase_trait;
pub mod phases;
pub mod report;

pub use context::InjectionContext;
pub use orchestrator::InjectionOrchestrator;
pub use phase_trait::InjectionPhase;
pub use report::PipelineReport;
