//! Progress handler trait and events

use std::time::Duration;

/// Events emitted while the injection pipeline runs
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Run started for a project
    Started { project_dir: String },

    /// A phase is about to run
    PhaseStarted { phase: String },

    /// A phase finished successfully
    PhaseComplete { phase: String, duration: Duration },

    /// A phase failed; no further phases run
    PhaseFailed { phase: String, error: String },

    /// All phases finished
    Completed { phases: usize, total_time: Duration },
}

/// Trait for handling progress events during a run
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}
