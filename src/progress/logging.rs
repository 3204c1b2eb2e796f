//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, error, info};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { project_dir } => {
                info!(project = %project_dir, "Injecting trace task");
            }
            ProgressEvent::PhaseStarted { phase } => {
                debug!(phase = %phase, "Starting phase");
            }
            ProgressEvent::PhaseComplete { phase, duration } => {
                info!(
                    phase = %phase,
                    duration_ms = duration.as_millis(),
                    "Phase complete"
                );
            }
            ProgressEvent::PhaseFailed { phase, error } => {
                error!(phase = %phase, error = %error, "Phase failed");
            }
            ProgressEvent::Completed { phases, total_time } => {
                info!(
                    phases,
                    total_time_ms = total_time.as_millis(),
                    "Trace task injected"
                );
            }
        }
    }
}
