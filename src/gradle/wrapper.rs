//! Gradle wrapper invocation

use crate::config::StepConstants;
use crate::error::StepError;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Captured output of a successful wrapper run
#[derive(Debug, Clone, Default)]
pub struct TaskOutput {
    pub stdout: String,
    pub stderr: String,
}

/// The project-local `gradlew` of a Gradle project
#[derive(Debug, Clone)]
pub struct GradleWrapper {
    project_dir: PathBuf,
    executable: PathBuf,
    extra_args: Vec<String>,
}

impl GradleWrapper {
    pub fn new(project_dir: &Path, constants: &StepConstants) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            executable: project_dir.join(&constants.wrapper_name),
            extra_args: Vec::new(),
        }
    }

    /// Extra arguments appended after the project directory flag.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Arguments passed to the wrapper to run `task`.
    pub fn args(&self, task: &str) -> Vec<String> {
        let mut args = vec![
            task.to_string(),
            "-p".to_string(),
            self.project_dir.display().to_string(),
        ];
        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// Full command line, as echoed before launching.
    pub fn command_line(&self, task: &str) -> String {
        let mut parts = vec![self.executable.display().to_string()];
        parts.extend(self.args(task));
        parts.join(" ")
    }

    /// Runs `task` and blocks until the wrapper exits.
    ///
    /// `task_type` only labels the failure. There is no timeout; a hanging
    /// build has to be killed from outside.
    pub fn run_task(&self, task: &str, task_type: &str) -> Result<TaskOutput, StepError> {
        println!("==> Executing: {}", self.command_line(task));

        let output = Command::new(&self.executable)
            .args(self.args(task))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| StepError::InjectedTaskFailed {
                task_type: task_type.to_string(),
                cause: e.to_string(),
                stdout: String::new(),
                stderr: String::new(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!(
            status = %output.status,
            stdout_bytes = stdout.len(),
            stderr_bytes = stderr.len(),
            "Gradle wrapper exited"
        );

        if !output.status.success() {
            return Err(StepError::InjectedTaskFailed {
                task_type: task_type.to_string(),
                cause: output.status.to_string(),
                stdout,
                stderr,
            });
        }

        info!("Task {} finished", task);
        Ok(TaskOutput { stdout, stderr })
    }
}

/// Runs the injected task in `project_dir` through its Gradle wrapper.
pub fn run_injected_task(
    project_dir: &Path,
    constants: &StepConstants,
    gradle_args: Vec<String>,
) -> Result<TaskOutput, StepError> {
    GradleWrapper::new(project_dir, constants)
        .with_args(gradle_args)
        .run_task(&constants.inject_task_name, &constants.inject_task_type)
}
