//! Gradle build integration
//!
//! Everything that knows about Gradle lives here: which DSL a build script is
//! written in, how the trace task is registered in it, and how the project's
//! wrapper is run.

pub mod dialect;
pub mod script;
pub mod wrapper;

pub use dialect::{detect_dialect, snippet_for_path, Dialect};
pub use script::{append_registration, locate_root_build_script};
pub use wrapper::{run_injected_task, GradleWrapper, TaskOutput};
