#![allow(dead_code)]

pub mod project;

pub use project::{
    copy_fixture_project, fixture_path, step_fixture_dir, step_task_source, write_wrapper,
    TestProject,
};

/// Helper to get the path to the trace-injector binary
pub fn trace_injector_bin() -> std::path::PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.join("trace-injector")
}
