//! Root build script lookup and mutation

use super::dialect::{detect_dialect, Dialect};
use crate::config::StepConstants;
use crate::error::StepError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Finds the root build script of a project, preferring the Kotlin DSL one.
pub fn locate_root_build_script(
    project_dir: &Path,
    constants: &StepConstants,
) -> Result<PathBuf, StepError> {
    for name in constants.root_script_names() {
        let candidate = project_dir.join(&name);
        if candidate.is_file() {
            debug!("Found root build script: {}", candidate.display());
            return Ok(candidate);
        }
    }

    Err(StepError::BuildScriptNotFound {
        project_dir: project_dir.to_path_buf(),
    })
}

/// Appends the injected task registration to the end of a build script.
///
/// Existing content is never rewritten. Calling this twice registers the
/// task twice, so callers must only run it once per project.
pub fn append_registration(path: &Path, constants: &StepConstants) -> Result<Dialect, StepError> {
    let dialect = detect_dialect(path, constants)?;
    let snippet =
        dialect.registration_snippet(&constants.inject_task_name, &constants.inject_task_type);

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|source| StepError::FileOpenFailure {
            path: path.to_path_buf(),
            source,
        })?;

    let write_error = |source| StepError::FileWriteFailure {
        path: path.to_path_buf(),
        source,
    };
    file.write_all(snippet.as_bytes()).map_err(write_error)?;
    // Dropping a File swallows close errors; syncing surfaces them first.
    file.sync_all().map_err(write_error)?;

    info!(
        "Registered {} in {} ({} DSL)",
        constants.inject_task_name,
        path.display(),
        dialect
    );
    Ok(dialect)
}
