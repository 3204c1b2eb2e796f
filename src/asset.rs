//! Installation of the trace task source into a project's `buildSrc`

use crate::config::StepConstants;
use crate::error::StepError;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Copies the task source shipped with the step into the project.
///
/// The source is read in full before anything is created on the destination
/// side, so a missing or unreadable source leaves the project untouched. An
/// existing destination is overwritten. A failed write may leave a partial
/// destination file behind.
///
/// Returns the path of the installed file.
pub fn install_task_asset(
    step_source_dir: &Path,
    project_dir: &Path,
    constants: &StepConstants,
) -> Result<PathBuf, StepError> {
    let source_path = step_source_dir.join(&constants.task_source_path);
    let contents = read_source(&source_path).map_err(|source| StepError::SourceAssetMissing {
        path: source_path.clone(),
        source,
    })?;

    let destination_path = project_dir.join(&constants.task_destination_path);
    let destination_error = |source: io::Error| StepError::DestinationWriteFailure {
        path: destination_path.clone(),
        source,
    };

    if let Some(parent) = destination_path.parent() {
        fs::create_dir_all(parent).map_err(destination_error)?;
    }

    let mut destination = File::create(&destination_path).map_err(destination_error)?;
    destination.write_all(&contents).map_err(destination_error)?;
    destination.sync_all().map_err(destination_error)?;

    debug!(
        "Copied {} bytes from {} to {}",
        contents.len(),
        source_path.display(),
        destination_path.display()
    );
    info!("Installed task source at {}", destination_path.display());

    Ok(destination_path)
}

fn read_source(path: &Path) -> io::Result<Vec<u8>> {
    let mut source = File::open(path)?;
    if !source.metadata()?.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        ));
    }
    let mut contents = Vec::new();
    source.read_to_end(&mut contents)?;
    Ok(contents)
}
