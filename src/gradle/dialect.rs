//! Build script dialects and the task registration each one needs

use crate::config::StepConstants;
use crate::error::StepError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Syntax of a Gradle build script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Kotlin DSL (`.gradle.kts`)
    Kotlin,
    /// Groovy DSL (`.gradle`)
    Groovy,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Kotlin => "kotlin",
            Dialect::Groovy => "groovy",
        }
    }

    /// Text that registers `task_type` under `task_name` in a script of this dialect.
    ///
    /// The leading blank line keeps the registration on its own line whether or
    /// not the script ends with a newline.
    pub fn registration_snippet(&self, task_name: &str, task_type: &str) -> String {
        match self {
            Dialect::Kotlin => format!("\n\ntasks.register<{}>(\"{}\")", task_type, task_name),
            Dialect::Groovy => format!("\n\ntask {}(type: {})", task_name, task_type),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Determines the dialect of a build script from its file name suffix.
///
/// Matching is exact and case-sensitive; file contents are never inspected.
pub fn detect_dialect(path: &Path, constants: &StepConstants) -> Result<Dialect, StepError> {
    let name = path.to_string_lossy();

    if name.ends_with(constants.kotlin_script_suffix.as_str()) {
        Ok(Dialect::Kotlin)
    } else if name.ends_with(constants.groovy_script_suffix.as_str()) {
        Ok(Dialect::Groovy)
    } else {
        Err(StepError::UnsupportedDialect {
            path: path.to_path_buf(),
        })
    }
}

/// Registration snippet for the injected task in the script at `path`.
pub fn snippet_for_path(path: &Path, constants: &StepConstants) -> Result<String, StepError> {
    let dialect = detect_dialect(path, constants)?;
    Ok(dialect.registration_snippet(&constants.inject_task_name, &constants.inject_task_type))
}
