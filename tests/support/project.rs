//! Scratch Android projects for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Wrapper script that succeeds and records its arguments in `gradlew.args`
pub const RECORDING_WRAPPER: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$(dirname "$0")/gradlew.args"
echo "BUILD SUCCESSFUL"
exit 0
"#;

/// Wrapper script that fails with a Gradle-like error on stderr
pub const FAILING_WRAPPER: &str = r#"#!/bin/sh
echo "> Task :injectTraceTask FAILED"
echo "FAILURE: Build failed with an exception." >&2
exit 1
"#;

pub fn fixture_path(category: &str, name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(category)
        .join(name)
}

/// Step source directory holding the bundled task source
pub fn step_fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/step")
}

pub fn step_task_source() -> PathBuf {
    step_fixture_dir().join("src/main/java/io/bitrise/trace/step/InjectTraceTask.java")
}

/// Writes an executable `gradlew` into `dir`.
pub fn write_wrapper(dir: &Path, body: &str) {
    let wrapper = dir.join("gradlew");
    fs::write(&wrapper, body).expect("Failed to write gradlew");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&wrapper).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&wrapper, perms).unwrap();
    }
}

/// A temporary copy of a fixture project
pub struct TestProject {
    pub dir: TempDir,
    pub script_name: String,
}

impl TestProject {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn script(&self) -> PathBuf {
        self.dir.path().join(&self.script_name)
    }

    pub fn script_content(&self) -> String {
        fs::read_to_string(self.script()).expect("Failed to read build script")
    }

    pub fn installed_task(&self) -> PathBuf {
        self.dir
            .path()
            .join("buildSrc/src/main/java/io/bitrise/trace/step/InjectTraceTask.java")
    }

    pub fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("gradlew.args"))
            .expect("gradlew was not run")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Copies `tests/fixtures/android/<name>` into a fresh temporary directory.
pub fn copy_fixture_project(name: &str) -> TestProject {
    let source = fixture_path("android", name);
    let dir = TempDir::new().expect("Failed to create temp dir");

    let mut script_name = None;
    for entry in fs::read_dir(&source).expect("Fixture project missing") {
        let entry = entry.unwrap();
        let file_name = entry.file_name().to_string_lossy().into_owned();
        fs::copy(entry.path(), dir.path().join(&file_name)).unwrap();
        if file_name.starts_with("build.gradle") {
            script_name = Some(file_name);
        }
    }

    TestProject {
        dir,
        script_name: script_name.expect("Fixture has no build script"),
    }
}
