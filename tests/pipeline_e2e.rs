//! End-to-end injection tests
//!
//! Each test copies a fixture Android project into a temporary directory,
//! fakes its Gradle wrapper with a shell script and runs the full pipeline.
//! Tests that spawn freshly written scripts run serially.

#![cfg(unix)]

mod support;

use serial_test::serial;
use std::fs;
use support::project::{FAILING_WRAPPER, RECORDING_WRAPPER};
use support::{copy_fixture_project, step_fixture_dir, step_task_source, write_wrapper, TestProject};
use trace_injector::{
    Dialect, InjectionContext, InjectionOrchestrator, PipelineReport, StepConfig, StepConstants,
    StepError,
};

fn config_for(project: &TestProject, gradle_options: &str) -> StepConfig {
    StepConfig {
        project_location: project.path().to_path_buf(),
        gradle_options: gradle_options.to_string(),
        step_source_dir: step_fixture_dir(),
        collector_token_present: true,
        log_level: "info".to_string(),
    }
}

fn run(
    project: &TestProject,
    gradle_options: &str,
    verify: bool,
) -> Result<PipelineReport, StepError> {
    let config = config_for(project, gradle_options);
    let mut context = InjectionContext::from_config(&config, StepConstants::default(), None)?;
    InjectionOrchestrator::new(None)
        .with_verification(verify)
        .execute(&mut context)
}

#[test]
#[serial]
fn test_kotlin_project_end_to_end() {
    let project = copy_fixture_project("kotlin-app");
    let original = project.script_content();
    write_wrapper(project.path(), RECORDING_WRAPPER);

    let report = run(&project, "", false).expect("Injection failed");

    let content = project.script_content();
    assert!(content.starts_with(&original));
    assert!(content
        .ends_with("tasks.register<io.bitrise.trace.step.InjectTraceTask>(\"injectTraceTask\")"));

    assert_eq!(
        fs::read(project.installed_task()).unwrap(),
        fs::read(step_task_source()).unwrap()
    );

    let project_dir = project.path().canonicalize().unwrap();
    assert_eq!(
        project.recorded_args(),
        vec![
            "injectTraceTask".to_string(),
            "-p".to_string(),
            project_dir.display().to_string()
        ]
    );

    assert_eq!(report.dialect, Some(Dialect::Kotlin));
    assert_eq!(report.tasks_run, vec!["injectTraceTask"]);
    assert_eq!(
        report.installed_asset,
        Some(project_dir.join("buildSrc/src/main/java/io/bitrise/trace/step/InjectTraceTask.java"))
    );
}

#[test]
#[serial]
fn test_groovy_project_end_to_end() {
    let project = copy_fixture_project("groovy-app");
    write_wrapper(project.path(), RECORDING_WRAPPER);

    let report = run(&project, "", false).expect("Injection failed");

    assert!(project
        .script_content()
        .ends_with("\n\ntask injectTraceTask(type: io.bitrise.trace.step.InjectTraceTask)"));
    assert!(project.installed_task().is_file());
    assert_eq!(report.dialect, Some(Dialect::Groovy));
}

#[test]
#[serial]
fn test_gradle_options_are_forwarded() {
    let project = copy_fixture_project("groovy-app");
    write_wrapper(project.path(), RECORDING_WRAPPER);

    run(&project, "--offline  --stacktrace", false).expect("Injection failed");

    let args = project.recorded_args();
    assert_eq!(args[0], "injectTraceTask");
    assert_eq!(args[1], "-p");
    assert_eq!(&args[3..], ["--offline", "--stacktrace"]);
}

#[test]
#[serial]
fn test_verification_runs_after_injection() {
    let project = copy_fixture_project("kotlin-app");
    write_wrapper(project.path(), RECORDING_WRAPPER);

    let report = run(&project, "", true).expect("Injection failed");

    assert_eq!(report.tasks_run, vec!["injectTraceTask", "verifyTrace"]);
    // The recording wrapper keeps the arguments of its last run
    assert_eq!(project.recorded_args()[0], "verifyTrace");
}

#[test]
#[serial]
fn test_failing_task_keeps_file_changes() {
    let project = copy_fixture_project("kotlin-app");
    write_wrapper(project.path(), FAILING_WRAPPER);

    let result = run(&project, "", false);

    match result {
        Err(StepError::InjectedTaskFailed {
            task_type,
            stdout,
            stderr,
            ..
        }) => {
            assert_eq!(task_type, "io.bitrise.trace.step.InjectTraceTask");
            assert!(stdout.contains("> Task :injectTraceTask FAILED"));
            assert!(stderr.contains("FAILURE: Build failed with an exception."));
        }
        other => panic!("Expected InjectedTaskFailed, got {:?}", other.map(|r| r.tasks_run)),
    }

    // Earlier phases are not rolled back
    assert!(project.script_content().contains("tasks.register<"));
    assert!(project.installed_task().is_file());
}

#[test]
#[serial]
fn test_running_twice_registers_twice() {
    let project = copy_fixture_project("groovy-app");
    write_wrapper(project.path(), RECORDING_WRAPPER);

    run(&project, "", false).expect("First injection failed");
    let first_task = fs::read(project.installed_task()).unwrap();
    run(&project, "", false).expect("Second injection failed");

    let content = project.script_content();
    assert_eq!(content.matches("task injectTraceTask(type:").count(), 2);
    assert_eq!(fs::read(project.installed_task()).unwrap(), first_task);
}
