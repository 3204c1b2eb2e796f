//! Command handlers; each returns the process exit code

use super::commands::{InjectArgs, SnippetArgs};
use super::output::{OutputFormat, OutputFormatter};
use crate::config::{ConfigOverrides, StepConfig, StepConstants};
use crate::error::StepError;
use crate::gradle::snippet_for_path;
use crate::pipeline::{InjectionContext, InjectionOrchestrator, PipelineReport};
use crate::progress::LoggingHandler;
use tracing::{debug, error, warn, Level};

/// Loads the configuration and runs the injection pipeline.
///
/// `log_level` is the level logging was initialized with.
pub fn run_inject(
    args: &InjectArgs,
    log_level: Level,
    constants: StepConstants,
) -> Result<PipelineReport, StepError> {
    let overrides = ConfigOverrides {
        project_location: args.project_location.clone(),
        gradle_options: args.gradle_options.clone(),
        step_source_dir: args.step_source_dir.clone(),
        log_level: Some(log_level.to_string()),
    };
    let config = StepConfig::load(&constants, &overrides)?;
    debug!("{}", config);

    if !config.collector_token_present {
        warn!(
            "{} is not set, collected traces will not be uploaded",
            constants.collector_token_env
        );
    }

    let mut context = InjectionContext::from_config(&config, constants, args.build_script.clone())?;
    InjectionOrchestrator::new(Some(Box::new(LoggingHandler)))
        .with_verification(args.verify)
        .execute(&mut context)
}

/// Runs `inject` and prints its report.
///
/// Stdout carries one `==> Executing:` line per wrapper run, then the report.
/// In JSON mode the report is a single document after the last echo line.
pub fn handle_inject(args: &InjectArgs, log_level: Level) -> i32 {
    let formatter = OutputFormatter::new(OutputFormat::from(args.format));

    match run_inject(args, log_level, StepConstants::default()) {
        Ok(report) => match formatter.format(&report) {
            Ok(output) => {
                println!("{}", output);
                0
            }
            Err(e) => {
                error!("{:#}", e);
                1
            }
        },
        Err(e) => {
            error!("{}", e);
            match formatter.format_error(&e) {
                Ok(output) => eprintln!("{}", output),
                Err(format_err) => eprintln!("Error: {} ({:#})", e, format_err),
            }
            1
        }
    }
}

pub fn handle_snippet(args: &SnippetArgs) -> i32 {
    match snippet_for_path(&args.build_script, &StepConstants::default()) {
        Ok(snippet) => {
            println!("{}", snippet.trim_start_matches('\n'));
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
