use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Injects the trace task into an Android project's Gradle build
#[derive(Parser, Debug)]
#[command(
    name = "trace-injector",
    about = "Injects the trace task into an Android project's Gradle build",
    version,
    long_about = "trace-injector registers the trace task in the project's root build script, \
                  installs the task source into buildSrc and runs it through the project's \
                  Gradle wrapper. Without a subcommand it runs `inject` with inputs taken \
                  from the environment."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Inject and run the trace task",
        long_about = "Appends the task registration to the root build script, copies the task \
                      source into buildSrc and runs the task with the Gradle wrapper.\n\n\
                      Examples:\n  \
                      trace-injector inject\n  \
                      trace-injector inject --project-location ./android\n  \
                      trace-injector inject --verify --format json"
    )]
    Inject(InjectArgs),

    #[command(
        about = "Print the registration snippet for a build script",
        long_about = "Prints the text that `inject` would append to the given build script. \
                      No file is read or modified."
    )]
    Snippet(SnippetArgs),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct InjectArgs {
    #[arg(
        short = 'p',
        long,
        value_name = "DIR",
        help = "Root directory of the Gradle project (overrides $project_location)"
    )]
    pub project_location: Option<PathBuf>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Build script to modify (defaults to the project's root build.gradle[.kts])"
    )]
    pub build_script: Option<PathBuf>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Directory the step is installed in (overrides $BITRISE_STEP_SOURCE_DIR)"
    )]
    pub step_source_dir: Option<PathBuf>,

    #[arg(
        long,
        value_name = "OPTIONS",
        allow_hyphen_values = true,
        help = "Extra options for the Gradle wrapper (overrides $gradle_options)"
    )]
    pub gradle_options: Option<String>,

    #[arg(long, help = "Run the verifyTrace task after injecting")]
    pub verify: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct SnippetArgs {
    #[arg(value_name = "BUILD_SCRIPT", help = "Path of the build script")]
    pub build_script: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormatArg {
    Json,
    #[default]
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        let args = CliArgs::parse_from(["trace-injector"]);
        assert!(args.command.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_default_inject_args() {
        let args = CliArgs::parse_from(["trace-injector", "inject"]);
        match args.command {
            Some(Commands::Inject(inject_args)) => {
                assert_eq!(inject_args.format, OutputFormatArg::Human);
                assert!(inject_args.project_location.is_none());
                assert!(inject_args.build_script.is_none());
                assert!(!inject_args.verify);
            }
            _ => panic!("Expected Inject command"),
        }
    }

    #[test]
    fn test_inject_with_options() {
        let args = CliArgs::parse_from([
            "trace-injector",
            "inject",
            "-p",
            "/work/app",
            "--gradle-options",
            "--offline --stacktrace",
            "--verify",
            "--format",
            "json",
        ]);
        match args.command {
            Some(Commands::Inject(inject_args)) => {
                assert_eq!(inject_args.project_location, Some(PathBuf::from("/work/app")));
                assert_eq!(
                    inject_args.gradle_options.as_deref(),
                    Some("--offline --stacktrace")
                );
                assert!(inject_args.verify);
                assert_eq!(inject_args.format, OutputFormatArg::Json);
            }
            _ => panic!("Expected Inject command"),
        }
    }

    #[test]
    fn test_snippet_requires_path() {
        assert!(CliArgs::try_parse_from(["trace-injector", "snippet"]).is_err());

        let args = CliArgs::parse_from(["trace-injector", "snippet", "build.gradle.kts"]);
        match args.command {
            Some(Commands::Snippet(snippet_args)) => {
                assert_eq!(snippet_args.build_script, PathBuf::from("build.gradle.kts"));
            }
            _ => panic!("Expected Snippet command"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = CliArgs::try_parse_from(["trace-injector", "-q", "-v"]);
        assert!(result.is_err());
    }
}
