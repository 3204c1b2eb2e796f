use trace_injector::cli::commands::{CliArgs, Commands, InjectArgs};
use trace_injector::cli::handlers::{handle_inject, handle_snippet};
use trace_injector::util::{init_logging, LoggingConfig};
use trace_injector::VERSION;

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    let logging = LoggingConfig::from_flags(args.log_level.as_deref(), args.verbose, args.quiet);
    let log_level = logging.level;
    init_logging(logging);

    debug!("trace-injector v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Some(Commands::Inject(inject_args)) => handle_inject(inject_args, log_level),
        Some(Commands::Snippet(snippet_args)) => handle_snippet(snippet_args),
        None => handle_inject(&InjectArgs::default(), log_level),
    };

    std::process::exit(exit_code);
}
