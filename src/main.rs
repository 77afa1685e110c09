use clap::Parser;
use lessonkit::cli::{execute_command, get_log_level, Cli};
use lessonkit::config::{load_config, LessonkitConfig};
use lessonkit::error::{ErrorExt, LessonkitError};
use tracing::{debug, error, trace};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<LessonkitError>() {
            Some(err) => {
                error!("{}", err.developer_message());
                eprintln!("Error: {}", err.user_message());
                std::process::exit(err.exit_code());
            }
            None => {
                error!("Fatal error: {:#}", e);
                eprintln!("Error: {e:#}");
                std::process::exit(1);
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().to_storage_error("Cannot determine working directory")?;
    let config = load_config(cli.config.as_deref(), &cwd)?;
    init_logging(cli.verbose, &config);

    debug!("lessonkit started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
    trace!("Resolved configuration: {:?}", config);

    execute_command(cli.command, &config)
}

fn init_logging(verbose: u8, config: &LessonkitConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(get_log_level(verbose, &config.log_level))
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2) // Show target module for -vv and above
        .with_line_number(verbose >= 2)
        .init();
}
