use clap::{Parser, Subcommand};
use peek_core::cli::conf::ConfigCmd;
use peek_core::cli::dashboard::DashboardArgs;
use peek_core::cli::{self, resolve_config};
use peek_core::conf::{DEFAULT_CONFIG_FILE, PeekConfig};
use peek_core::logging::{default_log_format, init_file_logging, init_logging};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "peek",
    version,
    about = "peek: live statistics for nginx access logs"
)]
struct Cli {
    /// Path to the peek config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ingest the access log into the store and exit
    Ingest {
        /// Access log to read (overrides the config file)
        #[arg(long)]
        log: Option<PathBuf>,
    },

    /// Show the live statistics dashboard (default)
    Dashboard {
        /// Access log to watch (overrides the config file)
        #[arg(long)]
        log: Option<PathBuf>,

        #[command(flatten)]
        args: DashboardArgs,
    },

    /// Print a one-off summary of the store
    Report {
        /// Access log to read (overrides the config file)
        #[arg(long)]
        log: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let opts = Cli::parse();

    if let Err(e) = run(opts) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(opts: Cli) -> anyhow::Result<()> {
    match opts.command {
        Some(Command::Config { cmd }) => {
            init_logging(default_log_format());
            cli::conf::run(cmd)
        }

        Some(Command::Ingest { log }) => {
            let config = resolve_config(&opts.config, log, |_| {})?;
            init_logging(log_format(&config));
            cli::ingest::run(&config)?;
            Ok(())
        }

        Some(Command::Report { log, json }) => {
            let config = resolve_config(&opts.config, log, |_| {})?;
            init_logging(log_format(&config));
            cli::report::run(&config, json)
        }

        Some(Command::Dashboard { log, args }) => dashboard(&opts.config, log, args),

        None => dashboard(&opts.config, None, DashboardArgs::default()),
    }
}

fn dashboard(path: &Path, log: Option<PathBuf>, args: DashboardArgs) -> anyhow::Result<()> {
    let config = resolve_config(path, log, |config| args.apply(config))?;

    // The terminal belongs to the dashboard; logs go to a file unless
    // a single frame is being printed.
    let _guard = if args.once {
        init_logging(log_format(&config));
        None
    } else {
        Some(init_file_logging(
            &config.logging.directory,
            log_format(&config),
        )?)
    };

    cli::dashboard::run(&config, &args)
}

fn log_format(config: &PeekConfig) -> peek_core::logging::LogFormat {
    config.logging.format.unwrap_or_else(default_log_format)
}
