use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use iplimit_stats::{commands, config};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "iplimit-stats")]
#[command(about = "IP limit ban log statistics and housekeeping", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the IP limit log (default: $XUI_LOG_FOLDER/3xipl.log)
    #[arg(long, global = true)]
    log_path: Option<String>,

    /// Log progress information to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log debug information to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize bans, unbans and the most banned emails
    Stats {
        /// Number of top emails to show (0 uses the default of 5)
        #[arg(long, default_value = "5")]
        top: usize,

        /// Output format
        #[arg(long, default_value = "table", value_parser = commands::stats::FORMATS)]
        format: String,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Create the log file and its directory if they are missing
    EnsureLog {
        /// Exit with an error instead of only logging a warning
        #[arg(long)]
        strict: bool,
    },

    /// Generate shell completion scripts
    GenerateCompletion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn init_logging(verbose: bool, debug: bool) {
    let crate_level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("iplimit_stats={crate_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    let log_path = config::resolve_log_path(cli.log_path.as_deref());

    match cli.command {
        Commands::Stats {
            top,
            format,
            output,
        } => commands::stats::run(&log_path, top, &format, output.as_deref()),
        Commands::EnsureLog { strict } => commands::ensure_log::run(&log_path, strict),
        Commands::GenerateCompletion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "iplimit-stats", &mut std::io::stdout());
            Ok(())
        }
    }
}
