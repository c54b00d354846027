//! CLI frontend for the Storyfeed story viewer.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sf",
    about = "Storyfeed: inspect feeds and play stories headlessly",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Overridden by SF_LOG.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in sample feed as JSON
    Sample {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load a feed file and report structural issues
    Check {
        /// Feed JSON file
        file: PathBuf,
    },

    /// List story groups and posts in a feed
    List {
        /// Feed JSON file
        file: PathBuf,
    },

    /// Play a feed's stories on a simulated clock
    Play {
        /// Feed JSON file (default: the sample feed)
        file: Option<PathBuf>,

        /// Group to start in
        #[arg(short, long)]
        group: Option<usize>,

        /// Story within the group to start at
        #[arg(short, long)]
        story: Option<usize>,

        /// Input script, e.g. "wait:500 down wait:2000 up right"
        #[arg(long)]
        script: Option<String>,

        /// Milliseconds between progress ticks
        #[arg(long, default_value = "50")]
        ms_per_tick: u64,

        /// Story duration in milliseconds (default: 100 ticks)
        #[arg(long)]
        duration_ms: Option<u64>,

        /// Drop stories that have already expired
        #[arg(long)]
        active_only: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env("SF_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Sample { output } => commands::sample::run(output.as_deref()),
        Commands::Check { file } => commands::check::run(&file),
        Commands::List { file } => commands::list::run(&file),
        Commands::Play {
            file,
            group,
            story,
            script,
            ms_per_tick,
            duration_ms,
            active_only,
        } => commands::play::run(commands::play::PlayOptions {
            file,
            group,
            story,
            script,
            ms_per_tick,
            duration_ms,
            active_only,
        }),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
