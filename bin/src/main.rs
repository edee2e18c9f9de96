//! tickbar CLI - Aggregate tick data into OHLCV candles.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use commands::aggregate::AggregateOptions;
use display::Format;

#[derive(Parser)]
#[command(name = "tickbar")]
#[command(about = "Aggregate timestamp,price,volume ticks into OHLCV candles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a tick file into candles
    Aggregate {
        /// Input file of `timestamp,price,volume` records, or `-` for stdin
        input: PathBuf,

        /// Bar width (e.g., 13s, 1m, 500ms, h1). Defaults to the config file or 1m.
        #[arg(short, long)]
        bar: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fold out-of-order ticks into the open candle instead of failing
        #[arg(long)]
        lenient: bool,

        /// JSON file with aggregator settings
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write CSV open times as integer nanoseconds
        #[arg(long)]
        nanos: bool,
    },

    /// Generate a synthetic tick stream
    Generate {
        /// Number of ticks to generate
        count: usize,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Random seed
        #[arg(long, default_value_t = tickbar_lib::TickGenerator::DEFAULT_SEED)]
        seed: u64,
    },
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Aggregate {
            input,
            bar,
            format,
            output,
            lenient,
            config,
            nanos,
        } => commands::aggregate::aggregate(&AggregateOptions {
            input,
            bar,
            format,
            output,
            lenient,
            config,
            nanos,
            quiet: cli.quiet,
        }),
        Commands::Generate {
            count,
            output,
            seed,
        } => commands::generate::generate(count, output.as_deref(), seed, cli.quiet),
    }
}
