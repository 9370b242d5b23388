//! Lattice CLI - binomial option pricing from the command line
//!
//! # Commands
//!
//! - `lattice price` - Price one option from flags
//! - `lattice demo` - Price the three reference scenarios
//! - `lattice batch --file <TOML>` - Price every `[[scenario]]` in a file
//! - `lattice check` - Print the effective configuration
//!
//! Configuration comes from `--config <FILE>`, `LATTICE_*` environment
//! variables and global flags, in increasing priority. `RUST_LOG` overrides
//! the configured log level.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod report;

pub use error::{CliError, Result};

use commands::price::PriceArgs;
use config::{build_config, ConfigArgs, LogLevel};

/// Binomial lattice option pricer
#[derive(Parser)]
#[command(name = "lattice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single option
    Price(PriceArgs),

    /// Price the reference scenarios
    Demo,

    /// Price every scenario of a TOML file
    Batch {
        /// Path to the scenario file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Check configuration
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_args = ConfigArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level,
        verbose: cli.verbose,
    };
    let config = build_config(&config_args)?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        log_level = %config.log_level,
        default_steps = config.default_steps,
        format = %config.format,
        allow_arbitrage = config.allow_arbitrage,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Price(args) => commands::price::run(&args, &config),
        Commands::Demo => commands::demo::run(&config),
        Commands::Batch { file } => commands::batch::run(&file, &config),
        Commands::Check => commands::check::run(&config, cli.config.as_deref()),
    }
}
