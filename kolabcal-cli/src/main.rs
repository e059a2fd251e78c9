mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::convert::{Direction, Kind};
use kolabcal_core::MapperConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kolabcal")]
#[command(about = "Convert Kolab calendar documents to and from the native incidence model")]
struct Cli {
    /// Config file to use instead of ~/.config/kolabcal/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a neutral JSON document to native form
    ToNative {
        kind: Kind,
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Convert a native JSON document to neutral form
    FromNative {
        kind: Kind,
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Convert a neutral document to native form and back
    RoundTrip {
        kind: Kind,
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Show the configuration in effect
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

// Diagnostics are rendered by the convert command itself
const DEFAULT_FILTER: &str = "warn,kolabcal_core::diagnostics=off";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter())
        .init();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => MapperConfig::config_path()?,
    };

    match cli.command {
        Commands::ToNative { kind, file } => {
            let config = MapperConfig::load(&config_path)?;
            commands::convert::run(Direction::ToNative, kind, file.as_deref(), config)
        }
        Commands::FromNative { kind, file } => {
            let config = MapperConfig::load(&config_path)?;
            commands::convert::run(Direction::FromNative, kind, file.as_deref(), config)
        }
        Commands::RoundTrip { kind, file } => {
            let config = MapperConfig::load(&config_path)?;
            commands::convert::run(Direction::RoundTrip, kind, file.as_deref(), config)
        }
        Commands::Config { init } => commands::config::run(&config_path, init),
    }
}
