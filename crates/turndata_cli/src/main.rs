//! TurnData CLI
//!
//! Command-line tools for turn data files.
//!
//! # Commands
//!
//! - `inspect` - Display the section header, block layout and statistics
//! - `dump` - Print per-edge turn records
//! - `verify` - Decode the whole file and compare its connectivity checksum
//! - `version` - Show version information

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Turn data file tools.
#[derive(Parser)]
#[command(name = "turndata")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the turn data file
    #[arg(global = true, short, long)]
    path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display section header, block layout and statistics
    Inspect {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print per-edge turn records
    Dump {
        /// Maximum number of records to dump
        #[arg(short, long)]
        limit: Option<usize>,

        /// Start from this edge id
        #[arg(short, long, default_value = "0")]
        offset: u32,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Verify the file decodes and matches a graph checksum
    Verify {
        /// Expected connectivity checksum (decimal or 0x-prefixed hex)
        #[arg(short, long, value_parser = parse_checksum)]
        checksum: u32,
    },

    /// Show version information
    Version,
}

fn parse_checksum(value: &str) -> Result<u32, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|e| format!("invalid checksum {value:?}: {e}"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Inspect { format } => {
            let path = cli.path.ok_or("Turn data file path required for inspect")?;
            commands::inspect::run(&path, &format)?;
        }
        Commands::Dump {
            limit,
            offset,
            format,
        } => {
            let path = cli.path.ok_or("Turn data file path required for dump")?;
            commands::dump::run(&path, limit, offset, &format)?;
        }
        Commands::Verify { checksum } => {
            let path = cli.path.ok_or("Turn data file path required for verify")?;
            commands::verify::run(&path, checksum)?;
        }
        Commands::Version => {
            println!("TurnData CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("TurnData Core v{}", turndata_core::VERSION);
        }
    }

    Ok(())
}
