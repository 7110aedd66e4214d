use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Resolve UK postcodes and address lines to coordinates
///
/// Runs interactively if neither a postcode nor an address is given.
#[derive(Debug, Parser)]
#[command(name = "ukgeolocate", version, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub lookup: LookupArgs,

    /// Configuration file [default: ukgeolocate.toml]
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the EPC addresses database
    #[arg(long, global = true, value_name = "PATH")]
    pub epc_db: Option<PathBuf>,

    /// Path to the OS Open UPRN database
    #[arg(long, global = true, value_name = "PATH")]
    pub os_db: Option<PathBuf>,

    /// Minimum similarity of an accepted match within [0, 1]
    #[arg(long, global = true, value_parser = parse_threshold)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// UK postcode, e.g. "SW1A 2AA"
    #[arg(requires = "address")]
    pub postcode: Option<String>,

    /// First line of the address, e.g. "10 Downing Street"
    pub address: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that both databases are accessible
    Health {
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let threshold: f64 = s.parse().map_err(|err| format!("{err}"))?;
    crate::config::validate_threshold(threshold).map_err(|err| err.to_string())
}
