//! Command-line definitions for `fairsplit`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use fairsplit_calculator::AmountInput;

use crate::config::OutputFormat;
use crate::error::{CliError, CliResult};

/// Split a shared bill in proportion to what everyone ordered
#[derive(Parser, Debug)]
#[command(name = "fairsplit", version)]
#[command(about = "Split a shared bill in proportion to what everyone ordered")]
pub struct Cli {
    /// Configuration file (defaults to FAIRSPLIT_CONFIG_PATH, then fairsplit.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a bill given on the command line or in a JSON file
    Compute(ComputeArgs),
    /// Edit a bill line by line and watch the split update
    Interactive(InteractiveArgs),
    /// Print a sample JSON bill file
    Example,
}

/// Arguments for compute command
#[derive(Args, Debug, Default)]
pub struct ComputeArgs {
    /// JSON bill file to start from
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Participant as LABEL=AMOUNT (or just AMOUNT); repeatable
    #[arg(long = "item", value_name = "LABEL=AMOUNT")]
    pub items: Vec<String>,

    /// Delivery fee, tip or other charge shared by everyone
    #[arg(long)]
    pub surcharge: Option<String>,

    /// Coupon or promotion shared by everyone
    #[arg(long)]
    pub discount: Option<String>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Leave the date out of the exported text
    #[arg(long)]
    pub no_date: bool,
}

/// Arguments for interactive command
#[derive(Args, Debug, Default)]
pub struct InteractiveArgs {
    /// JSON bill file to start from
    #[arg(long)]
    pub input: Option<PathBuf>,
}

/// Reads `LABEL=AMOUNT`, `=AMOUNT` or `AMOUNT`. The split happens at the last
/// `=`, so labels may contain one.
pub fn parse_item(value: &str) -> CliResult<(String, AmountInput)> {
    if value.trim().is_empty() {
        return Err(CliError::InvalidItem {
            value: value.to_string(),
            reason: "expected LABEL=AMOUNT".to_string(),
        });
    }

    match value.rsplit_once('=') {
        Some((label, amount)) => Ok((label.trim().to_string(), AmountInput::from(amount.trim()))),
        None => Ok((String::new(), AmountInput::from(value.trim()))),
    }
}
