use clap::Parser;
use tracing::{error, info};

use fairsplit_cli::cli::Cli;
use fairsplit_cli::config::FairsplitConfig;
use fairsplit_cli::tracing_setup::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = FairsplitConfig::load(cli.config.as_deref())?;
    if cli.log_json {
        config.logging.json = true;
    }

    // Initialize tracing with structured logging
    init_tracing(&config.logging)?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting fairsplit");
    config.log_source();

    if let Err(e) = fairsplit_cli::run(cli.command, &config) {
        error!(category = e.category(), "{e}");
        return Err(e.into());
    }
    Ok(())
}
