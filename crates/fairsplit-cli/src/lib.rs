#![deny(warnings)]
//! fairsplit command line
//!
//! Wires configuration, logging, bill files and the interactive session
//! around the allocation core in `fairsplit-calculator`.

use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use fairsplit_calculator::{Bill, Summary, SummaryOptions};

pub mod bill_file;
pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod tracing_setup;

use bill_file::{BillFile, ParticipantRecord};
use cli::{Commands, ComputeArgs, InteractiveArgs, parse_item};
use config::{FairsplitConfig, OutputFormat};
use error::CliResult;
use session::Session;

/// Executes one CLI command against stdin/stdout.
pub fn run(command: Commands, config: &FairsplitConfig) -> CliResult<()> {
    match command {
        Commands::Compute(args) => {
            let today = Local::now().date_naive();
            let output = compute(&args, config, today)?;
            io::stdout().write_all(output.as_bytes())?;
        }
        Commands::Interactive(args) => {
            let stdin = io::stdin();
            interactive(&args, config, stdin.lock(), io::stdout())?;
        }
        Commands::Example => {
            println!("{}", BillFile::example().to_json_pretty()?);
        }
    }
    Ok(())
}

/// Builds the bill described by `args` and renders its split.
pub fn compute(args: &ComputeArgs, config: &FairsplitConfig, today: NaiveDate) -> CliResult<String> {
    let mut file = match &args.input {
        Some(path) => BillFile::read(path)?,
        None => BillFile::default(),
    };

    for item in &args.items {
        let (label, amount) = parse_item(item)?;
        file.participants.push(ParticipantRecord { id: None, label, amount });
    }
    let mut bill = file.into_bill()?;

    if let Some(surcharge) = &args.surcharge {
        bill.set_surcharge(surcharge.as_str());
    }
    if let Some(discount) = &args.discount {
        bill.set_discount(discount.as_str());
    }

    let allocation = bill.allocate();
    info!(
        participants = allocation.results.len(),
        adjusted_total = allocation.adjusted_total,
        "bill split"
    );
    if allocation.is_unallocated() {
        debug!(adjusted_total = allocation.adjusted_total, "no item amounts; total left unallocated");
    }

    let options = summary_options(config, (!args.no_date).then_some(today));
    let output = match args.format.unwrap_or(config.display.format) {
        OutputFormat::Text => Summary::render(&allocation, &options),
        OutputFormat::Table => Summary::table(&allocation, &options),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&allocation)?;
            json.push('\n');
            json
        }
    };
    Ok(output)
}

/// Runs an interactive session, starting from a bill file or a fresh bill.
pub fn interactive<R: BufRead, W: Write>(
    args: &InteractiveArgs,
    config: &FairsplitConfig,
    input: R,
    output: W,
) -> CliResult<Bill> {
    let bill = match &args.input {
        Some(path) => BillFile::read(path)?.into_bill()?,
        None => Bill::new(),
    };
    let today = Local::now().date_naive();
    let mut session = Session::new(bill, summary_options(config, Some(today)), input, output);
    session.run()?;
    Ok(session.bill().clone())
}

/// Summary settings from configuration; `date` is dropped when the
/// configuration turns dates off.
pub fn summary_options(config: &FairsplitConfig, date: Option<NaiveDate>) -> SummaryOptions {
    SummaryOptions {
        title: config.display.title.clone(),
        placeholder_label: config.display.placeholder_label.clone(),
        date: date.filter(|_| config.display.include_date),
    }
}
