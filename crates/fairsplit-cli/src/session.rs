//! Interactive bill editing
//!
//! A line-oriented stand-in for the original form: every edit recomputes the
//! split and prints the table again. Rows are addressed by their 1-based
//! position; the session maps positions to participant ids.

use std::io::{BufRead, Write};
use tracing::{debug, info};

use fairsplit_calculator::{Bill, ParticipantId, Summary, SummaryOptions};

use crate::error::CliResult;

/// An editing session over one bill, reading commands from `input`.
pub struct Session<R, W> {
    bill: Bill,
    options: SummaryOptions,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Starts a session on `bill`; nothing is read until [`Session::run`].
    pub fn new(bill: Bill, options: SummaryOptions, input: R, output: W) -> Self {
        Self { bill, options, input, output }
    }

    /// The bill as edited so far.
    pub fn bill(&self) -> &Bill {
        &self.bill
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> CliResult<()> {
        info!(participants = self.bill.len(), "interactive session started");
        writeln!(self.output, "Type 'help' for commands, 'quit' to exit.")?;
        self.show()?;

        while let Some(line) = self.prompt("fairsplit> ")? {
            if !self.execute(line.trim())? {
                break;
            }
        }

        info!("interactive session finished");
        Ok(())
    }

    /// Handles one command line. Returns false when the session should end.
    fn execute(&mut self, line: &str) -> CliResult<bool> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        debug!(command, "session command");

        match command {
            "" => {}
            "quit" | "exit" => return Ok(false),
            "help" => self.show_help()?,
            "show" => self.show()?,
            "export" => {
                let text = Summary::render(&self.bill.allocate(), &self.options);
                write!(self.output, "{text}")?;
            }
            "add" => {
                let mut words: Vec<&str> = rest.split_whitespace().collect();
                // a single word is a label unless it reads as a number
                let lone_number = words.len() == 1 && words[0].parse::<f64>().is_ok_and(f64::is_finite);
                let amount = if words.len() >= 2 || lone_number { words.pop().unwrap_or_default() } else { "" };
                match self.bill.add_participant(words.join(" "), amount) {
                    Ok(_) => self.show()?,
                    Err(e) => writeln!(self.output, "{e}")?,
                }
            }
            "name" => {
                let (row, label) = split_row(rest);
                if let Some(id) = self.row_id(row)? {
                    self.bill.set_label(id, label)?;
                    self.show()?;
                }
            }
            "amount" => {
                let (row, amount) = split_row(rest);
                if let Some(id) = self.row_id(row)? {
                    self.bill.set_amount(id, amount)?;
                    self.show()?;
                }
            }
            "rm" | "remove" => {
                if let Some(id) = self.row_id(rest)? {
                    if self.bill.remove_participant(id)? {
                        self.show()?;
                    } else {
                        writeln!(self.output, "A bill keeps at least one participant.")?;
                    }
                }
            }
            "fee" | "surcharge" => {
                self.bill.set_surcharge(rest);
                self.show()?;
            }
            "discount" => {
                self.bill.set_discount(rest);
                self.show()?;
            }
            "reset" => {
                let answer = self.prompt("Clear all participants and adjustments? [y/N] ")?;
                if matches!(answer.as_deref().map(str::trim), Some("y" | "Y" | "yes")) {
                    match self.bill.reset() {
                        Ok(()) => self.show()?,
                        Err(e) => writeln!(self.output, "{e}")?,
                    }
                } else {
                    writeln!(self.output, "Reset cancelled.")?;
                }
            }
            _ => writeln!(self.output, "Unknown command: '{line}'. Type 'help' for available commands.")?,
        }
        Ok(true)
    }

    fn prompt(&mut self, text: &str) -> CliResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn row_id(&mut self, row: &str) -> CliResult<Option<ParticipantId>> {
        let id = row
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.bill.participants().get(index))
            .map(|p| p.id);
        if id.is_none() {
            writeln!(self.output, "No row '{row}'. Rows are numbered from 1 to {}.", self.bill.len())?;
        }
        Ok(id)
    }

    fn show(&mut self) -> CliResult<()> {
        let table = Summary::table(&self.bill.allocate(), &self.options);
        write!(self.output, "{table}")?;
        Ok(())
    }

    fn show_help(&mut self) -> CliResult<()> {
        writeln!(self.output, "Available commands:")?;
        writeln!(self.output, "  add [label] [amount]  - Add a participant")?;
        writeln!(self.output, "  name <row> <label>    - Rename a participant")?;
        writeln!(self.output, "  amount <row> <value>  - Set a participant's item amount")?;
        writeln!(self.output, "  rm <row>              - Remove a participant")?;
        writeln!(self.output, "  fee <value>           - Set the shared surcharge")?;
        writeln!(self.output, "  discount <value>      - Set the shared discount")?;
        writeln!(self.output, "  show                  - Show the current split")?;
        writeln!(self.output, "  export                - Print the text summary")?;
        writeln!(self.output, "  reset                 - Start over")?;
        writeln!(self.output, "  quit                  - Exit the session")?;
        Ok(())
    }
}

fn split_row(rest: &str) -> (&str, &str) {
    match rest.split_once(char::is_whitespace) {
        Some((row, value)) => (row, value.trim()),
        None => (rest, ""),
    }
}
