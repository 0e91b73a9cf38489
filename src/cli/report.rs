//! Summary lines printed after a command.
//!
//! Notifications raised during a command are printed by the terminal host as they
//! happen; this module only reports the final result on stderr, keeping stdout for
//! the delivered key.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{CommandOutcome, KeyDelivery};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(outcome: &CommandOutcome, verbose: bool) {
    print_to(outcome, verbose, &mut io::stderr().lock());
}

/// Print the summary to a custom writer.
pub fn print_to<W: Write>(outcome: &CommandOutcome, verbose: bool, writer: &mut W) {
    let line = match outcome {
        CommandOutcome::Completed { key, delivery } => {
            let detail = match delivery {
                Some(KeyDelivery::Inserted) => " and inserted it",
                Some(KeyDelivery::Copied) | None => "",
            };
            format!("{} {}", SUCCESS_MARK.green(), format!("Done: {key}{detail}").green())
        }
        CommandOutcome::Failed(message) => format!("{} {}", FAILURE_MARK.red(), message.red()),
        // already reported through a notification
        CommandOutcome::Cancelled | CommandOutcome::NothingFound => {
            if !verbose {
                return;
            }
            format!("{} {}", FAILURE_MARK.red(), "Nothing changed".red())
        }
    };
    let _ = writeln!(writer, "{}", line);
}
