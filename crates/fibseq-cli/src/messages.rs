//! Static texts shown by the REPL.

use std::fmt::Display;
use std::path::Path;

use fibseq_core::SequenceLimits;

/// Prompt repeated after every answer.
pub const INSTRUCTIONS: &str = "Please enter the desired number of Fibonacci numbers (q to quit):";

/// Framed welcome banner, e.g.
///
/// ```text
/// ----------------------------------------
/// Welcome to Fibonacci Sequence version 0.1.0
/// ----------------------------------------
/// ```
#[must_use]
pub fn welcome(version: &str) -> String {
    let title = format!("Welcome to Fibonacci Sequence version {version}");
    let rule = "-".repeat(title.chars().count());
    format!("{rule}\n{title}\n{rule}")
}

/// Detailed help, mentioning both limits.
#[must_use]
pub fn help(limits: &SequenceLimits) -> String {
    [
        "Quit by entering 'q' or 'quit'. See this message again with 'h' or 'help'.".to_string(),
        format!(
            "The maximum *displayable* number of Fibonacci numbers is {}.",
            limits.display_limit()
        ),
        format!(
            "Past this, the sequence will be written to disk up to {} numbers.",
            limits.max_length()
        ),
        "Please enter the desired number of Fibonacci numbers:".to_string(),
    ]
    .join("\n")
}

/// A refused request followed by the instructions.
#[must_use]
pub fn rejection(reason: &dyn Display) -> String {
    format!("{reason} {INSTRUCTIONS}")
}

/// Confirmation after an oversized request was written to disk.
#[must_use]
pub fn file_written(count: usize, path: &Path) -> String {
    format!(
        "Wrote the first {count} Fibonacci numbers to {}.",
        path.display()
    )
}

/// Report for a failed console or file write.
#[must_use]
pub fn write_failed(cause: &dyn Display) -> String {
    format!("Unable to write the Fibonacci sequence. Reason: {cause}")
}
