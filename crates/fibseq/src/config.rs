//! Application configuration from CLI flags and environment.

use clap::Parser;

use fibseq_core::{FibError, SequenceLimits, DEFAULT_DISPLAY_LIMIT, DEFAULT_MAX_LENGTH};

/// FibSeq — Interactive Fibonacci sequence generator.
///
/// Enter a count at the prompt to print that many Fibonacci numbers.
/// Long sequences are written to `fibs-<count>.txt` in the working directory.
#[derive(Parser, Debug)]
#[command(name = "fibseq", version, about)]
pub struct AppConfig {
    /// Longest sequence printed to the console; longer ones go to a file.
    #[arg(long, default_value_t = DEFAULT_DISPLAY_LIMIT, env = "FIBSEQ_DISPLAY_LIMIT")]
    pub display_limit: usize,

    /// Longest sequence that will be produced at all.
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH, env = "FIBSEQ_MAX_LENGTH")]
    pub max_length: usize,

    /// Skip the welcome banner and help text.
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Build the sequence limits, rejecting inconsistent values.
    pub fn limits(&self) -> Result<SequenceLimits, FibError> {
        SequenceLimits::new(self.display_limit, self.max_length)
    }

    /// Default log level for the subscriber.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
