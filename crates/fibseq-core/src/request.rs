//! Turning a REPL line into a sequence request.
//!
//! A line is either a command or a length request. Length requests pass the
//! validator, then a two-stage range guard: the input's character length is
//! compared against the length of the maximum first, so text that would
//! overflow a native integer is rejected before it is parsed; the parsed
//! value is compared against the maximum second.

use std::path::PathBuf;

use crate::constants::{
    DEFAULT_DISPLAY_LIMIT, DEFAULT_MAX_LENGTH, OUTPUT_FILE_EXTENSION, OUTPUT_FILE_PREFIX,
};
use crate::error::FibError;
use crate::validate::{validate, HintCode};

/// Strip leading and trailing characters at or below U+0020.
///
/// Only ASCII controls and the plain space are removed. Non-ASCII whitespace
/// such as U+00A0 is kept, so the validator can report it.
#[must_use]
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}

/// A REPL line, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `q`, `quit`, `x` or `exit`.
    Quit,
    /// `h` or `help`.
    Help,
    /// Anything else, taken as a sequence length.
    Request(&'a str),
}

impl<'a> Command<'a> {
    /// Classify an already trimmed line. Matching is whole-line and case-sensitive.
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        match line {
            "q" | "quit" | "x" | "exit" => Self::Quit,
            "h" | "help" => Self::Help,
            other => Self::Request(other),
        }
    }
}

/// Why a length request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The text is not a positive integer.
    #[error(transparent)]
    Format(#[from] HintCode),

    /// The request exceeds the configured maximum.
    #[error("The max sequence length is {max}.")]
    OverMaximum { max: usize },
}

impl RequestError {
    /// Stable short name for log fields: the hint code, or `OVER_MAXIMUM`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Format(hint) => hint.code(),
            Self::OverMaximum { .. } => "OVER_MAXIMUM",
        }
    }
}

/// Where a sequence of a given length is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Short enough to print.
    Console,
    /// Too long to print; written to this file name.
    File(PathBuf),
}

/// The display threshold and the hard maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceLimits {
    display_limit: usize,
    max_length: usize,
}

impl Default for SequenceLimits {
    fn default() -> Self {
        Self {
            display_limit: DEFAULT_DISPLAY_LIMIT,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl SequenceLimits {
    /// Build limits, rejecting a zero maximum or a display limit above it.
    pub fn new(display_limit: usize, max_length: usize) -> Result<Self, FibError> {
        if max_length == 0 {
            return Err(FibError::Config("max length must be positive".into()));
        }
        if display_limit > max_length {
            return Err(FibError::Config(format!(
                "display limit ({display_limit}) exceeds max length ({max_length})"
            )));
        }
        Ok(Self {
            display_limit,
            max_length,
        })
    }

    #[must_use]
    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Validate and range-check a length request, returning the count.
    pub fn parse_request(&self, input: &str) -> Result<usize, RequestError> {
        validate(input)?;

        let over = RequestError::OverMaximum {
            max: self.max_length,
        };
        if input.len() > self.max_length.to_string().len() {
            return Err(over);
        }
        let count: usize = input.parse().map_err(|_| over)?;
        if count > self.max_length {
            return Err(over);
        }
        Ok(count)
    }

    /// Pick the destination for a request of `count` numbers.
    #[must_use]
    pub fn destination(&self, count: usize) -> Destination {
        if count <= self.display_limit {
            Destination::Console
        } else {
            Destination::File(PathBuf::from(output_file_name(count)))
        }
    }
}

/// File name used for an oversized request, e.g. `fibs-5000.txt`.
#[must_use]
pub fn output_file_name(count: usize) -> String {
    format!("{OUTPUT_FILE_PREFIX}{count}.{OUTPUT_FILE_EXTENSION}")
}
