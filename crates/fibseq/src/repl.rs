//! The read-eval-print loop.
//!
//! Reads one line at a time, trims ASCII controls and spaces from both ends,
//! and either runs a command or treats it as a sequence length. Refused requests and write failures are reported to
//! the error stream and the loop carries on; only failures of the REPL's own
//! streams end it.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use fibseq_cli::messages::{self, INSTRUCTIONS};
use fibseq_cli::{ui, write_sequence, write_to_file};
use fibseq_core::{trim_line, Command, Destination, FibIterator, SequenceLimits};

use crate::version::version;

enum Flow {
    Continue,
    Quit,
}

/// Interactive Fibonacci REPL.
#[derive(Debug, Clone)]
pub struct Repl {
    limits: SequenceLimits,
    quiet: bool,
    output_dir: PathBuf,
}

impl Repl {
    /// Create a REPL writing oversized sequences to the working directory.
    #[must_use]
    pub fn new(limits: SequenceLimits) -> Self {
        Self {
            limits,
            quiet: false,
            output_dir: PathBuf::from("."),
        }
    }

    /// Skip the welcome banner and initial help.
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Directory that receives `fibs-<count>.txt` files.
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Run until a quit command or the end of `input`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading `input` or writing to `err` fails, or
    /// if `out` fails outside of sequence output. A failed sequence write is
    /// reported to `err` first; if `out` is still failing when it is flushed
    /// at the end of that line, the loop ends with that error.
    pub fn run<R, O, E>(&self, mut input: R, out: &mut O, err: &mut E) -> io::Result<()>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        if !self.quiet {
            writeln!(out, "{}", ui::header(&messages::welcome(version())))?;
            writeln!(out, "{}", messages::help(&self.limits))?;
            out.flush()?;
        }

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                tracing::debug!("end of input");
                break;
            }
            // Invalid UTF-8 becomes U+FFFD, which the validator reports as non-ASCII.
            let line: Cow<'_, str> = String::from_utf8_lossy(&buf);

            let flow = self.handle_line(trim_line(&line), out, err)?;
            out.flush()?;
            err.flush()?;
            if let Flow::Quit = flow {
                break;
            }
        }
        Ok(())
    }

    fn handle_line<O, E>(&self, line: &str, out: &mut O, err: &mut E) -> io::Result<Flow>
    where
        O: Write,
        E: Write,
    {
        match Command::parse(line) {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => writeln!(out, "{}", messages::help(&self.limits))?,
            Command::Request(text) => match self.limits.parse_request(text) {
                Ok(count) => self.produce(count, out, err)?,
                Err(reason) => {
                    tracing::debug!(input = text, code = reason.code(), "request refused");
                    writeln!(err, "{}", ui::warning(&messages::rejection(&reason)))?;
                }
            },
        }
        Ok(Flow::Continue)
    }

    fn produce<O, E>(&self, count: usize, out: &mut O, err: &mut E) -> io::Result<()>
    where
        O: Write,
        E: Write,
    {
        let values = FibIterator::new().take(count);
        let outcome = match self.limits.destination(count) {
            Destination::Console => {
                tracing::debug!(count, "writing sequence to console");
                write_sequence(out, values).and_then(|_| writeln!(out))
            }
            Destination::File(name) => self.produce_file(count, &name, values, out),
        };

        match outcome {
            Ok(()) => {
                writeln!(out)?;
                writeln!(out, "{INSTRUCTIONS}")?;
            }
            Err(cause) => {
                tracing::debug!(count, %cause, "sequence write failed");
                writeln!(err, "{}", ui::error(&messages::write_failed(&cause)))?;
                if let Err(e) = writeln!(out, "{INSTRUCTIONS}") {
                    tracing::debug!(error = %e, "could not repeat instructions");
                }
            }
        }
        Ok(())
    }

    fn produce_file<O, I>(&self, count: usize, name: &Path, values: I, out: &mut O) -> io::Result<()>
    where
        O: Write,
        I: Iterator<Item = num_bigint::BigUint>,
    {
        let path = self.output_dir.join(name);
        let written = write_to_file(&path, values)?;
        tracing::info!(path = %path.display(), written, "wrote sequence to file");
        writeln!(out, "{}", ui::success(&messages::file_written(count, name)))
    }
}
