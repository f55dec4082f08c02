//! Application entry point and dispatch.

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;

use crate::config::AppConfig;
use crate::repl::Repl;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        write_completion(shell, &mut io::stdout().lock());
        return Ok(());
    }

    let limits = config.limits()?;
    tracing::debug!(
        display_limit = limits.display_limit(),
        max_length = limits.max_length(),
        "starting REPL"
    );

    let repl = Repl::new(limits).quiet(config.quiet);
    let input = io::stdin().lock();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();
    repl.run(input, &mut out, &mut err)
        .context("console I/O failed")?;

    Ok(())
}

/// Write the completion script for the `fibseq` flags to `out`.
pub fn write_completion(shell: Shell, out: &mut dyn io::Write) {
    let mut cmd = AppConfig::command();
    clap_complete::generate(shell, &mut cmd, "fibseq", out);
}
