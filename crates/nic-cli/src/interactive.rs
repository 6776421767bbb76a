//! # Interactive Subcommand
//!
//! Line-oriented prompt. Each non-empty line is traced and classified;
//! `quit`, `exit`, or `q` (any case) ends the session, as does end of input.

use std::io::{BufRead, ErrorKind, Write};

use anyhow::{Context, Result};
use clap::Args;

use crate::config::{OutputFormat, Settings};
use crate::trace::write_trace;

/// Arguments for the `interactive` subcommand.
#[derive(Args, Debug, Default)]
pub struct InteractiveArgs {
    /// Do not print the prompt (useful when piping input).
    #[arg(long)]
    pub no_prompt: bool,
}

const EXIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

/// Execute the interactive subcommand against `input`/`out`.
///
/// In JSON mode each line produces one compact trace object (JSON Lines)
/// and no banner or prompt is written.
pub fn run_interactive<R: BufRead>(
    args: &InteractiveArgs,
    settings: &Settings,
    input: R,
    out: &mut dyn Write,
) -> Result<u8> {
    let json = settings.format == OutputFormat::Json;
    let prompt = !args.no_prompt && !json;

    if !json {
        writeln!(out, "Enter NIC numbers to test (or 'quit' to exit)")?;
        writeln!(out, "Formats: Old NIC (9 digits + V/X) | New NIC (12 digits)")?;
        writeln!(out, "{}", "-".repeat(50))?;
    }

    let mut lines = input.lines();
    let mut processed = 0usize;
    loop {
        if prompt {
            write!(out, "\nEnter NIC: ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = match line {
            Ok(line) => line,
            // `lines()` has already consumed the undecodable line.
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                tracing::warn!(error = %e, "skipping undecodable input line");
                if !json {
                    writeln!(out, "Error: {e}")?;
                }
                continue;
            }
            Err(e) => return Err(e).context("failed to read input line"),
        };
        let entry = line.trim();

        if EXIT_WORDS.iter().any(|w| entry.eq_ignore_ascii_case(w)) {
            break;
        }
        if entry.is_empty() {
            if !json {
                writeln!(out, "Please enter a valid NIC number.")?;
            }
            continue;
        }

        let trace = nic_dfa::trace(entry);
        processed += 1;
        tracing::info!(input = %entry, result = %trace.classification, "interactive check");

        if json {
            serde_json::to_writer(&mut *out, &trace)?;
            writeln!(out)?;
        } else {
            writeln!(out)?;
            write_trace(out, &trace)?;
            writeln!(out, "\nFinal Outcome: {}", trace.classification)?;
            writeln!(out, "{}", "-".repeat(30))?;
        }
    }

    if !json {
        writeln!(out, "\nTesting complete ({processed} checked).")?;
    }
    Ok(0)
}
