//! # Trace Subcommand
//!
//! Prints every transition the automaton takes on one input, followed by
//! the verdict and the compact path notation.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use nic_dfa::{State, Trace};

use crate::config::{OutputFormat, Settings};

/// Arguments for the `trace` subcommand.
#[derive(Args, Debug)]
pub struct TraceArgs {
    /// NIC string to trace. May be empty (`""`).
    pub input: String,
}

/// Execute the trace subcommand. Returns 0 if the input was accepted.
pub fn run_trace(args: &TraceArgs, settings: &Settings, out: &mut dyn Write) -> Result<u8> {
    let trace = nic_dfa::trace(&args.input);
    tracing::debug!(input = %args.input, steps = trace.len(), result = %trace.classification, "traced");

    match settings.format {
        OutputFormat::Text => write_trace(out, &trace)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &trace)?;
            writeln!(out)?;
        }
    }
    Ok(if trace.classification.is_accepted() { 0 } else { 1 })
}

/// Render a trace as a step table.
pub fn write_trace(out: &mut dyn Write, trace: &Trace) -> std::io::Result<()> {
    writeln!(out, "Step-by-step DFA execution for input: '{}'", trace.input)?;
    writeln!(out, "{}", "-".repeat(50))?;
    writeln!(out, "Initial state: {}", State::Start)?;
    for t in &trace.transitions {
        writeln!(out, "{t}")?;
    }
    writeln!(out, "Final result: {}", trace.classification)?;
    writeln!(out, "Path: {trace}")?;
    if let Some(pos) = trace.rejected_at() {
        writeln!(out, "Rejected at position {pos}")?;
    }
    Ok(())
}
