//! # Check Subcommand
//!
//! Classifies one or more inputs. Exit code is 0 only when every input is
//! accepted, so the command can gate scripts.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use nic_core::{Classification, NicFormat};
use nic_dfa::{run_observed, State, Trace, Transition, TracingObserver};

use crate::config::{OutputFormat, Settings};
use crate::trace::write_trace;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// NIC strings to classify.
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Print the step-by-step trace for each input.
    #[arg(long)]
    pub trace: bool,
}

/// Result for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// The input as given.
    pub input: String,
    /// Verdict.
    pub classification: Classification,
    /// Accepted format, if any.
    pub format: Option<NicFormat>,
    /// Final automaton state.
    pub final_state: State,
    /// Transitions, when tracing was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions: Option<Vec<Transition>>,
}

/// Classify `input`, optionally keeping the full trace.
pub fn check_one(input: &str, keep_trace: bool) -> CheckResult {
    let (classification, final_state, transitions) = if keep_trace {
        let trace = nic_dfa::trace(input);
        (trace.classification, trace.final_state, Some(trace.transitions))
    } else {
        let final_state = run_observed(input, &mut TracingObserver);
        (final_state.classification(), final_state, None)
    };
    tracing::debug!(input = %input, result = %classification, "classified");
    CheckResult {
        input: input.to_string(),
        classification,
        format: classification.format(),
        final_state,
        transitions,
    }
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, settings: &Settings, out: &mut dyn Write) -> Result<u8> {
    let keep_trace = args.trace || settings.trace;
    let results: Vec<CheckResult> = args
        .inputs
        .iter()
        .map(|input| check_one(input, keep_trace))
        .collect();

    match settings.format {
        OutputFormat::Text => {
            for r in &results {
                match &r.transitions {
                    Some(transitions) => {
                        let trace = Trace {
                            input: r.input.clone(),
                            transitions: transitions.clone(),
                            final_state: r.final_state,
                            classification: r.classification,
                        };
                        write_trace(out, &trace)?;
                        writeln!(out)?;
                    }
                    None => writeln!(out, "{:<16} {}", r.input, r.classification)?,
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &results)?;
            writeln!(out)?;
        }
    }

    let all_accepted = results.iter().all(|r| r.classification.is_accepted());
    Ok(if all_accepted { 0 } else { 1 })
}
