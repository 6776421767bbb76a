//! # Step Subcommand
//!
//! Applies the transition function once: `nic step --state q9 --char V`.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use nic_core::Symbol;
use nic_dfa::{step, State, Transition};

use crate::config::{OutputFormat, Settings};

/// Arguments for the `step` subcommand.
#[derive(Args, Debug)]
pub struct StepArgs {
    /// Current state label (`q0`..`q13`, `qReject`).
    #[arg(long, default_value = "q0")]
    pub state: State,

    /// Character to consume.
    #[arg(long = "char")]
    pub character: char,
}

/// Execute the step subcommand. Returns 1 if the step lands in `qReject`.
pub fn run_step(args: &StepArgs, settings: &Settings, out: &mut dyn Write) -> Result<u8> {
    let transition = Transition {
        position: 0,
        character: args.character,
        symbol: Symbol::of(args.character),
        from: args.state,
        to: step(args.state, args.character),
    };
    tracing::debug!(from = %transition.from, to = %transition.to, "step");

    match settings.format {
        OutputFormat::Text => {
            writeln!(out, "{transition} [{}]", transition.symbol)?;
            if transition.to.is_accepting() {
                writeln!(out, "{} is accepting: {}", transition.to, transition.to.classification())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &transition)?;
            writeln!(out)?;
        }
    }
    Ok(if transition.to.is_dead() { 1 } else { 0 })
}
