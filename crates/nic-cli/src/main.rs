//! # nic CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nic_cli::check::{run_check, CheckArgs};
use nic_cli::config::OutputFormat;
use nic_cli::describe::{run_describe, DescribeArgs};
use nic_cli::interactive::{run_interactive, InteractiveArgs};
use nic_cli::load_settings;
use nic_cli::step::{run_step, StepArgs};
use nic_cli::suite::{run_suite, SuiteArgs};
use nic_cli::trace::{run_trace, TraceArgs};

/// Sri Lankan NIC validator.
///
/// Classifies strings as old-format (9 digits + V/X), new-format
/// (12 digits), or rejected, using a deterministic finite automaton.
#[derive(Parser, Debug)]
#[command(name = "nic", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file).
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify one or more NIC strings.
    Check(CheckArgs),

    /// Show every transition taken on one input.
    Trace(TraceArgs),

    /// Apply the transition function to a single state and character.
    Step(StepArgs),

    /// Run the regression suite.
    Suite(SuiteArgs),

    /// Print the formal automaton definition.
    Describe(DescribeArgs),

    /// Read NIC strings from stdin until `quit`.
    Interactive(InteractiveArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so JSON on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("nic CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = load_settings(cli.config.as_deref(), cli.format).and_then(|settings| {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let code = match cli.command {
            Commands::Check(args) => run_check(&args, &settings, &mut out),
            Commands::Trace(args) => run_trace(&args, &settings, &mut out),
            Commands::Step(args) => run_step(&args, &settings, &mut out),
            Commands::Suite(args) => run_suite(&args, &settings, &mut out),
            Commands::Describe(args) => run_describe(&args, &settings, &mut out),
            Commands::Interactive(args) => {
                run_interactive(&args, &settings, std::io::stdin().lock(), &mut out)
            }
        }?;
        out.flush()?;
        Ok(code)
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
