//! # nic-cli: Command-Line Driver for the NIC Automaton
//!
//! Provides the `nic` binary over [`nic_dfa`].
//!
//! ## Subcommands
//!
//! - `nic check` - Classify one or more inputs (exit 0 iff all accepted).
//! - `nic trace` - Step-by-step execution of one input.
//! - `nic step` - Apply the transition function once.
//! - `nic suite` - Run the regression table plus any configured cases.
//! - `nic describe` - Formal definition as a table, DOT graph, or JSON.
//! - `nic interactive` - Read inputs from stdin until `quit`.
//!
//! Global flags: `--format text|json`, `--config <file.yaml>`, `-v` (repeatable).
//!
//! ```bash
//! nic check 991234567V 200012345678
//! nic trace 99123X4567
//! nic --format json suite --builtin-only
//! nic describe --as dot | dot -Tsvg > nic.svg
//! ```

pub mod check;
pub mod config;
pub mod describe;
pub mod interactive;
pub mod step;
pub mod suite;
pub mod trace;

use std::path::Path;

use anyhow::Result;

use config::{CliConfig, OutputFormat, Settings};

/// Load the optional config file and merge it with the command-line format flag.
pub fn load_settings(config: Option<&Path>, format_flag: Option<OutputFormat>) -> Result<Settings> {
    let file = match config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            CliConfig::load(path)?
        }
        None => CliConfig::default(),
    };
    Settings::resolve(file, format_flag)
}
