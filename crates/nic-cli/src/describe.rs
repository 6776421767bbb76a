//! # Describe Subcommand
//!
//! Prints the automaton's formal definition as a text table, a Graphviz
//! DOT graph, or JSON: `nic describe --as dot | dot -Tsvg > nic.svg`.

use std::io::Write;

use anyhow::Result;
use clap::{Args, ValueEnum};

use nic_dfa::AutomatonDefinition;

use crate::config::{OutputFormat, Settings};

/// Arguments for the `describe` subcommand.
#[derive(Args, Debug, Default)]
pub struct DescribeArgs {
    /// Rendering for the definition. Defaults to `json` under the global
    /// `--format json`, otherwise `table`.
    #[arg(long = "as", id = "describe_format", value_enum)]
    pub render: Option<DescribeFormat>,
}

/// Rendering for the automaton definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DescribeFormat {
    /// Tuple components and the transition table.
    Table,
    /// Graphviz DOT graph (renderable with `dot -Tsvg`).
    Dot,
    /// JSON document.
    Json,
}

impl DescribeArgs {
    /// The rendering to use once the global output format is known.
    pub fn resolve(&self, settings: &Settings) -> DescribeFormat {
        self.render.unwrap_or(match settings.format {
            OutputFormat::Text => DescribeFormat::Table,
            OutputFormat::Json => DescribeFormat::Json,
        })
    }
}

/// Execute the describe subcommand.
pub fn run_describe(args: &DescribeArgs, settings: &Settings, out: &mut dyn Write) -> Result<u8> {
    let definition = AutomatonDefinition::new();
    match args.resolve(settings) {
        DescribeFormat::Table => write!(out, "{}", definition.to_table())?,
        DescribeFormat::Dot => write!(out, "{}", definition.to_dot())?,
        DescribeFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &definition)?;
            writeln!(out)?;
        }
    }
    Ok(0)
}
