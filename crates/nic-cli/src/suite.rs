//! # Suite Subcommand
//!
//! Runs a table of literal inputs with expected outcomes and reports
//! PASS/FAIL per row. The built-in table covers both accepted formats, the
//! branch at the ninth character, trailing characters, and common
//! out-of-alphabet input. Extra rows come from the config file.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};

use nic_core::Classification;
use nic_dfa::classify;

use crate::config::{OutputFormat, Settings};
use crate::trace::write_trace;

/// Inputs traced step by step after the table when `--demo` is given.
pub const DEMO_INPUTS: [&str; 3] = ["991234567V", "200012345678", "99123X4567"];

/// Arguments for the `suite` subcommand.
#[derive(Args, Debug, Default)]
pub struct SuiteArgs {
    /// Skip cases from the config file.
    #[arg(long)]
    pub builtin_only: bool,

    /// After the table, trace the demo inputs step by step.
    #[arg(long)]
    pub demo: bool,
}

/// One row of the regression table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteCase {
    /// Input string.
    pub input: String,
    /// Expected outcome.
    pub expected: Classification,
    /// What the row exercises.
    pub description: String,
}

impl SuiteCase {
    /// Build a case.
    pub fn new(input: &str, expected: Classification, description: &str) -> Self {
        Self {
            input: input.to_string(),
            expected,
            description: description.to_string(),
        }
    }
}

/// Outcome of one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    /// The case that was run.
    #[serde(flatten)]
    pub case: SuiteCase,
    /// What the automaton returned.
    pub actual: Classification,
    /// Whether `actual == expected`.
    pub passed: bool,
}

/// Whole-suite report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    /// Number of passing rows.
    pub passed: usize,
    /// Number of rows.
    pub total: usize,
    /// Per-row results, in table order.
    pub results: Vec<CaseResult>,
}

impl SuiteReport {
    /// Whether every row passed.
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// Pass rate as a percentage. An empty suite counts as fully passing.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.passed as f64 / self.total as f64 * 100.0
        }
    }
}

/// The built-in regression table.
pub fn builtin_cases() -> Vec<SuiteCase> {
    use Classification::{NewFormatAccepted as New, OldFormatAccepted as Old, Rejected};

    vec![
        // Old format: 9 digits + V/X
        SuiteCase::new("991234567V", Old, "Valid old format"),
        SuiteCase::new("123456789X", Old, "Valid old format with X"),
        SuiteCase::new("987654321V", Old, "Valid old format"),
        SuiteCase::new("000000000V", Old, "Valid old format with zeros"),
        // New format: 12 digits
        SuiteCase::new("200012345678", New, "Valid new format"),
        SuiteCase::new("199812345678", New, "Valid new format"),
        SuiteCase::new("200512345678", New, "Valid new format"),
        SuiteCase::new("000000000000", New, "Valid new format with zeros"),
        // Rejections
        SuiteCase::new("99123X4567", Rejected, "X in wrong position (should be at end)"),
        SuiteCase::new("991234567", Rejected, "Missing V/X terminator"),
        SuiteCase::new("991234567VV", Rejected, "Extra character after V"),
        SuiteCase::new("2000123456789", Rejected, "13 digits (too long for new format)"),
        SuiteCase::new("20001234567", Rejected, "11 digits (too short for new format)"),
        SuiteCase::new("99123456V", Rejected, "Only 8 digits before V"),
        SuiteCase::new("A91234567V", Rejected, "Letter in digit position"),
        SuiteCase::new("9912345678", Rejected, "10 digits (ambiguous length)"),
        SuiteCase::new("", Rejected, "Empty string"),
        SuiteCase::new("ABCDEFGHIJ", Rejected, "All letters"),
        SuiteCase::new("991234567Y", Rejected, "Invalid letter Y (not V or X)"),
        SuiteCase::new("99 1234567V", Rejected, "Contains space"),
        SuiteCase::new("991-234-567V", Rejected, "Contains hyphens"),
        SuiteCase::new("99123456V7", Rejected, "Digit after V"),
    ]
}

/// Run `cases` through the automaton.
pub fn run_cases(cases: &[SuiteCase]) -> SuiteReport {
    let results: Vec<CaseResult> = cases
        .iter()
        .map(|case| {
            let actual = classify(&case.input);
            CaseResult {
                case: case.clone(),
                actual,
                passed: actual == case.expected,
            }
        })
        .collect();
    let passed = results.iter().filter(|r| r.passed).count();
    SuiteReport {
        passed,
        total: results.len(),
        results,
    }
}

/// Execute the suite subcommand. Returns exit code 0 only if every row passes.
pub fn run_suite(args: &SuiteArgs, settings: &Settings, out: &mut dyn Write) -> Result<u8> {
    let mut cases = builtin_cases();
    if !args.builtin_only {
        cases.extend(settings.extra_cases.iter().cloned());
    }
    tracing::debug!(cases = cases.len(), "running suite");

    let report = run_cases(&cases);
    for failed in report.results.iter().filter(|r| !r.passed) {
        tracing::warn!(
            input = %failed.case.input,
            expected = %failed.case.expected,
            actual = %failed.actual,
            "suite case failed"
        );
    }

    match settings.format {
        OutputFormat::Text => {
            write_report(out, &report)?;
            if args.demo {
                for input in DEMO_INPUTS {
                    writeln!(out)?;
                    write_trace(out, &nic_dfa::trace(input))?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(if report.all_passed() { 0 } else { 1 })
}

fn write_report(out: &mut dyn Write, report: &SuiteReport) -> std::io::Result<()> {
    let rule = "-".repeat(70);
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{:<3} {:<16} {:<20} {:<20} Status",
        "#", "Input", "Expected", "Result"
    )?;
    writeln!(out, "{rule}")?;
    for (i, r) in report.results.iter().enumerate() {
        // Classification's Display does not pad, so render to a String first.
        writeln!(
            out,
            "{:<3} {:<16} {:<20} {:<20} {}",
            i + 1,
            r.case.input,
            r.case.expected.to_string(),
            r.actual.to_string(),
            if r.passed { "PASS" } else { "FAIL" }
        )?;
        if !r.passed && !r.case.description.is_empty() {
            writeln!(out, "    Description: {}", r.case.description)?;
        }
    }
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "Test Summary: {}/{} tests passed ({:.1}%)",
        report.passed,
        report.total,
        report.pass_rate()
    )?;
    Ok(())
}
