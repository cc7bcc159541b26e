//! Implementation of the `compositor replay` command.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use compositor::types::PlainValue;
use miette::{IntoDiagnostic, Result, WrapErr};
use owo_colors::OwoColorize;

use super::scenario::{replay, ReplayReport, Scenario};
use crate::output::ScenarioDiagnostic;

/// Arguments for the replay command.
#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Path to the scenario JSON file
    pub scenario: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Read and parse a scenario file.
///
/// Parse errors carry the file content so miette can point at the
/// offending line.
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read scenario: {}", path.display()))?;

    serde_json::from_str(&content).map_err(|e| {
        ScenarioDiagnostic::from_json_error(path, &content, &e).into()
    })
}

/// Run the replay command.
pub fn run_replay(args: ReplayArgs) -> Result<i32> {
    let scenario = load_scenario(&args.scenario)?;
    tracing::debug!(
        steps = scenario.steps.len(),
        path = %args.scenario.display(),
        "loaded scenario"
    );

    let report = replay(&scenario).into_diagnostic()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
    } else {
        print_report(&report);
    }

    if report.unknown.is_empty() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}

fn print_report(report: &ReplayReport) {
    for resolved in &report.resolved {
        println!(
            "{} {} = {}",
            format!("[{}]", resolved.step).dimmed(),
            resolved.name.cyan(),
            display_value(&resolved.value)
        );
    }

    for unknown in &report.unknown {
        eprint!(
            "{} step {}: unknown variable '{}'",
            "error:".red().bold(),
            unknown.step,
            unknown.name
        );
        if unknown.suggestions.is_empty() {
            eprintln!();
        } else {
            eprintln!(", did you mean: {}?", unknown.suggestions.join(", "));
        }
    }
}

fn display_value(value: &PlainValue) -> String {
    match value {
        PlainValue::Bool(b) => b.to_string(),
        PlainValue::Integer(n) => n.to_string(),
        PlainValue::Number(n) => n.to_string(),
        PlainValue::Text(s) => format!("{s:?}"),
    }
}
