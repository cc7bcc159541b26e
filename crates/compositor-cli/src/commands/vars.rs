//! Implementation of the `compositor vars` command.

use clap::Args;
use compositor::compute_suggestions;
use compositor::namespace::{Variable, VariableNamespace};
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::table::{format_enum_table, format_variables_table, VariableRow};

/// Arguments for the vars command.
#[derive(Debug, Args)]
pub struct VarsArgs {
    /// Only list variables in this category (e.g. collection, keyCombo)
    #[arg(long)]
    pub category: Option<String>,

    /// Also list the enum tables
    #[arg(long)]
    pub tables: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one variable.
#[derive(Debug, Serialize)]
struct VariableJson {
    name: &'static str,
    #[serde(rename = "type")]
    type_name: String,
    id: u64,
}

/// Run the vars command.
pub fn run_vars(args: VarsArgs) -> Result<i32> {
    let namespace = VariableNamespace::declare().into_diagnostic()?;
    let selected = select(&namespace, args.category.as_deref());

    if selected.is_empty() {
        if let Some(category) = &args.category {
            let categories = categories(&namespace);
            let suggestions = compute_suggestions(category, categories.iter().copied());
            eprint!("{} unknown category '{}'", "error:".red().bold(), category);
            if suggestions.is_empty() {
                eprintln!();
            } else {
                eprintln!(", did you mean: {}?", suggestions.join(", "));
            }
            return Ok(exitcode::DATAERR);
        }
    }

    if args.json {
        let json: Vec<VariableJson> = selected
            .iter()
            .map(|variable| VariableJson {
                name: variable.name(),
                type_name: variable.type_name(),
                id: variable.id().as_u64(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
        return Ok(exitcode::OK);
    }

    let rows: Vec<VariableRow> = selected
        .iter()
        .map(|variable| VariableRow {
            name: variable.name(),
            type_name: variable.type_name(),
            id: variable.id().as_u64(),
        })
        .collect();
    println!("{}", format_variables_table(&rows));

    if args.tables {
        for table in namespace.enum_tables() {
            println!();
            println!("{}", format_enum_table(table));
        }
    }

    Ok(exitcode::OK)
}

/// Declared variables, optionally limited to one category.
fn select(namespace: &VariableNamespace, category: Option<&str>) -> Vec<Variable> {
    namespace
        .variables()
        .filter(|variable| category.is_none_or(|c| variable.category() == c))
        .collect()
}

/// Distinct categories in declaration order.
fn categories(namespace: &VariableNamespace) -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for variable in namespace.variables() {
        if !categories.contains(&variable.category()) {
            categories.push(variable.category());
        }
    }
    categories
}
