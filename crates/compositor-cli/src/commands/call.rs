//! Implementation of the `compositor call` command.

use clap::Args;
use compositor::providers::PassthroughNormalizer;
use compositor::strings::EnglishStrings;
use compositor::types::PlainValue;
use compositor::{FunctionContext, FunctionRegistry, Value};
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Arguments for the call command.
#[derive(Debug, Args)]
pub struct CallArgs {
    /// Function name as templates call it (e.g. dedupJoin)
    pub name: String,

    /// Arguments: true/false and numbers are typed, anything else is text
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Speak "capital" before single upper-case letters
    #[arg(long)]
    pub say_capital: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for call results.
#[derive(Debug, Serialize)]
struct CallResult {
    result: PlainValue,
    /// Byte ranges of inserted separators.
    separators: Vec<(usize, usize)>,
}

/// Parse a command-line argument into a typed value.
fn parse_arg(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => {
            if let Ok(n) = raw.parse::<i64>() {
                Value::from(n)
            } else if let Some(n) = raw.parse::<f64>().ok().filter(|n| n.is_finite()) {
                Value::from(n)
            } else {
                Value::from(raw)
            }
        }
    }
}

/// Run the call command.
pub fn run_call(args: CallArgs) -> Result<i32> {
    let registry = FunctionRegistry::new();
    let strings = EnglishStrings::new();
    let ctx = FunctionContext::builder()
        .normalizer(&PassthroughNormalizer)
        .strings(&strings)
        .say_capital(args.say_capital)
        .build();

    let values: Vec<Value> = args.args.iter().map(|raw| parse_arg(raw)).collect();
    tracing::debug!(function = %args.name, arguments = values.len(), "calling text function");

    match registry.call(&args.name, &ctx, &values) {
        Ok(value) => {
            if args.json {
                let separators = value
                    .as_fragment()
                    .map(|fragment| {
                        fragment
                            .separators()
                            .iter()
                            .map(|range| (range.start, range.end))
                            .collect()
                    })
                    .unwrap_or_default();
                let output = CallResult {
                    result: PlainValue::from(&value),
                    separators,
                };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{value}");
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({ "error": e.to_string() });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("{} {}", "error:".red().bold(), e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
