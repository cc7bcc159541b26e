//! Error types for the declaration and function-call boundaries.
//!
//! Variable resolution itself never fails: unknown ids resolve to zero
//! values. Errors only arise where the host or template engine hands the
//! layer something it cannot accept, such as two variables with the same
//! name or a call to a function that does not exist.

use strsim::levenshtein;
use thiserror::Error;

/// Errors that occur while declaring the variable namespace.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeclareError {
    /// The same variable name was declared twice.
    #[error("variable '{name}' is declared more than once")]
    DuplicateName { name: String },

    /// Two different names produced the same id.
    #[error("variables '{first}' and '{second}' produce the same id")]
    HashCollision { first: String, second: String },
}

/// Errors from invoking a text function by name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FunctionError {
    /// No function is registered under this name.
    #[error("unknown function '{name}'{}", format_suggestions(suggestions))]
    UnknownFunction {
        name: String,
        suggestions: Vec<String>,
    },

    /// Wrong number of arguments.
    #[error("function '{function}' expects {expected} arguments, got {got}")]
    ArgumentCount {
        function: String,
        expected: usize,
        got: usize,
    },

    /// An argument had the wrong type.
    #[error("argument {index} of '{function}' must be {expected}, got {got}")]
    ArgumentType {
        function: String,
        index: usize,
        expected: &'static str,
        got: &'static str,
    },
}

/// Errors from building string resources.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StringsError {
    #[error("invalid language tag '{language}'")]
    InvalidLanguage { language: String },

    #[error("no plural rules for language '{language}'")]
    UnsupportedLanguage { language: String },
}

/// Up to three candidates within edit distance of `name`, closest first.
///
/// Short names tolerate one edit, longer names two.
pub fn compute_suggestions<'a>(
    name: &str,
    available: impl Iterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &str)> = available
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            (dist <= max_distance && dist > 0).then_some((dist, candidate))
        })
        .collect();
    suggestions.sort_by_key(|(dist, candidate)| (*dist, *candidate));
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}
