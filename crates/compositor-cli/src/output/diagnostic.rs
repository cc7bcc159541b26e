//! Miette diagnostic wrapper for scenario file errors.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A scenario file that is not valid JSON or does not match the schema.
///
/// Fields are read by the miette derive, not by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid scenario: {message}")]
#[diagnostic(code(compositor::scenario))]
pub struct ScenarioDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl ScenarioDiagnostic {
    /// Point at the line and column `serde_json` reported.
    pub fn from_json_error(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        let offset = byte_offset(content, err.line(), err.column());
        let help = err
            .is_data()
            .then(|| "see `compositor replay --help` for the scenario format".to_string());

        ScenarioDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
            help,
        }
    }
}

/// Byte offset of a 1-based line and column, clamped to the content.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let offset = content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1);
    offset.min(content.len())
}
