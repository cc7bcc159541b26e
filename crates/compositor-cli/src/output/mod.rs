//! Output formatting: tables and diagnostics.

pub mod diagnostic;
pub mod table;

pub use diagnostic::ScenarioDiagnostic;
