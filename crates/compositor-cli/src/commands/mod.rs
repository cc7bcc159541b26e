//! CLI command implementations.

mod call;
mod replay;
mod scenario;
mod vars;

pub use call::{run_call, CallArgs};
pub use replay::{run_replay, ReplayArgs};
pub use vars::{run_vars, VarsArgs};
