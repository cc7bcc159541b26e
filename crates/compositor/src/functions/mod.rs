//! Text combinators and the function table templates call into.

mod registry;
mod text;

pub use registry::{Arity, FunctionContext, FunctionRegistry, ProgressRounding, TextFunction};
pub use text::{
    SEPARATOR, conditional_append, conditional_prepend, conditional_prepend_with_space,
    dedup_join, equals, join, prepend_capital, round, round_for_progress_int,
    round_for_progress_percent, spelling,
};
