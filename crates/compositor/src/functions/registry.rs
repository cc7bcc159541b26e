//! The named function table exposed to the template engine.
//!
//! Templates call functions by name (`dedupJoin(a, b, c)`), so lookup by
//! string stays at the boundary. Behind it every function is a variant of
//! [`TextFunction`], so adding one means adding a variant and the compiler
//! points at every match that has to learn about it.

use std::collections::HashMap;

use bon::Builder;

use crate::error::{FunctionError, compute_suggestions};
use crate::functions::text;
use crate::providers::{SpeechNormalizer, WindowInfoProvider};
use crate::strings::Strings;
use crate::types::{Fragment, Value};

/// Rounding policy for progress percentages.
pub type ProgressRounding = fn(f64) -> i64;

/// Collaborators and settings that some functions need.
#[derive(Builder, Clone, Copy)]
pub struct FunctionContext<'a> {
    normalizer: &'a dyn SpeechNormalizer,
    strings: &'a dyn Strings,
    windows: Option<&'a dyn WindowInfoProvider>,
    #[builder(default)]
    say_capital: bool,
    #[builder(default = text::round_for_progress_percent as ProgressRounding)]
    progress_rounding: ProgressRounding,
}

/// How many arguments a function takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Any,
}

impl Arity {
    fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(expected) => expected == count,
            Arity::Any => true,
        }
    }
}

/// Every function a template can call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextFunction {
    CleanUp,
    CollapseRepeatedCharactersAndCleanUp,
    ConditionalAppend,
    ConditionalPrepend,
    ConditionalPrependWithSpaceSeparator,
    DedupJoin,
    Equals,
    GetWindowTitle,
    Join,
    PrependCapital,
    Round,
    RoundForProgressInt,
    RoundForProgressPercent,
    Spelling,
}

impl TextFunction {
    pub const ALL: &'static [TextFunction] = &[
        TextFunction::CleanUp,
        TextFunction::CollapseRepeatedCharactersAndCleanUp,
        TextFunction::ConditionalAppend,
        TextFunction::ConditionalPrepend,
        TextFunction::ConditionalPrependWithSpaceSeparator,
        TextFunction::DedupJoin,
        TextFunction::Equals,
        TextFunction::GetWindowTitle,
        TextFunction::Join,
        TextFunction::PrependCapital,
        TextFunction::Round,
        TextFunction::RoundForProgressInt,
        TextFunction::RoundForProgressPercent,
        TextFunction::Spelling,
    ];

    /// The name templates call this function by.
    pub fn name(self) -> &'static str {
        match self {
            TextFunction::CleanUp => "cleanUp",
            TextFunction::CollapseRepeatedCharactersAndCleanUp => {
                "collapseRepeatedCharactersAndCleanUp"
            }
            TextFunction::ConditionalAppend => "conditionalAppend",
            TextFunction::ConditionalPrepend => "conditionalPrepend",
            TextFunction::ConditionalPrependWithSpaceSeparator => {
                "conditionalPrependWithSpaceSeparator"
            }
            TextFunction::DedupJoin => "dedupJoin",
            TextFunction::Equals => "equals",
            TextFunction::GetWindowTitle => "getWindowTitle",
            TextFunction::Join => "join",
            TextFunction::PrependCapital => "prependCapital",
            TextFunction::Round => "round",
            TextFunction::RoundForProgressInt => "roundForProgressInt",
            TextFunction::RoundForProgressPercent => "roundForProgressPercent",
            TextFunction::Spelling => "spelling",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            TextFunction::Join => Arity::Any,
            TextFunction::DedupJoin => Arity::Exact(3),
            TextFunction::ConditionalAppend
            | TextFunction::ConditionalPrepend
            | TextFunction::ConditionalPrependWithSpaceSeparator
            | TextFunction::Equals => Arity::Exact(2),
            TextFunction::CleanUp
            | TextFunction::CollapseRepeatedCharactersAndCleanUp
            | TextFunction::GetWindowTitle
            | TextFunction::PrependCapital
            | TextFunction::Round
            | TextFunction::RoundForProgressInt
            | TextFunction::RoundForProgressPercent
            | TextFunction::Spelling => Arity::Exact(1),
        }
    }

    /// Call the function with already-resolved arguments.
    pub fn invoke(self, ctx: &FunctionContext<'_>, args: &[Value]) -> Result<Value, FunctionError> {
        if !self.arity().accepts(args.len()) {
            let expected = match self.arity() {
                Arity::Exact(n) => n,
                Arity::Any => args.len(),
            };
            return Err(FunctionError::ArgumentCount {
                function: self.name().to_string(),
                expected,
                got: args.len(),
            });
        }
        let args = Args {
            function: self,
            values: args,
        };

        let result = match self {
            TextFunction::CleanUp => Value::from(ctx.normalizer.clean_up(args.text(0)?.text())),
            TextFunction::CollapseRepeatedCharactersAndCleanUp => Value::from(
                ctx.normalizer
                    .collapse_repeated_and_clean_up(args.text(0)?.text())
                    .unwrap_or_default(),
            ),
            TextFunction::ConditionalAppend => {
                Value::from(text::conditional_append(args.text(0)?, args.text(1)?))
            }
            TextFunction::ConditionalPrepend => {
                Value::from(text::conditional_prepend(args.text(0)?, args.text(1)?))
            }
            TextFunction::ConditionalPrependWithSpaceSeparator => Value::from(
                text::conditional_prepend_with_space(args.text(0)?, args.text(1)?),
            ),
            TextFunction::DedupJoin => Value::from(text::dedup_join(
                args.text(0)?,
                args.text(1)?,
                args.text(2)?,
            )),
            TextFunction::Equals => Value::from(text::equals(
                Some(args.text(0)?.text()),
                Some(args.text(1)?.text()),
            )),
            TextFunction::GetWindowTitle => {
                let window_id = args.integer(0)?;
                let title = ctx
                    .windows
                    .zip(i32::try_from(window_id).ok())
                    .and_then(|(windows, id)| windows.title(id));
                Value::from(title.unwrap_or_default())
            }
            TextFunction::Join => {
                let fragments = (0..args.values.len())
                    .map(|i| args.text(i))
                    .collect::<Result<Vec<_>, _>>()?;
                Value::from(Fragment::join(&fragments, text::SEPARATOR))
            }
            TextFunction::PrependCapital => Value::from(text::prepend_capital(
                args.text(0)?.text(),
                ctx.say_capital,
                ctx.strings,
            )),
            TextFunction::Round => Value::from(text::round(args.number(0)?)),
            TextFunction::RoundForProgressInt => {
                Value::from(text::round_for_progress_int(args.number(0)?))
            }
            TextFunction::RoundForProgressPercent => {
                Value::from((ctx.progress_rounding)(args.number(0)?))
            }
            TextFunction::Spelling => {
                Value::from(text::spelling(args.text(0)?.text(), ctx.normalizer))
            }
        };
        Ok(result)
    }
}

/// Typed access to a function's arguments.
struct Args<'v> {
    function: TextFunction,
    values: &'v [Value],
}

impl Args<'_> {
    fn text(&self, index: usize) -> Result<Fragment, FunctionError> {
        match &self.values[index] {
            Value::Text(fragment) => Ok(fragment.clone()),
            other => Err(self.type_error(index, "text", other)),
        }
    }

    fn number(&self, index: usize) -> Result<f64, FunctionError> {
        let value = &self.values[index];
        value
            .as_number()
            .ok_or_else(|| self.type_error(index, "number", value))
    }

    fn integer(&self, index: usize) -> Result<i64, FunctionError> {
        let value = &self.values[index];
        value
            .as_integer()
            .ok_or_else(|| self.type_error(index, "integer", value))
    }

    fn type_error(&self, index: usize, expected: &'static str, got: &Value) -> FunctionError {
        FunctionError::ArgumentType {
            function: self.function.name().to_string(),
            index,
            expected,
            got: got.type_name(),
        }
    }
}

/// Name-to-function table, built once at startup.
///
/// ```
/// use compositor::functions::{FunctionContext, FunctionRegistry};
/// use compositor::providers::PassthroughNormalizer;
/// use compositor::strings::EnglishStrings;
/// use compositor::Value;
///
/// let registry = FunctionRegistry::new();
/// let strings = EnglishStrings::new();
/// let ctx = FunctionContext::builder()
///     .normalizer(&PassthroughNormalizer)
///     .strings(&strings)
///     .build();
///
/// let result = registry
///     .call("conditionalAppend", &ctx, &["Inbox".into(), "3 unread".into()])
///     .unwrap();
/// assert_eq!(result.to_string(), "Inbox, 3 unread");
/// ```
#[derive(Debug)]
pub struct FunctionRegistry {
    by_name: HashMap<&'static str, TextFunction>,
}

impl FunctionRegistry {
    /// A registry holding every built-in function.
    pub fn new() -> Self {
        let by_name = TextFunction::ALL
            .iter()
            .map(|function| (function.name(), *function))
            .collect();
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<TextFunction> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Registered names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        TextFunction::ALL.iter().copied().map(TextFunction::name)
    }

    /// Look up `name` and invoke it.
    pub fn call(
        &self,
        name: &str,
        ctx: &FunctionContext<'_>,
        args: &[Value],
    ) -> Result<Value, FunctionError> {
        let function = self.get(name).ok_or_else(|| FunctionError::UnknownFunction {
            name: name.to_string(),
            suggestions: compute_suggestions(name, self.names()),
        })?;
        function.invoke(ctx, args)
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::PassthroughNormalizer;
    use crate::strings::EnglishStrings;

    struct OneWindow;

    impl WindowInfoProvider for OneWindow {
        fn title(&self, window_id: i32) -> Option<String> {
            (window_id == 7).then(|| "Settings".to_string())
        }

        fn is_split_screen(&self, _display_id: i32) -> bool {
            false
        }
    }

    #[test]
    fn every_function_is_registered_under_its_name() {
        let registry = FunctionRegistry::new();
        for function in TextFunction::ALL {
            assert_eq!(registry.get(function.name()), Some(*function));
        }
        assert_eq!(registry.names().count(), TextFunction::ALL.len());
    }

    #[test]
    fn unknown_function_suggests_close_names() {
        let registry = FunctionRegistry::new();
        let strings = EnglishStrings::new();
        let ctx = FunctionContext::builder()
            .normalizer(&PassthroughNormalizer)
            .strings(&strings)
            .build();
        let err = registry.call("spellng", &ctx, &[]).unwrap_err();
        assert_eq!(
            err,
            FunctionError::UnknownFunction {
                name: "spellng".to_string(),
                suggestions: vec!["spelling".to_string()],
            }
        );
    }

    #[test]
    fn wrong_argument_count_is_reported() {
        let strings = EnglishStrings::new();
        let ctx = FunctionContext::builder()
            .normalizer(&PassthroughNormalizer)
            .strings(&strings)
            .build();
        let err = TextFunction::DedupJoin
            .invoke(&ctx, &["a".into(), "b".into()])
            .unwrap_err();
        assert_eq!(
            err,
            FunctionError::ArgumentCount {
                function: "dedupJoin".to_string(),
                expected: 3,
                got: 2,
            }
        );
    }

    #[test]
    fn wrong_argument_type_is_reported() {
        let strings = EnglishStrings::new();
        let ctx = FunctionContext::builder()
            .normalizer(&PassthroughNormalizer)
            .strings(&strings)
            .build();
        let err = TextFunction::Round.invoke(&ctx, &["x".into()]).unwrap_err();
        assert_eq!(
            err,
            FunctionError::ArgumentType {
                function: "round".to_string(),
                index: 0,
                expected: "number",
                got: "text",
            }
        );
    }

    #[test]
    fn window_title_requires_a_provider() {
        let strings = EnglishStrings::new();
        let without = FunctionContext::builder()
            .normalizer(&PassthroughNormalizer)
            .strings(&strings)
            .build();
        let with = FunctionContext::builder()
            .normalizer(&PassthroughNormalizer)
            .strings(&strings)
            .windows(&OneWindow)
            .build();
        let args = [Value::from(7)];
        assert_eq!(
            TextFunction::GetWindowTitle.invoke(&without, &args),
            Ok(Value::from(""))
        );
        assert_eq!(
            TextFunction::GetWindowTitle.invoke(&with, &args),
            Ok(Value::from("Settings"))
        );
        assert_eq!(
            TextFunction::GetWindowTitle.invoke(&with, &[Value::from(8)]),
            Ok(Value::from(""))
        );
    }

    #[test]
    fn progress_rounding_policy_is_replaceable() {
        let strings = EnglishStrings::new();
        let ctx = FunctionContext::builder()
            .normalizer(&PassthroughNormalizer)
            .strings(&strings)
            .progress_rounding(|_| 50)
            .build();
        assert_eq!(
            TextFunction::RoundForProgressPercent.invoke(&ctx, &[Value::from(3.2)]),
            Ok(Value::Integer(50))
        );
    }

    #[test]
    fn join_accepts_any_number_of_fragments() {
        let strings = EnglishStrings::new();
        let ctx = FunctionContext::builder()
            .normalizer(&PassthroughNormalizer)
            .strings(&strings)
            .build();
        let result = TextFunction::Join
            .invoke(&ctx, &["a".into(), "".into(), "b".into(), "c".into()])
            .unwrap();
        assert_eq!(result.to_string(), "a, b, c");
        assert_eq!(
            TextFunction::Join.invoke(&ctx, &[]).unwrap().to_string(),
            ""
        );
    }
}
