//! Calling text functions by name through the registry.

mod common;

use common::Windows;
use compositor::providers::{PassthroughNormalizer, SpeechNormalizer};
use compositor::strings::EnglishStrings;
use compositor::{FunctionContext, FunctionError, FunctionRegistry, Value, args};

/// Names symbols and collapses runs of the same character.
struct Symbols;

impl SpeechNormalizer for Symbols {
    fn clean_up(&self, text: &str) -> String {
        match text {
            "@" => "at".to_string(),
            "." => "dot".to_string(),
            other => other.to_string(),
        }
    }

    fn collapse_repeated_and_clean_up(&self, text: &str) -> Option<String> {
        if text.is_empty() {
            return None;
        }
        let mut collapsed: Vec<char> = text.chars().collect();
        collapsed.dedup();
        Some(collapsed.into_iter().collect())
    }
}

fn call(name: &str, args: &[Value]) -> Result<String, FunctionError> {
    let strings = EnglishStrings::new();
    let ctx = FunctionContext::builder()
        .normalizer(&Symbols)
        .strings(&strings)
        .windows(&Windows)
        .say_capital(true)
        .build();
    FunctionRegistry::new()
        .call(name, &ctx, args)
        .map(|value| value.to_string())
}

#[test]
fn join_drops_empty_fragments() {
    assert_eq!(call("join", &args!["", "in list", "", "3 items"]).unwrap(), "in list, 3 items");
    assert_eq!(call("join", &args!["", ""]).unwrap(), "");
}

#[test]
fn conditional_combinators() {
    assert_eq!(call("conditionalAppend", &args!["", "x"]).unwrap(), "");
    assert_eq!(call("conditionalAppend", &args!["x", ""]).unwrap(), "x");
    assert_eq!(call("conditionalAppend", &args!["x", "y"]).unwrap(), "x, y");
    assert_eq!(call("conditionalPrepend", &args!["x", "y"]).unwrap(), "x, y");
    assert_eq!(call("conditionalPrepend", &args!["x", ""]).unwrap(), "");
    assert_eq!(
        call("conditionalPrependWithSpaceSeparator", &args!["Alt", "Tab"]).unwrap(),
        "Alt Tab"
    );
}

#[test]
fn conditional_append_result_keeps_separator_ranges() {
    let strings = EnglishStrings::new();
    let ctx = FunctionContext::builder()
        .normalizer(&PassthroughNormalizer)
        .strings(&strings)
        .build();
    let value = FunctionRegistry::new()
        .call("conditionalAppend", &ctx, &args!["Inbox", "3 unread"])
        .unwrap();
    assert_eq!(value.as_fragment().unwrap().separators(), &[5..7]);
}

#[test]
fn dedup_join_is_case_insensitive() {
    assert_eq!(call("dedupJoin", &args!["Apple", "apple", "Banana"]).unwrap(), "Apple, Banana");
    assert_eq!(call("dedupJoin", &args!["", "", ""]).unwrap(), "");
}

#[test]
fn spelling_and_cleanup_use_the_normalizer() {
    assert_eq!(call("spelling", &args!["a@b"]).unwrap(), "aatb");
    assert_eq!(call("spelling", &args!["@"]).unwrap(), "");
    assert_eq!(call("cleanUp", &args!["."]).unwrap(), "dot");
    assert_eq!(
        call("collapseRepeatedCharactersAndCleanUp", &args!["heeello"]).unwrap(),
        "helo"
    );
    assert_eq!(call("collapseRepeatedCharactersAndCleanUp", &args![""]).unwrap(), "");
}

#[test]
fn prepend_capital_follows_say_capital() {
    assert_eq!(call("prependCapital", &args!["Q"]).unwrap(), "capital Q");
    assert_eq!(call("prependCapital", &args!["q"]).unwrap(), "q");
}

#[test]
fn rounding_functions() {
    assert_eq!(call("round", &args![3.9]).unwrap(), "4");
    assert_eq!(call("roundForProgressInt", &args![3.9]).unwrap(), "3");
    assert_eq!(call("roundForProgressPercent", &args![0.4]).unwrap(), "1");
    assert_eq!(call("roundForProgressPercent", &args![99.6]).unwrap(), "99");
    assert_eq!(call("roundForProgressPercent", &args![50.5]).unwrap(), "51");
    assert_eq!(call("round", &args![7]).unwrap(), "7");
}

#[test]
fn equals_is_ordinal() {
    assert_eq!(call("equals", &args!["a", "a"]).unwrap(), "true");
    assert_eq!(call("equals", &args!["a", "A"]).unwrap(), "false");
    assert_eq!(call("equals", &args!["", ""]).unwrap(), "true");
}

#[test]
fn window_title_lookup() {
    assert_eq!(call("getWindowTitle", &args![3]).unwrap(), "Calendar");
    assert_eq!(call("getWindowTitle", &args![4]).unwrap(), "");
}

#[test]
fn unknown_function_reports_suggestions() {
    let err = call("dedupjoin", &args!["a", "b", "c"]).unwrap_err();
    assert_eq!(err.to_string(), "unknown function 'dedupjoin', did you mean: dedupJoin?");
}

#[test]
fn argument_errors_are_typed() {
    assert!(matches!(
        call("equals", &args!["a"]),
        Err(FunctionError::ArgumentCount { expected: 2, got: 1, .. })
    ));
    assert!(matches!(
        call("spelling", &args![true]),
        Err(FunctionError::ArgumentType { index: 0, expected: "text", got: "bool", .. })
    ));
}
