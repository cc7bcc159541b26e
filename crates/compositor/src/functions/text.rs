//! Pure combinators over already-resolved text.

use std::collections::HashSet;

use icu_casemap::CaseMapper;
use unicode_segmentation::UnicodeSegmentation;

use crate::providers::SpeechNormalizer;
use crate::strings::{StringId, Strings};
use crate::types::{Fragment, Value};

/// Separator between joined fragments.
pub const SEPARATOR: &str = ", ";

/// Joins the non-empty fragments with `", "`.
///
/// ```
/// use compositor::functions::join;
///
/// assert_eq!(join(["", "in list", "", "3 items", ""]), "in list, 3 items");
/// assert_eq!(join([""; 3]), "");
/// ```
pub fn join<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = String::new();
    for fragment in fragments {
        let fragment = fragment.as_ref();
        if fragment.is_empty() {
            continue;
        }
        if !output.is_empty() {
            output.push_str(SEPARATOR);
        }
        output.push_str(fragment);
    }
    output
}

/// `conditional` followed by `append`, or nothing when `conditional` is
/// empty.
pub fn conditional_append(
    conditional: impl Into<Fragment>,
    append: impl Into<Fragment>,
) -> Fragment {
    combine(conditional.into(), append.into(), SEPARATOR, Position::Append)
}

/// `prepend` followed by `conditional`, or nothing when `conditional` is
/// empty.
pub fn conditional_prepend(
    prepend: impl Into<Fragment>,
    conditional: impl Into<Fragment>,
) -> Fragment {
    combine(conditional.into(), prepend.into(), SEPARATOR, Position::Prepend)
}

/// [`conditional_prepend`] with a single space as the separator.
pub fn conditional_prepend_with_space(
    prepend: impl Into<Fragment>,
    conditional: impl Into<Fragment>,
) -> Fragment {
    combine(conditional.into(), prepend.into(), " ", Position::Prepend)
}

enum Position {
    Append,
    Prepend,
}

fn combine(
    conditional: Fragment,
    other: Fragment,
    separator: &str,
    position: Position,
) -> Fragment {
    if conditional.is_empty() {
        return Fragment::empty();
    }
    if other.is_empty() {
        return conditional;
    }
    let (first, second) = match position {
        Position::Append => (conditional, other),
        Position::Prepend => (other, conditional),
    };
    let mut result = first;
    result.push_separator(separator);
    result.push_fragment(&second);
    result
}

/// Joins up to three values, dropping empties and case-insensitive
/// duplicates. The first spelling of a duplicate wins.
///
/// ```
/// use compositor::functions::dedup_join;
///
/// assert_eq!(dedup_join("Apple", "apple", "Banana").to_string(), "Apple, Banana");
/// ```
pub fn dedup_join(
    first: impl Into<Fragment>,
    second: impl Into<Fragment>,
    third: impl Into<Fragment>,
) -> Fragment {
    let case_mapper = CaseMapper::new();
    let mut seen = HashSet::new();
    let mut result = Fragment::empty();
    for value in [first.into(), second.into(), third.into()] {
        if value.is_empty() {
            continue;
        }
        let folded = case_mapper.fold_string(value.text()).to_string();
        if !seen.insert(folded) {
            continue;
        }
        if !result.is_empty() {
            result.push_separator(SEPARATOR);
        }
        result.push_fragment(&value);
    }
    result
}

/// Spells `word` one grapheme at a time through the normalizer.
///
/// Returns empty for a single grapheme or less, where spelling adds
/// nothing over reading the word.
pub fn spelling(word: &str, normalizer: &dyn SpeechNormalizer) -> String {
    let graphemes: Vec<&str> = word.graphemes(true).collect();
    if graphemes.len() <= 1 {
        return String::new();
    }
    graphemes
        .into_iter()
        .map(|grapheme| normalizer.clean_up(grapheme))
        .collect()
}

/// "capital X" for a lone upper-case letter when `say_capital` is on;
/// otherwise `text` unchanged.
pub fn prepend_capital(text: &str, say_capital: bool, strings: &dyn Strings) -> String {
    if text.is_empty() || !say_capital {
        return text.to_string();
    }
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_uppercase() => {
            strings.get(StringId::CapitalLetter, &[Value::from(letter.to_string())])
        }
        _ => text.to_string(),
    }
}

/// Nearest integer, halves rounding up.
pub fn round(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Rounds a progress percentage without claiming an unfinished task is at
/// 0% or 100%.
pub fn round_for_progress_percent(value: f64) -> i64 {
    if value > 0.0 && value < 1.0 {
        1
    } else if value > 99.0 && value < 100.0 {
        99
    } else {
        round(value)
    }
}

/// Integer progress value, truncated toward zero.
pub fn round_for_progress_int(value: f64) -> i64 {
    value as i64
}

/// Ordinal text equality where absent and empty are the same.
pub fn equals(first: Option<&str>, second: Option<&str>) -> bool {
    first.unwrap_or_default() == second.unwrap_or_default()
}
