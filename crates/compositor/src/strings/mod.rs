//! Typed string resources.
//!
//! Announcement text comes from localized resources owned by the host. The
//! composer and resolver name resources with [`StringId`] and [`PluralId`]
//! and pass already-resolved arguments; the [`Strings`] implementation
//! decides the wording and plural form. [`EnglishStrings`] is a complete
//! English table for hosts without their own resources.

mod english;
mod plural;

pub use english::EnglishStrings;
pub use plural::PluralSelector;

use crate::types::Value;

/// Localized string lookup.
pub trait Strings {
    /// The resource `id` with positional `args` substituted.
    fn get(&self, id: StringId, args: &[Value]) -> String;

    /// The plural form of `id` selected by `count`, with `args` substituted.
    fn get_quantity(&self, id: PluralId, count: i64, args: &[Value]) -> String;
}

/// Single-form string resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringId {
    InList,
    InListWithName,
    InGrid,
    InGridWithName,
    InPager,
    InPagerWithName,
    InGridPager,
    InGridPagerWithName,
    InVerticalPager,
    InVerticalPagerWithName,
    InHorizontalPager,
    InHorizontalPagerWithName,
    OutOfList,
    OutOfListWithName,
    OutOfGrid,
    OutOfGridWithName,
    OutOfPager,
    OutOfPagerWithName,
    OutOfGridPager,
    OutOfGridPagerWithName,
    OutOfVerticalPager,
    OutOfVerticalPagerWithName,
    OutOfHorizontalPager,
    /// `{0}` is the role description.
    InRoleDescription,
    /// `{0}` is the role description, `{1}` the collection name.
    InRoleDescriptionWithName,
    OutOfRoleDescription,
    OutOfRoleDescriptionWithName,
    /// `{0}` is the one-based level.
    CollectionLevel,
    RowIndex,
    ColumnIndex,
    /// `{0}` is the one-based page, `{1}` the page count.
    PagerIndexCount,
    /// `{0}` is the one-based item, `{1}` the item count.
    ListIndex,
    SeekControlHint,
    /// `{0}` is the scale percentage.
    MagnificationOn,
    FullScreenMagnificationOn,
    PartialMagnificationOn,
    MagnificationOff,
    MagnificationScaleChanged,
    FullScreenMagnificationScaleChanged,
    PartialMagnificationScaleChanged,
    /// `{0}` is the letter.
    CapitalLetter,
}

/// Plural-aware quantity resources; `{0}` is the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralId {
    ListTotalCount,
    RowCount,
    ColumnCount,
}

/// Substitutes `{0}`, `{1}`, ... in `template` with `args`.
///
/// Placeholders without a matching argument are left as written.
pub fn format_positional(template: &str, args: &[Value]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg.to_string(), close))
        });
        match substituted {
            Some((text, close)) => {
                output.push_str(&text);
                rest = &after[close + 1..];
            }
            None => {
                output.push('{');
                rest = after;
            }
        }
    }
    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_positional_substitutes_in_order() {
        let text = format_positional("page {0} of {1}", &[Value::from(2), Value::from(7)]);
        assert_eq!(text, "page 2 of 7");
    }

    #[test]
    fn format_positional_keeps_unmatched_placeholders() {
        assert_eq!(format_positional("in {0} {1}", &["tabs".into()]), "in tabs {1}");
        assert_eq!(format_positional("{x} and {", &[]), "{x} and {");
    }
}
