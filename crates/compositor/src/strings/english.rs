use crate::strings::{PluralId, PluralSelector, StringId, Strings, format_positional};
use crate::types::Value;

/// Built-in English resources.
///
/// ```
/// use compositor::strings::{EnglishStrings, PluralId, StringId, Strings};
///
/// let strings = EnglishStrings::new();
/// assert_eq!(strings.get(StringId::InListWithName, &["Fruits".into()]), "in list Fruits");
/// assert_eq!(strings.get_quantity(PluralId::ListTotalCount, 1, &[1.into()]), "1 item");
/// assert_eq!(strings.get_quantity(PluralId::ListTotalCount, 5, &[5.into()]), "5 items");
/// ```
#[derive(Debug)]
pub struct EnglishStrings {
    plurals: PluralSelector,
}

impl EnglishStrings {
    pub fn new() -> Self {
        Self {
            plurals: PluralSelector::english(),
        }
    }
}

impl Default for EnglishStrings {
    fn default() -> Self {
        Self::new()
    }
}

impl Strings for EnglishStrings {
    fn get(&self, id: StringId, args: &[Value]) -> String {
        format_positional(template(id), args)
    }

    fn get_quantity(&self, id: PluralId, count: i64, args: &[Value]) -> String {
        let (one, other) = quantity_templates(id);
        let template = match self.plurals.category(count) {
            "one" => one,
            _ => other,
        };
        format_positional(template, args)
    }
}

fn template(id: StringId) -> &'static str {
    match id {
        StringId::InList => "in list",
        StringId::InListWithName => "in list {0}",
        StringId::InGrid => "in grid",
        StringId::InGridWithName => "in grid {0}",
        StringId::InPager => "in pager",
        StringId::InPagerWithName => "in pager {0}",
        StringId::InGridPager => "in grid pager",
        StringId::InGridPagerWithName => "in grid pager {0}",
        StringId::InVerticalPager => "in vertical pager",
        StringId::InVerticalPagerWithName => "in vertical pager {0}",
        StringId::InHorizontalPager => "in horizontal pager",
        StringId::InHorizontalPagerWithName => "in horizontal pager {0}",
        StringId::OutOfList => "out of list",
        StringId::OutOfListWithName => "out of list {0}",
        StringId::OutOfGrid => "out of grid",
        StringId::OutOfGridWithName => "out of grid {0}",
        StringId::OutOfPager => "out of pager",
        StringId::OutOfPagerWithName => "out of pager {0}",
        StringId::OutOfGridPager => "out of grid pager",
        StringId::OutOfGridPagerWithName => "out of grid pager {0}",
        StringId::OutOfVerticalPager => "out of vertical pager",
        StringId::OutOfVerticalPagerWithName => "out of vertical pager {0}",
        StringId::OutOfHorizontalPager => "out of horizontal pager",
        StringId::InRoleDescription => "in {0}",
        StringId::InRoleDescriptionWithName => "in {0} {1}",
        StringId::OutOfRoleDescription => "out of {0}",
        StringId::OutOfRoleDescriptionWithName => "out of {0} {1}",
        StringId::CollectionLevel => "level {0}",
        StringId::RowIndex => "row {0}",
        StringId::ColumnIndex => "column {0}",
        StringId::PagerIndexCount => "page {0} of {1}",
        StringId::ListIndex => "item {0} of {1}",
        StringId::SeekControlHint => "swipe up or down to adjust",
        StringId::MagnificationOn => "magnification on, {0} percent",
        StringId::FullScreenMagnificationOn => "full screen magnification on, {0} percent",
        StringId::PartialMagnificationOn => "partial screen magnification on, {0} percent",
        StringId::MagnificationOff => "magnification off",
        StringId::MagnificationScaleChanged => "magnification {0} percent",
        StringId::FullScreenMagnificationScaleChanged => "full screen magnification {0} percent",
        StringId::PartialMagnificationScaleChanged => {
            "partial screen magnification {0} percent"
        }
        StringId::CapitalLetter => "capital {0}",
    }
}

fn quantity_templates(id: PluralId) -> (&'static str, &'static str) {
    match id {
        PluralId::ListTotalCount => ("{0} item", "{0} items"),
        PluralId::RowCount => ("{0} row", "{0} rows"),
        PluralId::ColumnCount => ("{0} column", "{0} columns"),
    }
}
