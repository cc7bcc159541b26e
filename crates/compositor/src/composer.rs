//! Announcement text for crossing a collection boundary.
//!
//! When focus moves into or out of a list, grid, or pager, the
//! `collection.transition` variable describes the container: its kind and
//! name, its nesting level, and its size. The wording depends on the role,
//! on whether the app supplied its own role description ("carousel"), on
//! which counts are known, and on the collection's alignment.

use crate::functions::join;
use crate::strings::{PluralId, StringId, Strings};
use crate::types::{CollectionState, CollectionTransition, Role, Value};

/// Composes collection phrases from a [`CollectionState`] snapshot.
///
/// # Example
///
/// ```
/// use compositor::strings::EnglishStrings;
/// use compositor::{
///     Alignment, CollectionPhraseComposer, CollectionState, CollectionTransition, Role,
/// };
///
/// let strings = EnglishStrings::new();
/// let composer = CollectionPhraseComposer::new(&strings);
///
/// let fruits = CollectionState::builder()
///     .transition(CollectionTransition::Enter)
///     .role(Role::List)
///     .name("Fruits".to_string())
///     .level(1)
///     .row_count(5)
///     .alignment(Alignment::Vertical)
///     .build();
///
/// assert_eq!(composer.transition_phrase(&fruits), "in list Fruits, level 2, 5 items");
/// ```
#[derive(Clone, Copy)]
pub struct CollectionPhraseComposer<'a> {
    strings: &'a dyn Strings,
}

impl<'a> CollectionPhraseComposer<'a> {
    pub fn new(strings: &'a dyn Strings) -> Self {
        Self { strings }
    }

    /// Text for entering or leaving the collection, or empty when the last
    /// focus change did not cross a boundary.
    pub fn transition_phrase(&self, state: &CollectionState) -> String {
        match state.transition {
            CollectionTransition::None => String::new(),
            CollectionTransition::Enter => match &state.role_description {
                None => self.enter(state),
                Some(role_description) => {
                    tracing::debug!(%role_description, "entering collection with role description");
                    self.enter_with_role_description(state)
                }
            },
            CollectionTransition::Exit => match &state.role_description {
                None => self.exit(state),
                Some(role_description) => {
                    tracing::debug!(%role_description, "leaving collection with role description");
                    self.role_description_phrase(
                        state,
                        StringId::OutOfRoleDescription,
                        StringId::OutOfRoleDescriptionWithName,
                    )
                }
            },
        }
    }

    /// "item i of N" for the focused list item.
    ///
    /// A well-formed list has more than one row or more than one column but
    /// not both, so the order of the two checks does not matter.
    pub fn list_item_position(&self, state: &CollectionState) -> String {
        let Some(index) = state.list_item().and_then(|item| item.index) else {
            return String::new();
        };
        let total = match (state.row_count, state.column_count) {
            (Some(_), Some(columns)) if columns > 1 => columns,
            (Some(rows), Some(_)) if rows > 1 => rows,
            _ => return String::new(),
        };
        self.strings
            .get(StringId::ListIndex, &[Value::from(one_based(index)), Value::from(total)])
    }

    fn enter(&self, state: &CollectionState) -> String {
        match state.role {
            Role::List => join([
                self.name_phrase(state, StringId::InList, StringId::InListWithName),
                self.level_phrase(state),
                self.list_item_count(state),
            ]),
            Role::Grid => join([
                self.name_phrase(state, StringId::InGrid, StringId::InGridWithName),
                self.level_phrase(state),
                self.grid_item_count(state),
            ]),
            // A pager with no collection metadata but several children is
            // still announced as a pager.
            Role::Pager if !state.has_any_count() => {
                self.name_phrase(state, StringId::InPager, StringId::InPagerWithName)
            }
            Role::Pager
                if is_more_than_one(state.row_count) && is_more_than_one(state.column_count) =>
            {
                self.grid_pager_enter(state)
            }
            Role::Pager if state.is_vertical() => self.vertical_pager_enter(state),
            // Unspecified alignment reads as horizontal.
            Role::Pager => self.horizontal_pager_enter(state),
            _ => String::new(),
        }
    }

    fn enter_with_role_description(&self, state: &CollectionState) -> String {
        let item_count = match state.role {
            Role::List => self.list_item_count(state),
            Role::Grid => self.grid_item_count(state),
            Role::Pager if state.has_both_counts() => self.grid_pager_enter(state),
            Role::Pager if state.has_any_count() && state.is_vertical() => {
                self.vertical_pager_enter(state)
            }
            Role::Pager if state.has_any_count() => self.horizontal_pager_enter(state),
            Role::Pager => self.role_description_phrase(
                state,
                StringId::InRoleDescription,
                StringId::InRoleDescriptionWithName,
            ),
            _ => String::new(),
        };
        join([
            self.role_description_phrase(
                state,
                StringId::InRoleDescription,
                StringId::InRoleDescriptionWithName,
            ),
            self.level_phrase(state),
            item_count,
        ])
    }

    fn exit(&self, state: &CollectionState) -> String {
        let (plain, with_name) = match state.role {
            Role::List => (StringId::OutOfList, StringId::OutOfListWithName),
            Role::Grid => (StringId::OutOfGrid, StringId::OutOfGridWithName),
            Role::Pager if state.has_both_counts() => {
                (StringId::OutOfGridPager, StringId::OutOfGridPagerWithName)
            }
            Role::Pager if state.has_any_count() && state.is_vertical() => (
                StringId::OutOfVerticalPager,
                StringId::OutOfVerticalPagerWithName,
            ),
            // The name is never spoken when leaving a horizontal pager.
            Role::Pager if state.has_any_count() => {
                (StringId::OutOfHorizontalPager, StringId::OutOfHorizontalPager)
            }
            Role::Pager => (StringId::OutOfPager, StringId::OutOfPagerWithName),
            _ => return String::new(),
        };
        self.name_phrase(state, plain, with_name)
    }

    fn name_phrase(&self, state: &CollectionState, plain: StringId, with_name: StringId) -> String {
        match collection_name(state) {
            Some(name) => self.strings.get(with_name, &[Value::from(name)]),
            None => self.strings.get(plain, &[]),
        }
    }

    fn role_description_phrase(
        &self,
        state: &CollectionState,
        plain: StringId,
        with_name: StringId,
    ) -> String {
        let Some(role_description) = state.role_description.as_deref().filter(|d| !d.is_empty())
        else {
            return String::new();
        };
        match collection_name(state) {
            Some(name) => self.strings.get(
                with_name,
                &[Value::from(role_description), Value::from(name)],
            ),
            None => self.strings.get(plain, &[Value::from(role_description)]),
        }
    }

    fn level_phrase(&self, state: &CollectionState) -> String {
        match state.level {
            Some(level) => self
                .strings
                .get(StringId::CollectionLevel, &[Value::from(one_based(level))]),
            None => String::new(),
        }
    }

    fn list_item_count(&self, state: &CollectionState) -> String {
        let count = if state.is_vertical() {
            state.row_count
        } else if state.is_horizontal() {
            state.column_count
        } else {
            None
        };
        count.map_or_else(String::new, |n| self.quantity(PluralId::ListTotalCount, n))
    }

    fn grid_item_count(&self, state: &CollectionState) -> String {
        match (state.row_count, state.column_count) {
            (Some(rows), Some(columns)) => join([
                self.quantity(PluralId::RowCount, rows),
                self.quantity(PluralId::ColumnCount, columns),
            ]),
            _ => String::new(),
        }
    }

    fn grid_pager_enter(&self, state: &CollectionState) -> String {
        let position = if state.has_both_counts() {
            join([
                self.index_phrase(StringId::RowIndex, state.item_row_index()),
                self.index_phrase(StringId::ColumnIndex, state.item_column_index()),
            ])
        } else {
            String::new()
        };
        join([
            self.name_phrase(state, StringId::InGridPager, StringId::InGridPagerWithName),
            self.level_phrase(state),
            position,
            self.optional_quantity(PluralId::RowCount, state.row_count),
            self.optional_quantity(PluralId::ColumnCount, state.column_count),
        ])
    }

    fn vertical_pager_enter(&self, state: &CollectionState) -> String {
        join([
            self.name_phrase(
                state,
                StringId::InVerticalPager,
                StringId::InVerticalPagerWithName,
            ),
            self.level_phrase(state),
            self.page_phrase(state.item_row_index(), state.row_count),
        ])
    }

    fn horizontal_pager_enter(&self, state: &CollectionState) -> String {
        join([
            self.name_phrase(
                state,
                StringId::InHorizontalPager,
                StringId::InHorizontalPagerWithName,
            ),
            self.level_phrase(state),
            self.page_phrase(state.item_column_index(), state.column_count),
        ])
    }

    fn page_phrase(&self, index: Option<u32>, count: Option<u32>) -> String {
        match (index, count) {
            (Some(index), Some(count)) => self.strings.get(
                StringId::PagerIndexCount,
                &[Value::from(one_based(index)), Value::from(count)],
            ),
            _ => String::new(),
        }
    }

    fn index_phrase(&self, id: StringId, index: Option<u32>) -> String {
        index.map_or_else(String::new, |i| {
            self.strings.get(id, &[Value::from(one_based(i))])
        })
    }

    fn quantity(&self, id: PluralId, count: u32) -> String {
        self.strings
            .get_quantity(id, i64::from(count), &[Value::from(count)])
    }

    fn optional_quantity(&self, id: PluralId, count: Option<u32>) -> String {
        count.map_or_else(String::new, |n| self.quantity(id, n))
    }
}

fn collection_name(state: &CollectionState) -> Option<&str> {
    state.name.as_deref().filter(|name| !name.is_empty())
}

/// Spoken position for a zero-based index, widened so `u32::MAX` cannot wrap.
fn one_based(index: u32) -> i64 {
    i64::from(index) + 1
}

fn is_more_than_one(count: Option<u32>) -> bool {
    count.is_some_and(|n| n > 1)
}
