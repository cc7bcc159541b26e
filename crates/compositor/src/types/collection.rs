use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{HeadingType, Role};

/// Whether the last focus change crossed a collection boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionTransition {
    #[default]
    None,
    Enter,
    Exit,
}

/// Layout direction of a one-dimensional collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Vertical,
    Horizontal,
    #[default]
    Unspecified,
}

/// Which table axes changed between the previous and current item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowColumnTransition {
    #[serde(default)]
    pub row: bool,
    #[serde(default)]
    pub column: bool,
}

/// Position of the focused cell inside a table or grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct TableItemState {
    #[builder(default)]
    pub heading_type: HeadingType,
    pub row_name: Option<String>,
    pub column_name: Option<String>,
    pub row_index: Option<u32>,
    pub column_index: Option<u32>,
}

/// Position of the focused item inside a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItemState {
    pub index: Option<u32>,
    #[builder(default)]
    pub is_heading: bool,
}

/// Position of the focused page inside a pager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerItemState {
    pub row_index: Option<u32>,
    pub column_index: Option<u32>,
    #[builder(default)]
    pub is_heading: bool,
}

/// Item-level state of the focused node; at most one kind applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemState {
    #[default]
    None,
    Table(TableItemState),
    List(ListItemState),
    Pager(PagerItemState),
}

/// Snapshot of the collection surrounding the focused node.
///
/// Produced by a [`CollectionStateProvider`](crate::CollectionStateProvider)
/// on every accessibility-focus event and replaced wholesale on the next
/// one. Counts, levels, and indices are `None` when the collection does not
/// report them; a legacy pager with no collection metadata has neither a
/// row nor a column count.
///
/// # Example
///
/// ```
/// use compositor::{Alignment, CollectionState, CollectionTransition, Role};
///
/// let fruits = CollectionState::builder()
///     .transition(CollectionTransition::Enter)
///     .role(Role::List)
///     .name("Fruits".to_string())
///     .row_count(5)
///     .alignment(Alignment::Vertical)
///     .build();
///
/// assert!(fruits.has_any_count());
/// assert!(!fruits.has_both_counts());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionState {
    #[builder(default)]
    pub transition: CollectionTransition,
    #[builder(default)]
    pub role: Role,
    pub name: Option<String>,
    pub role_description: Option<String>,
    /// Zero-based nesting level.
    pub level: Option<u32>,
    pub row_count: Option<u32>,
    pub column_count: Option<u32>,
    #[builder(default)]
    pub alignment: Alignment,
    #[builder(default)]
    pub row_column_transition: RowColumnTransition,
    #[builder(default)]
    pub item: ItemState,
}

impl CollectionState {
    /// Whether the focused node is inside a collection at all.
    pub fn exists(&self) -> bool {
        self.role != Role::None
    }

    pub fn has_any_count(&self) -> bool {
        self.row_count.is_some() || self.column_count.is_some()
    }

    pub fn has_both_counts(&self) -> bool {
        self.row_count.is_some() && self.column_count.is_some()
    }

    pub fn is_vertical(&self) -> bool {
        self.alignment == Alignment::Vertical
    }

    pub fn is_horizontal(&self) -> bool {
        self.alignment == Alignment::Horizontal
    }

    pub fn table_item(&self) -> Option<&TableItemState> {
        match &self.item {
            ItemState::Table(state) => Some(state),
            _ => None,
        }
    }

    pub fn list_item(&self) -> Option<&ListItemState> {
        match &self.item {
            ItemState::List(state) => Some(state),
            _ => None,
        }
    }

    pub fn pager_item(&self) -> Option<&PagerItemState> {
        match &self.item {
            ItemState::Pager(state) => Some(state),
            _ => None,
        }
    }

    /// Row index of the focused item, from a table cell or a pager page.
    pub fn item_row_index(&self) -> Option<u32> {
        match &self.item {
            ItemState::Table(state) => state.row_index,
            ItemState::Pager(state) => state.row_index,
            ItemState::List(_) | ItemState::None => None,
        }
    }

    /// Column index of the focused item, from a table cell or a pager page.
    pub fn item_column_index(&self) -> Option<u32> {
        match &self.item {
            ItemState::Table(state) => state.column_index,
            ItemState::Pager(state) => state.column_index,
            ItemState::List(_) | ItemState::None => None,
        }
    }
}
