mod collection;
mod declared;
mod event;
mod fragment;
mod key_combo;
mod modes;
mod value;
mod variable_id;

pub use collection::{
    Alignment, CollectionState, CollectionTransition, ItemState, ListItemState, PagerItemState,
    RowColumnTransition, TableItemState,
};
pub use declared::DeclaredEnum;
pub use event::{AccessibilityEvent, EventKind, INVALID_DISPLAY, INVALID_WINDOW, NodeHandle};
pub use fragment::Fragment;
pub use key_combo::{KeyComboAction, KeyComboCode};
pub use modes::{
    DescriptionOrder, HeadingType, InputMode, Magnification, MagnificationMode,
    MagnificationState, Role,
};
pub use value::{PlainValue, Value};
pub use variable_id::VariableId;
