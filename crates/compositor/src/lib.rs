pub mod composer;
pub mod error;
pub mod flags;
pub mod functions;
pub mod namespace;
pub mod navigation;
pub mod preferences;
pub mod providers;
pub mod resolver;
pub mod strings;
pub mod types;

pub use composer::CollectionPhraseComposer;
pub use error::{DeclareError, FunctionError, StringsError, compute_suggestions};
pub use flags::{EventFlag, TimedFlagRegistry};
pub use functions::{FunctionContext, FunctionRegistry, TextFunction};
pub use namespace::{Variable, VariableNamespace};
pub use navigation::{NavigationState, PlatformCapabilities};
pub use preferences::VerbosityPreferences;
pub use resolver::{Collaborators, VariableResolver, VariableSource};
pub use types::{
    AccessibilityEvent, Alignment, CollectionState, CollectionTransition, DeclaredEnum,
    DescriptionOrder, EventKind, Fragment, HeadingType, InputMode, ItemState, ListItemState,
    Magnification, MagnificationMode, MagnificationState, NodeHandle, PagerItemState, Role,
    TableItemState, Value, VariableId,
};

/// Creates a `Vec<Value>` of function arguments.
///
/// Each argument is converted via `Into<Value>`, so text, integers, and
/// floats can be mixed.
///
/// # Example
///
/// ```
/// use compositor::{args, Value};
///
/// let a = args!["Inbox", 3, 0.5];
/// assert_eq!(a.len(), 3);
/// assert_eq!(a[0].as_text(), Some("Inbox"));
/// assert_eq!(a[1].as_integer(), Some(3));
/// ```
#[macro_export]
macro_rules! args {
    [] => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    [ $($value:expr),+ $(,)? ] => {
        ::std::vec![$(::std::convert::Into::<$crate::Value>::into($value)),+]
    };
}
