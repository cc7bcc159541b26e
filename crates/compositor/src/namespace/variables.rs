//! The closed set of variables, one enum per resolved type.

use crate::types::VariableId;

/// Declares a variable enum with its dotted template names.
macro_rules! variables {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $dotted:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            /// Every variable of this type, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The dotted name templates reference.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $dotted),+
                }
            }

            pub const fn id(self) -> VariableId {
                VariableId::from_name(self.name())
            }
        }
    };
}

variables! {
    pub enum BooleanVariable {
        /// Consumes the synced-accessibility-focus flag.
        SyncedAccessibilityFocusLatch => "global.syncedAccessibilityFocusLatch",
        IsKeyboardActive => "global.isKeyboardActive",
        IsSelectionModeActive => "global.isSelectionModeActive",
        UseSingleTap => "global.useSingleTap",
        UseAudioFocus => "global.useAudioFocus",
        LastTextEditIsPassword => "global.lastTextEditIsPassword",
        SpeakPasswordsServicePolicy => "global.speakPasswordsServicePolicy",
        SpeakPasswordFieldContent => "global.speakPasswordFieldContent",
        EnableUsageHint => "global.enableUsageHint",
        IsInterpretAsEntryKey => "global.isInterpretAsEntryKey",
        CollectionExists => "collection.exists",
        IsRowTransition => "collection.isRowTransition",
        IsColumnTransition => "collection.isColumnTransition",
        ListItemIsHeading => "collection.listItem.isHeading",
        PagerItemIsHeading => "collection.pagerItem.isHeading",
        IsSplitScreenMode => "windows.isSplitScreenMode",
        IsCurrentFocusInScrollableNode => "focus.isCurrentFocusInScrollableNode",
        IsLastFocusInScrollableNode => "focus.isLastFocusInScrollableNode",
        HasKeyForClick => "keyCombo.hasKeyForClick",
        HasKeyForLongClick => "keyCombo.hasKeyForLongClick",
        SpeakRole => "verbosity.speakRole",
        SpeakCollectionInfo => "verbosity.speakCollectionInfo",
        SpeakSystemWindowTitles => "verbosity.speakSystemWindowTitles",
        SpeakElementIds => "verbosity.speakElementIds",
    }
}

variables! {
    /// Integer variables. Unknown indices resolve to -1.
    pub enum IntegerVariable {
        TableItemRowIndex => "collection.tableItem.rowIndex",
        TableItemColumnIndex => "collection.tableItem.columnIndex",
        PagerItemRowIndex => "collection.pagerItem.rowIndex",
        PagerItemColumnIndex => "collection.pagerItem.columnIndex",
        LastWindowId => "windows.lastWindowId",
    }
}

variables! {
    pub enum NumberVariable {
        SpeechRate => "global.speechRate",
    }
}

variables! {
    pub enum StringVariable {
        SeekbarHint => "global.seekbarHint",
        CollectionName => "collection.name",
        CollectionTransition => "collection.transition",
        TableItemRowName => "collection.tableItem.rowName",
        TableItemColumnName => "collection.tableItem.columnName",
        ListItemPositionDescription => "collection.listItem.positionDescription",
        StringRepresentationForClick => "keyCombo.stringRepresentationForClick",
        StringRepresentationForLongClick => "keyCombo.stringRepresentationForLongClick",
        MagnificationStateChanged => "magnification.stateChanged",
        NodeMenuShortcut => "gesture.nodeMenuShortcut",
    }
}

variables! {
    pub enum EnumVariable {
        InputMode => "global.inputMode",
        CollectionRole => "collection.role",
        TableItemHeadingType => "collection.tableItem.headingType",
        DescriptionOrder => "verbosity.descriptionOrder",
    }
}

impl EnumVariable {
    /// The enum table whose labels this variable's values map to.
    pub const fn table(self) -> &'static str {
        match self {
            EnumVariable::InputMode => "input_mode",
            EnumVariable::CollectionRole => "role",
            EnumVariable::TableItemHeadingType => "heading_type",
            EnumVariable::DescriptionOrder => "description_order",
        }
    }
}

/// A declared variable of any type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    Boolean(BooleanVariable),
    Integer(IntegerVariable),
    Number(NumberVariable),
    String(StringVariable),
    Enum(EnumVariable),
}

impl Variable {
    pub fn name(self) -> &'static str {
        match self {
            Variable::Boolean(v) => v.name(),
            Variable::Integer(v) => v.name(),
            Variable::Number(v) => v.name(),
            Variable::String(v) => v.name(),
            Variable::Enum(v) => v.name(),
        }
    }

    pub fn id(self) -> VariableId {
        VariableId::from_name(self.name())
    }

    /// The type name shown in listings (`"enum role"` for enums).
    pub fn type_name(self) -> String {
        match self {
            Variable::Boolean(_) => "bool".to_string(),
            Variable::Integer(_) => "int".to_string(),
            Variable::Number(_) => "number".to_string(),
            Variable::String(_) => "string".to_string(),
            Variable::Enum(v) => format!("enum {}", v.table()),
        }
    }

    /// The dotted prefix (`"collection"`, `"keyCombo"`, ...).
    pub fn category(self) -> &'static str {
        let name = self.name();
        name.split_once('.').map_or(name, |(category, _)| category)
    }

    /// Every declared variable, grouped by type.
    pub fn all() -> impl Iterator<Item = Variable> {
        let booleans = BooleanVariable::ALL.iter().copied().map(Variable::Boolean);
        let integers = IntegerVariable::ALL.iter().copied().map(Variable::Integer);
        let numbers = NumberVariable::ALL.iter().copied().map(Variable::Number);
        let strings = StringVariable::ALL.iter().copied().map(Variable::String);
        let enums = EnumVariable::ALL.iter().copied().map(Variable::Enum);
        booleans.chain(integers).chain(numbers).chain(strings).chain(enums)
    }
}
