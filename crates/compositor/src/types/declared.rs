//! Enums whose values templates can compare against.
//!
//! A template references an enum variable (e.g. `collection.role`) and
//! compares it with a label from that enum's table (`"pager"`). The table is
//! declared alongside the variable namespace so the engine can map labels to
//! the integers the resolver returns.

/// An enum exposed to templates through a declared label table.
pub trait DeclaredEnum: Copy + 'static {
    /// Name of the enum table (e.g. `"role"`).
    const TABLE: &'static str;

    /// Every value, in declaration order.
    const ALL: &'static [Self];

    /// The integer returned by `get_enum` for this value.
    fn ordinal(self) -> i32;

    /// The label templates use for this value.
    fn label(self) -> &'static str;

    /// Look up a value by its label.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.label() == label)
    }

    /// `(ordinal, label)` pairs for the engine's enum table.
    fn table() -> Vec<(i32, &'static str)> {
        Self::ALL.iter().map(|v| (v.ordinal(), v.label())).collect()
    }
}

/// Declares a fieldless enum together with its [`DeclaredEnum`] table.
macro_rules! declared_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $table:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $ordinal:literal => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        #[repr(i32)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $ordinal
            ),+
        }

        impl $crate::types::DeclaredEnum for $name {
            const TABLE: &'static str = $table;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn ordinal(self) -> i32 {
                self as i32
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }
    };
}

pub(crate) use declared_enum;
