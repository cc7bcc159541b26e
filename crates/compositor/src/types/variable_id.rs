use std::fmt::{Display, Formatter, Result as FmtResult};

use const_fnv1a_hash::fnv1a_hash_str_64;
use serde::{Deserialize, Serialize};

/// A compact identifier for one leaf of the variable namespace.
///
/// `VariableId` wraps a 64-bit FNV-1a hash of the dotted variable name, so
/// the id a template engine caches for `"collection.name"` is stable across
/// sessions and can be computed at compile time:
///
/// ```
/// use compositor::VariableId;
///
/// const COLLECTION_NAME: VariableId = VariableId::from_name("collection.name");
/// assert_eq!(COLLECTION_NAME, VariableId::from_name("collection.name"));
///
/// // Engines that store ids as plain integers get the same id back.
/// assert_eq!(VariableId::from_raw(COLLECTION_NAME.as_u64()), COLLECTION_NAME);
/// ```
///
/// An id that was never declared is not an error: every typed getter
/// resolves it to that type's zero value.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct VariableId(u64);

impl VariableId {
    /// Create a `VariableId` from a dotted variable name.
    pub const fn from_name(name: &str) -> Self {
        Self(fnv1a_hash_str_64(name))
    }

    /// Wrap a raw id, e.g. one stored by a template engine.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw hash value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "VariableId({:016x})", self.0)
    }
}
