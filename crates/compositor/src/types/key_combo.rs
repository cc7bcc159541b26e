use serde::{Deserialize, Serialize};

/// A keyboard shortcut: modifier mask in the high 32 bits, key code in the
/// low 32 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyComboCode(u64);

impl KeyComboCode {
    pub const fn new(modifiers: u32, key_code: u32) -> Self {
        Self(((modifiers as u64) << 32) | key_code as u64)
    }

    pub fn modifiers(&self) -> u32 {
        (self.0 >> 32) as u32
    }

    pub fn key_code(&self) -> u32 {
        (self.0 & u64::from(u32::MAX)) as u32
    }

    /// The same key with `modifiers` added to its modifier mask.
    pub fn with_modifiers(&self, modifiers: u32) -> Self {
        Self::new(self.modifiers() | modifiers, self.key_code())
    }
}

/// Actions a keyboard user can bind a shortcut to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyComboAction {
    PerformClick,
    PerformLongClick,
    OpenContextMenu,
}
