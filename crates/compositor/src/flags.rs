//! One-shot flags raised by event handling and consumed by templates.
//!
//! Some feedback has to be suppressed once after a synthetic change: a
//! focus that was moved programmatically, a cursor reset after an edit
//! field gained focus. The code making the change raises a flag, and the
//! first check of that flag in the same dispatch cycle consumes it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Kinds of one-shot flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventFlag {
    SkipFocusProcessingAfterGranularityMove,
    SkipFocusProcessingAfterCursorControl,
    /// The system moved the cursor after an edit field was focused and it
    /// is about to be reset.
    SkipSelectionChangedAfterFocused,
    /// Text selection was snapped automatically.
    SkipSelectionChangedAfterCursorReset,
    /// Refocusing after an IME closed.
    SkipFocusProcessingAfterImeClosed,
    /// The next accessibility-focus event comes from syncing accessibility
    /// focus to input focus, not from touch exploration.
    SyncedAccessibilityFocus,
}

/// Pending one-shot flags, each stamped with when it was raised.
///
/// The registry is shared by the event handler (which raises) and the
/// resolver (which consumes through `&self`), so it uses `RefCell`. That
/// makes it `!Sync`: the single event thread is the only writer and reader.
///
/// ```
/// use compositor::{EventFlag, TimedFlagRegistry};
///
/// let flags = TimedFlagRegistry::new();
/// flags.raise(EventFlag::SyncedAccessibilityFocus);
/// assert!(flags.check_and_clear(EventFlag::SyncedAccessibilityFocus));
/// assert!(!flags.check_and_clear(EventFlag::SyncedAccessibilityFocus));
/// ```
#[derive(Debug, Default)]
pub struct TimedFlagRegistry {
    pending: RefCell<HashMap<EventFlag, Instant>>,
}

impl TimedFlagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `flag` pending. Raising a pending flag only refreshes its stamp.
    pub fn raise(&self, flag: EventFlag) {
        tracing::trace!(?flag, "raised timed flag");
        self.pending.borrow_mut().insert(flag, Instant::now());
    }

    /// Whether `flag` was pending. The flag is cleared either way.
    pub fn check_and_clear(&self, flag: EventFlag) -> bool {
        self.pending.borrow_mut().remove(&flag).is_some()
    }

    /// When `flag` was last raised, without consuming it.
    pub fn raised_at(&self, flag: EventFlag) -> Option<Instant> {
        self.pending.borrow().get(&flag).copied()
    }

    /// Consumes both skip-selection flags; true if either was pending.
    pub fn resetting_node_cursor(&self) -> bool {
        // Both checks must run so neither flag survives into the next cycle.
        let after_focused = self.check_and_clear(EventFlag::SkipSelectionChangedAfterFocused);
        let after_reset = self.check_and_clear(EventFlag::SkipSelectionChangedAfterCursorReset);
        after_focused || after_reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_raised_flag_is_absent() {
        let flags = TimedFlagRegistry::new();
        assert!(!flags.check_and_clear(EventFlag::SkipFocusProcessingAfterImeClosed));
        assert!(flags.raised_at(EventFlag::SkipFocusProcessingAfterImeClosed).is_none());
    }

    #[test]
    fn raising_twice_is_consumed_once() {
        let flags = TimedFlagRegistry::new();
        flags.raise(EventFlag::SkipFocusProcessingAfterCursorControl);
        flags.raise(EventFlag::SkipFocusProcessingAfterCursorControl);
        assert!(flags.check_and_clear(EventFlag::SkipFocusProcessingAfterCursorControl));
        assert!(!flags.check_and_clear(EventFlag::SkipFocusProcessingAfterCursorControl));
    }

    #[test]
    fn flags_are_independent() {
        let flags = TimedFlagRegistry::new();
        flags.raise(EventFlag::SyncedAccessibilityFocus);
        assert!(!flags.check_and_clear(EventFlag::SkipFocusProcessingAfterGranularityMove));
        assert!(flags.check_and_clear(EventFlag::SyncedAccessibilityFocus));
    }

    #[test]
    fn raised_at_does_not_consume() {
        let flags = TimedFlagRegistry::new();
        flags.raise(EventFlag::SyncedAccessibilityFocus);
        assert!(flags.raised_at(EventFlag::SyncedAccessibilityFocus).is_some());
        assert!(flags.check_and_clear(EventFlag::SyncedAccessibilityFocus));
    }

    #[test]
    fn resetting_node_cursor_clears_both_flags() {
        let flags = TimedFlagRegistry::new();
        flags.raise(EventFlag::SkipSelectionChangedAfterFocused);
        flags.raise(EventFlag::SkipSelectionChangedAfterCursorReset);
        assert!(flags.resetting_node_cursor());
        assert!(!flags.check_and_clear(EventFlag::SkipSelectionChangedAfterCursorReset));
        assert!(!flags.resetting_node_cursor());
    }
}
