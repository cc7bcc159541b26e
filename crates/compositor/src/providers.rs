//! Interfaces to the host's collaborators.
//!
//! The variable layer owns no platform access. Everything it knows about
//! nodes, windows, keyboards, gestures, and system settings arrives through
//! these traits. Optional collaborators are passed as `Option<&dyn ...>`;
//! when one is missing the dependent variables resolve to empty text or
//! `false`.

use crate::types::{
    AccessibilityEvent, CollectionState, InputMode, KeyComboAction, KeyComboCode, NodeHandle,
};

/// Computes the collection snapshot for an accessibility-focus event.
pub trait CollectionStateProvider {
    /// Returns the collection state for the focused node.
    ///
    /// `focused` is `None` when the event's source node is no longer
    /// available; implementations should then report no transition.
    fn snapshot(&self, focused: Option<&NodeHandle>, event: &AccessibilityEvent)
    -> CollectionState;
}

/// Per-node introspection needed for scroll tracking.
pub trait NodeIntrospection {
    fn is_scrollable(&self, node: &NodeHandle) -> bool;

    /// Nearest ancestor of `node` that is scrollable, excluding `node`.
    fn nearest_scrollable_ancestor(&self, node: &NodeHandle) -> Option<NodeHandle>;

    /// Whether `node` or one of its ancestors is scrollable.
    fn is_in_scrollable(&self, node: &NodeHandle) -> bool {
        self.is_scrollable(node) || self.nearest_scrollable_ancestor(node).is_some()
    }
}

/// Keyboard shortcut configuration.
pub trait KeyComboProvider {
    /// The shortcut bound to `action`, or `None` when unassigned.
    fn code_for(&self, action: KeyComboAction) -> Option<KeyComboCode>;

    /// Spoken form of a shortcut, e.g. `"Alt + Enter"`.
    fn text_for(&self, code: KeyComboCode) -> Option<String>;

    /// Modifier mask that every shortcut is pressed together with.
    fn trigger_modifier(&self) -> u32 {
        0
    }
}

/// Gesture shortcut text for hints.
pub trait GestureShortcutProvider {
    /// How to open the actions menu for the focused node.
    fn menu_shortcut_text(&self) -> String;

    /// How to adjust a seek bar, or `None` to use the default hint.
    fn seek_bar_shortcut_text(&self) -> Option<String>;
}

/// Window titles and split-screen state.
pub trait WindowInfoProvider {
    fn title(&self, window_id: i32) -> Option<String>;

    fn is_split_screen(&self, display_id: i32) -> bool;
}

/// Locale-aware speech normalization (symbol names, repeated characters).
pub trait SpeechNormalizer {
    fn clean_up(&self, text: &str) -> String;

    fn collapse_repeated_and_clean_up(&self, text: &str) -> Option<String>;
}

/// System-level secure settings.
pub trait SecureSettings {
    /// The system-wide "speak passwords" setting.
    fn speak_passwords(&self) -> bool;
}

/// Current input mode and keyboard presence.
pub trait InputModeProvider {
    fn input_mode(&self) -> InputMode;

    fn is_keyboard_active(&self) -> bool;
}

/// A normalizer that returns text unchanged.
///
/// Useful for hosts without symbol tables and for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughNormalizer;

impl SpeechNormalizer for PassthroughNormalizer {
    fn clean_up(&self, text: &str) -> String {
        text.to_string()
    }

    fn collapse_repeated_and_clean_up(&self, text: &str) -> Option<String> {
        Some(text.to_string())
    }
}

/// Secure settings with a fixed answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSecureSettings {
    pub speak_passwords: bool,
}

impl SecureSettings for FixedSecureSettings {
    fn speak_passwords(&self) -> bool {
        self.speak_passwords
    }
}
