//! Test doubles for the host collaborators.

#![expect(dead_code, reason = "each test binary uses a subset of the doubles")]

use compositor::providers::{
    CollectionStateProvider, GestureShortcutProvider, InputModeProvider, KeyComboProvider,
    NodeIntrospection, WindowInfoProvider,
};
use compositor::types::{KeyComboAction, KeyComboCode};
use compositor::{AccessibilityEvent, CollectionState, InputMode, NodeHandle};

/// Returns the same snapshot for every event.
pub struct FixedCollection(pub CollectionState);

impl CollectionStateProvider for FixedCollection {
    fn snapshot(
        &self,
        _focused: Option<&NodeHandle>,
        _event: &AccessibilityEvent,
    ) -> CollectionState {
        self.0.clone()
    }
}

/// Nodes whose id is listed are scrollable; `child_of_scrollable` nodes
/// have a scrollable parent.
#[derive(Default)]
pub struct Nodes {
    pub scrollable: Vec<u64>,
    pub child_of_scrollable: Vec<u64>,
}

impl NodeIntrospection for Nodes {
    fn is_scrollable(&self, node: &NodeHandle) -> bool {
        self.scrollable.contains(&node.id)
    }

    fn nearest_scrollable_ancestor(&self, node: &NodeHandle) -> Option<NodeHandle> {
        self.child_of_scrollable.contains(&node.id).then_some(NodeHandle {
            id: node.id + 1000,
            window_id: node.window_id,
        })
    }
}

/// Click is bound to key 66, the context menu to key 82; long click is
/// unassigned. Text renders as `"<modifiers>+<key>"`.
pub struct KeyCombos {
    pub trigger_modifier: u32,
}

impl KeyComboProvider for KeyCombos {
    fn code_for(&self, action: KeyComboAction) -> Option<KeyComboCode> {
        match action {
            KeyComboAction::PerformClick => Some(KeyComboCode::new(0, 66)),
            KeyComboAction::OpenContextMenu => Some(KeyComboCode::new(1, 82)),
            KeyComboAction::PerformLongClick => None,
        }
    }

    fn text_for(&self, code: KeyComboCode) -> Option<String> {
        Some(format!("{}+{}", code.modifiers(), code.key_code()))
    }

    fn trigger_modifier(&self) -> u32 {
        self.trigger_modifier
    }
}

pub struct Gestures {
    pub seek_bar: Option<String>,
}

impl GestureShortcutProvider for Gestures {
    fn menu_shortcut_text(&self) -> String {
        "swipe up then right".to_string()
    }

    fn seek_bar_shortcut_text(&self) -> Option<String> {
        self.seek_bar.clone()
    }
}

/// Display 0 is split; window 3 is titled "Calendar".
pub struct Windows;

impl WindowInfoProvider for Windows {
    fn title(&self, window_id: i32) -> Option<String> {
        (window_id == 3).then(|| "Calendar".to_string())
    }

    fn is_split_screen(&self, display_id: i32) -> bool {
        display_id == 0
    }
}

pub struct Input(pub InputMode);

impl InputModeProvider for Input {
    fn input_mode(&self) -> InputMode {
        self.0
    }

    fn is_keyboard_active(&self) -> bool {
        self.0 == InputMode::Keyboard
    }
}

pub fn node(id: u64, window_id: i32) -> NodeHandle {
    NodeHandle { id, window_id }
}
