use serde::{Deserialize, Serialize};

/// Display id used before any focus event has been seen.
pub const INVALID_DISPLAY: i32 = -1;

/// Window id used before any focus event has been seen.
pub const INVALID_WINDOW: i32 = -1;

/// Accessibility event types the host forwards to the variable layer.
///
/// Only [`EventKind::ViewAccessibilityFocused`] changes navigation state;
/// the rest are accepted so hosts can forward every event unfiltered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ViewAccessibilityFocused,
    ViewAccessibilityFocusCleared,
    ViewFocused,
    ViewClicked,
    ViewScrolled,
    ViewSelected,
    ViewTextChanged,
    ViewTextSelectionChanged,
    WindowStateChanged,
    WindowContentChanged,
    Announcement,
}

/// Opaque reference to a node in the host's accessibility tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeHandle {
    pub id: u64,
    pub window_id: i32,
}

/// One accessibility event as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityEvent {
    pub kind: EventKind,
    #[serde(default = "invalid_display")]
    pub display_id: i32,
    /// The node the event originated from, if it is still available.
    #[serde(default)]
    pub source: Option<NodeHandle>,
}

impl AccessibilityEvent {
    pub fn new(kind: EventKind, display_id: i32, source: Option<NodeHandle>) -> Self {
        Self {
            kind,
            display_id,
            source,
        }
    }

    /// An accessibility-focus event on `source`.
    pub fn focused(source: NodeHandle, display_id: i32) -> Self {
        Self::new(EventKind::ViewAccessibilityFocused, display_id, Some(source))
    }
}

fn invalid_display() -> i32 {
    INVALID_DISPLAY
}
