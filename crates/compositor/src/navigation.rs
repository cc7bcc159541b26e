//! Transient navigation state derived from accessibility events.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::providers::{CollectionStateProvider, NodeIntrospection, SecureSettings};
use crate::types::{
    AccessibilityEvent, CollectionState, EventKind, INVALID_DISPLAY, INVALID_WINDOW,
    Magnification,
};

/// What the platform supports, fixed for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformCapabilities {
    /// Speaking passwords is a per-service preference rather than a system
    /// secure setting.
    #[builder(default)]
    pub speak_passwords_service_pref: bool,
    /// The device is a watch; seek-bar hints are omitted.
    #[builder(default)]
    pub is_watch: bool,
}

/// Focus, window, and preference state the variables are computed from.
///
/// Owned by the session and mutated only through [`NavigationState::update`]
/// and the setters. The resolver borrows it read-only.
#[derive(Debug, Clone)]
pub struct NavigationState {
    platform: PlatformCapabilities,
    collection: CollectionState,

    last_window_id: i32,
    current_window_id: i32,
    current_display_id: i32,
    is_current_focus_scrollable: bool,
    is_last_focus_scrollable: bool,

    magnification: Magnification,
    selection_mode_active: bool,
    last_text_edit_is_password: bool,
    interpret_as_entry_key: bool,

    use_single_tap: bool,
    speech_rate: f32,
    use_audio_focus: bool,
    speak_passwords: bool,
    usage_hint_enabled: bool,
    say_capital: bool,
}

impl NavigationState {
    pub fn new(platform: PlatformCapabilities) -> Self {
        Self {
            platform,
            collection: CollectionState::default(),
            last_window_id: INVALID_WINDOW,
            current_window_id: INVALID_WINDOW,
            current_display_id: INVALID_DISPLAY,
            is_current_focus_scrollable: false,
            is_last_focus_scrollable: false,
            magnification: Magnification::default(),
            selection_mode_active: false,
            last_text_edit_is_password: false,
            interpret_as_entry_key: false,
            use_single_tap: false,
            speech_rate: 1.0,
            use_audio_focus: false,
            // Upgrades keep announcing passwords until the user opts out.
            speak_passwords: true,
            usage_hint_enabled: true,
            say_capital: false,
        }
    }

    /// Apply one accessibility event.
    ///
    /// Only accessibility-focus events change state: the collection
    /// snapshot is replaced, and when the source node is available the
    /// scrollable membership and window id shift from current to last.
    pub fn update(
        &mut self,
        event: &AccessibilityEvent,
        collections: &dyn CollectionStateProvider,
        nodes: &dyn NodeIntrospection,
    ) {
        if event.kind != EventKind::ViewAccessibilityFocused {
            return;
        }

        self.collection = collections.snapshot(event.source.as_ref(), event);

        let Some(source) = event.source else {
            tracing::trace!("accessibility focus event without source node");
            return;
        };

        self.is_last_focus_scrollable = self.is_current_focus_scrollable;
        self.is_current_focus_scrollable = nodes.is_in_scrollable(&source);

        self.last_window_id = self.current_window_id;
        self.current_window_id = source.window_id;
        self.current_display_id = event.display_id;

        tracing::trace!(
            window_id = self.current_window_id,
            last_window_id = self.last_window_id,
            display_id = self.current_display_id,
            scrollable = self.is_current_focus_scrollable,
            "updated navigation state"
        );
    }

    /// Whether password characters should be spoken.
    ///
    /// Newer platforms make this a per-service preference; older ones keep
    /// it in a system secure setting.
    pub fn should_speak_passwords(&self, secure_settings: &dyn SecureSettings) -> bool {
        if self.platform.speak_passwords_service_pref {
            self.speak_passwords
        } else {
            secure_settings.speak_passwords()
        }
    }

    pub fn platform(&self) -> PlatformCapabilities {
        self.platform
    }

    pub fn collection(&self) -> &CollectionState {
        &self.collection
    }

    pub fn last_window_id(&self) -> i32 {
        self.last_window_id
    }

    pub fn current_window_id(&self) -> i32 {
        self.current_window_id
    }

    pub fn current_display_id(&self) -> i32 {
        self.current_display_id
    }

    pub fn is_current_focus_scrollable(&self) -> bool {
        self.is_current_focus_scrollable
    }

    pub fn is_last_focus_scrollable(&self) -> bool {
        self.is_last_focus_scrollable
    }

    pub fn magnification(&self) -> Magnification {
        self.magnification
    }

    pub fn selection_mode_active(&self) -> bool {
        self.selection_mode_active
    }

    pub fn last_text_edit_is_password(&self) -> bool {
        self.last_text_edit_is_password
    }

    pub fn interpret_as_entry_key(&self) -> bool {
        self.interpret_as_entry_key
    }

    pub fn use_single_tap(&self) -> bool {
        self.use_single_tap
    }

    pub fn speech_rate(&self) -> f32 {
        self.speech_rate
    }

    pub fn use_audio_focus(&self) -> bool {
        self.use_audio_focus
    }

    /// The stored per-service speak-passwords preference.
    pub fn speak_passwords_preference(&self) -> bool {
        self.speak_passwords
    }

    pub fn usage_hint_enabled(&self) -> bool {
        self.usage_hint_enabled
    }

    pub fn say_capital(&self) -> bool {
        self.say_capital
    }

    pub fn set_use_single_tap(&mut self, value: bool) {
        self.use_single_tap = value;
    }

    pub fn set_speech_rate(&mut self, value: f32) {
        self.speech_rate = value;
    }

    pub fn set_use_audio_focus(&mut self, value: bool) {
        self.use_audio_focus = value;
    }

    pub fn update_magnification_state(&mut self, magnification: Magnification) {
        self.magnification = magnification;
    }

    pub fn set_selection_mode_active(&mut self, value: bool) {
        self.selection_mode_active = value;
    }

    pub fn set_last_text_edit_is_password(&mut self, value: bool) {
        self.last_text_edit_is_password = value;
    }

    /// Set from the speak-passwords manager; combines the service
    /// preference with headphone state.
    pub fn set_speak_passwords(&mut self, value: bool) {
        self.speak_passwords = value;
    }

    pub fn set_interpret_as_entry_key(&mut self, value: bool) {
        self.interpret_as_entry_key = value;
    }

    pub fn set_usage_hint_enabled(&mut self, value: bool) {
        self.usage_hint_enabled = value;
    }

    pub fn set_say_capital(&mut self, value: bool) {
        self.say_capital = value;
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(PlatformCapabilities::default())
    }
}
