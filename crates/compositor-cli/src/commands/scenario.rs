//! Scenario files for `compositor replay` and the providers that script them.
//!
//! A scenario is a JSON document with session configuration and a list of
//! steps. Event steps carry the collection snapshot and scrollability the
//! host would have computed for that event, so replaying needs no node tree.
//!
//! ```json
//! {
//!   "platform": { "is_watch": false },
//!   "input_mode": "touch",
//!   "steps": [
//!     { "event": { "kind": "view_accessibility_focused",
//!                  "source": { "id": 1, "window_id": 3 },
//!                  "collection": { "transition": "enter", "role": "list",
//!                                  "row_count": 5, "alignment": "vertical" } } },
//!     { "raise": "synced_accessibility_focus" },
//!     { "set": { "name": "speech_rate", "value": 1.5 } },
//!     { "resolve": ["collection.transition", "global.syncedAccessibilityFocusLatch"] }
//!   ]
//! }
//! ```

use std::collections::HashMap;

use compositor::providers::{
    CollectionStateProvider, FixedSecureSettings, GestureShortcutProvider, InputModeProvider,
    NodeIntrospection, PassthroughNormalizer, WindowInfoProvider,
};
use compositor::strings::EnglishStrings;
use compositor::types::PlainValue;
use compositor::{
    AccessibilityEvent, Collaborators, CollectionState, DeclareError, EventFlag, InputMode,
    Magnification, NavigationState, NodeHandle, PlatformCapabilities, TimedFlagRegistry,
    VariableNamespace, VariableResolver, VerbosityPreferences,
};
use serde::{Deserialize, Serialize};

/// A replayable session.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub platform: PlatformCapabilities,
    pub verbosity: VerbosityPreferences,
    /// The system secure setting for speaking passwords.
    pub system_speak_passwords: bool,
    pub input_mode: Option<InputMode>,
    pub gestures: Option<ScriptedGestures>,
    pub windows: Option<ScriptedWindows>,
    pub steps: Vec<Step>,
}

/// One step of a scenario.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Deliver an accessibility event.
    Event(EventStep),
    /// Raise a one-shot flag.
    Raise(EventFlag),
    /// Change a navigation setting.
    Set(Setting),
    /// Report a magnification change.
    Magnification(Magnification),
    /// Resolve the named variables.
    Resolve(Vec<String>),
}

#[derive(Debug, Deserialize)]
pub struct EventStep {
    #[serde(flatten)]
    pub event: AccessibilityEvent,
    /// Snapshot the host computed for the event's source.
    #[serde(default)]
    pub collection: CollectionState,
    /// Whether the source or one of its ancestors scrolls.
    #[serde(default)]
    pub scrollable: bool,
}

/// Navigation settings a scenario can change.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "name", content = "value", rename_all = "snake_case")]
pub enum Setting {
    SpeechRate(f32),
    UseSingleTap(bool),
    UseAudioFocus(bool),
    SelectionModeActive(bool),
    LastTextEditIsPassword(bool),
    SpeakPasswords(bool),
    InterpretAsEntryKey(bool),
    UsageHintEnabled(bool),
    SayCapital(bool),
}

impl Setting {
    fn apply(self, navigation: &mut NavigationState) {
        match self {
            Setting::SpeechRate(v) => navigation.set_speech_rate(v),
            Setting::UseSingleTap(v) => navigation.set_use_single_tap(v),
            Setting::UseAudioFocus(v) => navigation.set_use_audio_focus(v),
            Setting::SelectionModeActive(v) => navigation.set_selection_mode_active(v),
            Setting::LastTextEditIsPassword(v) => navigation.set_last_text_edit_is_password(v),
            Setting::SpeakPasswords(v) => navigation.set_speak_passwords(v),
            Setting::InterpretAsEntryKey(v) => navigation.set_interpret_as_entry_key(v),
            Setting::UsageHintEnabled(v) => navigation.set_usage_hint_enabled(v),
            Setting::SayCapital(v) => navigation.set_say_capital(v),
        }
    }
}

/// Gesture hint text for the scenario.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScriptedGestures {
    pub menu_shortcut: String,
    pub seek_bar: Option<String>,
}

impl GestureShortcutProvider for ScriptedGestures {
    fn menu_shortcut_text(&self) -> String {
        self.menu_shortcut.clone()
    }

    fn seek_bar_shortcut_text(&self) -> Option<String> {
        self.seek_bar.clone()
    }
}

/// Window titles by id and the displays in split-screen mode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScriptedWindows {
    pub titles: HashMap<i32, String>,
    pub split_screen_displays: Vec<i32>,
}

impl WindowInfoProvider for ScriptedWindows {
    fn title(&self, window_id: i32) -> Option<String> {
        self.titles.get(&window_id).cloned()
    }

    fn is_split_screen(&self, display_id: i32) -> bool {
        self.split_screen_displays.contains(&display_id)
    }
}

struct ScriptedCollection<'a>(&'a CollectionState);

impl CollectionStateProvider for ScriptedCollection<'_> {
    fn snapshot(
        &self,
        _focused: Option<&NodeHandle>,
        _event: &AccessibilityEvent,
    ) -> CollectionState {
        self.0.clone()
    }
}

struct ScriptedNodes {
    scrollable: bool,
}

impl NodeIntrospection for ScriptedNodes {
    fn is_scrollable(&self, _node: &NodeHandle) -> bool {
        self.scrollable
    }

    fn nearest_scrollable_ancestor(&self, _node: &NodeHandle) -> Option<NodeHandle> {
        None
    }
}

struct FixedInputMode(InputMode);

impl InputModeProvider for FixedInputMode {
    fn input_mode(&self) -> InputMode {
        self.0
    }

    fn is_keyboard_active(&self) -> bool {
        self.0 == InputMode::Keyboard
    }
}

/// A variable resolved during replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved {
    pub step: usize,
    pub name: String,
    pub value: PlainValue,
}

/// A `resolve` step named a variable that is not declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownVariable {
    pub step: usize,
    pub name: String,
    pub suggestions: Vec<String>,
}

/// Everything resolved while replaying a scenario.
#[derive(Debug, Default, Serialize)]
pub struct ReplayReport {
    pub resolved: Vec<Resolved>,
    pub unknown: Vec<UnknownVariable>,
}

/// Replay `scenario` step by step against a fresh session.
pub fn replay(scenario: &Scenario) -> Result<ReplayReport, DeclareError> {
    let namespace = VariableNamespace::declare()?;
    let mut navigation = NavigationState::new(scenario.platform);
    let flags = TimedFlagRegistry::new();
    let strings = EnglishStrings::new();
    let secure_settings = FixedSecureSettings {
        speak_passwords: scenario.system_speak_passwords,
    };
    let input_mode = scenario.input_mode.map(FixedInputMode);
    let mut report = ReplayReport::default();

    for (index, step) in scenario.steps.iter().enumerate() {
        let step_number = index + 1;
        match step {
            Step::Event(event_step) => {
                tracing::debug!(
                    step = step_number,
                    kind = ?event_step.event.kind,
                    "replaying event"
                );
                navigation.update(
                    &event_step.event,
                    &ScriptedCollection(&event_step.collection),
                    &ScriptedNodes {
                        scrollable: event_step.scrollable,
                    },
                );
            }
            Step::Raise(flag) => flags.raise(*flag),
            Step::Set(setting) => setting.apply(&mut navigation),
            Step::Magnification(magnification) => {
                navigation.update_magnification_state(*magnification);
            }
            Step::Resolve(names) => {
                let collaborators = Collaborators::builder()
                    .strings(&strings)
                    .normalizer(&PassthroughNormalizer)
                    .secure_settings(&secure_settings)
                    .maybe_gestures(
                        scenario
                            .gestures
                            .as_ref()
                            .map(|g| g as &dyn GestureShortcutProvider),
                    )
                    .maybe_windows(scenario.windows.as_ref().map(|w| w as &dyn WindowInfoProvider))
                    .maybe_input_mode(input_mode.as_ref().map(|i| i as &dyn InputModeProvider))
                    .build();
                let resolver = VariableResolver::builder()
                    .namespace(&namespace)
                    .navigation(&navigation)
                    .flags(&flags)
                    .verbosity(&scenario.verbosity)
                    .collaborators(collaborators)
                    .build();

                for name in names {
                    match resolver.resolve_name(name) {
                        Some(value) => report.resolved.push(Resolved {
                            step: step_number,
                            name: name.clone(),
                            value: PlainValue::from(&value),
                        }),
                        None => report.unknown.push(UnknownVariable {
                            step: step_number,
                            name: name.clone(),
                            suggestions: namespace.suggestions(name),
                        }),
                    }
                }
            }
        }
    }

    Ok(report)
}
