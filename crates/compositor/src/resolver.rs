//! The typed-variable facade the template engine resolves leaves through.

use bon::Builder;

use crate::composer::CollectionPhraseComposer;
use crate::flags::{EventFlag, TimedFlagRegistry};
use crate::functions::FunctionContext;
use crate::namespace::{
    BooleanVariable, EnumVariable, IntegerVariable, NumberVariable, StringVariable, Variable,
    VariableNamespace,
};
use crate::navigation::NavigationState;
use crate::preferences::VerbosityPreferences;
use crate::providers::{
    GestureShortcutProvider, InputModeProvider, KeyComboProvider, SecureSettings,
    SpeechNormalizer, WindowInfoProvider,
};
use crate::strings::{StringId, Strings};
use crate::types::{
    DeclaredEnum, HeadingType, InputMode, KeyComboAction, KeyComboCode, MagnificationMode,
    MagnificationState, Value, VariableId,
};

/// Typed getters a template engine calls per leaf.
///
/// Every getter returns that type's zero value for an id it does not
/// recognize: `false`, `0`, `0.0`, `""`, or enum ordinal `0`. References and
/// arrays are reserved; the defaults report them absent.
pub trait VariableSource {
    fn get_boolean(&self, id: VariableId) -> bool;

    fn get_integer(&self, id: VariableId) -> i32;

    fn get_number(&self, id: VariableId) -> f64;

    fn get_string(&self, id: VariableId) -> String;

    fn get_enum(&self, id: VariableId) -> i32;

    fn get_reference(&self, _id: VariableId) -> Option<&dyn VariableSource> {
        None
    }

    fn get_array_length(&self, _id: VariableId) -> usize {
        0
    }

    fn get_array_string_element(&self, _id: VariableId, _index: usize) -> String {
        String::new()
    }

    fn get_array_child_element(
        &self,
        _id: VariableId,
        _index: usize,
    ) -> Option<&dyn VariableSource> {
        None
    }
}

/// Host collaborators the resolver reads through.
///
/// Optional collaborators may be left unset; variables that depend on them
/// resolve to empty text or `false`.
#[derive(Builder, Clone, Copy)]
pub struct Collaborators<'a> {
    strings: &'a dyn Strings,
    normalizer: &'a dyn SpeechNormalizer,
    secure_settings: &'a dyn SecureSettings,
    key_combos: Option<&'a dyn KeyComboProvider>,
    gestures: Option<&'a dyn GestureShortcutProvider>,
    windows: Option<&'a dyn WindowInfoProvider>,
    input_mode: Option<&'a dyn InputModeProvider>,
}

/// Resolves declared variables against the session state.
///
/// The resolver only borrows: the host keeps ownership of navigation
/// state, flags, and preferences, and mutates them between evaluations.
/// The one side effect of resolution is consuming the synced-focus latch.
///
/// ```
/// use compositor::namespace::VariableNamespace;
/// use compositor::providers::{FixedSecureSettings, PassthroughNormalizer};
/// use compositor::strings::EnglishStrings;
/// use compositor::{
///     Collaborators, EventFlag, NavigationState, TimedFlagRegistry, VariableId, VariableResolver,
///     VariableSource, VerbosityPreferences,
/// };
///
/// let namespace = VariableNamespace::declare().unwrap();
/// let navigation = NavigationState::default();
/// let flags = TimedFlagRegistry::new();
/// let verbosity = VerbosityPreferences::default();
/// let strings = EnglishStrings::new();
/// let settings = FixedSecureSettings::default();
/// let collaborators = Collaborators::builder()
///     .strings(&strings)
///     .normalizer(&PassthroughNormalizer)
///     .secure_settings(&settings)
///     .build();
///
/// let resolver = VariableResolver::builder()
///     .namespace(&namespace)
///     .navigation(&navigation)
///     .flags(&flags)
///     .verbosity(&verbosity)
///     .collaborators(collaborators)
///     .build();
///
/// let latch = VariableId::from_name("global.syncedAccessibilityFocusLatch");
/// flags.raise(EventFlag::SyncedAccessibilityFocus);
/// assert!(resolver.get_boolean(latch));
/// assert!(!resolver.get_boolean(latch));
/// ```
#[derive(Builder, Clone, Copy)]
pub struct VariableResolver<'a> {
    namespace: &'a VariableNamespace,
    navigation: &'a NavigationState,
    flags: &'a TimedFlagRegistry,
    verbosity: &'a VerbosityPreferences,
    collaborators: Collaborators<'a>,
}

impl<'a> VariableResolver<'a> {
    /// Context for invoking text functions with this session's settings.
    pub fn function_context(&self) -> FunctionContext<'a> {
        FunctionContext::builder()
            .normalizer(self.collaborators.normalizer)
            .strings(self.collaborators.strings)
            .maybe_windows(self.collaborators.windows)
            .say_capital(self.navigation.say_capital())
            .build()
    }

    /// Resolves `variable` to a [`Value`]; enums resolve to their ordinal.
    pub fn resolve(&self, variable: Variable) -> Value {
        match variable {
            Variable::Boolean(v) => Value::from(self.boolean(v)),
            Variable::Integer(v) => Value::from(self.integer(v)),
            Variable::Number(v) => Value::from(self.number(v)),
            Variable::String(v) => Value::from(self.string(v)),
            Variable::Enum(v) => Value::from(self.enumeration(v)),
        }
    }

    /// Resolves a variable by dotted name, or `None` if it is not declared.
    pub fn resolve_name(&self, name: &str) -> Option<Value> {
        let id = self.namespace.id_of(name)?;
        self.namespace.lookup(id).map(|variable| self.resolve(variable))
    }

    fn composer(&self) -> CollectionPhraseComposer<'a> {
        CollectionPhraseComposer::new(self.collaborators.strings)
    }

    fn boolean(&self, variable: BooleanVariable) -> bool {
        let nav = self.navigation;
        let collection = nav.collection();
        match variable {
            BooleanVariable::SyncedAccessibilityFocusLatch => {
                self.flags.check_and_clear(EventFlag::SyncedAccessibilityFocus)
            }
            BooleanVariable::IsKeyboardActive => self
                .collaborators
                .input_mode
                .is_some_and(InputModeProvider::is_keyboard_active),
            BooleanVariable::IsSelectionModeActive => nav.selection_mode_active(),
            BooleanVariable::UseSingleTap => nav.use_single_tap(),
            BooleanVariable::UseAudioFocus => nav.use_audio_focus(),
            BooleanVariable::LastTextEditIsPassword => nav.last_text_edit_is_password(),
            BooleanVariable::SpeakPasswordsServicePolicy => nav.speak_passwords_preference(),
            // Field content is only spoken under the system setting, never
            // under the per-service preference.
            BooleanVariable::SpeakPasswordFieldContent => {
                nav.should_speak_passwords(self.collaborators.secure_settings)
                    && !nav.platform().speak_passwords_service_pref
            }
            BooleanVariable::EnableUsageHint => nav.usage_hint_enabled(),
            BooleanVariable::IsInterpretAsEntryKey => nav.interpret_as_entry_key(),
            BooleanVariable::CollectionExists => collection.exists(),
            BooleanVariable::IsRowTransition => collection.row_column_transition.row,
            BooleanVariable::IsColumnTransition => collection.row_column_transition.column,
            BooleanVariable::ListItemIsHeading => {
                collection.list_item().is_some_and(|item| item.is_heading)
            }
            BooleanVariable::PagerItemIsHeading => {
                collection.pager_item().is_some_and(|item| item.is_heading)
            }
            BooleanVariable::IsSplitScreenMode => self
                .collaborators
                .windows
                .is_some_and(|windows| windows.is_split_screen(nav.current_display_id())),
            BooleanVariable::IsCurrentFocusInScrollableNode => nav.is_current_focus_scrollable(),
            BooleanVariable::IsLastFocusInScrollableNode => nav.is_last_focus_scrollable(),
            BooleanVariable::HasKeyForClick => {
                self.key_combo_code(KeyComboAction::PerformClick).is_some()
            }
            BooleanVariable::HasKeyForLongClick => {
                self.key_combo_code(KeyComboAction::PerformLongClick).is_some()
            }
            BooleanVariable::SpeakRole => self.verbosity.speak_roles,
            BooleanVariable::SpeakCollectionInfo => self.verbosity.speak_collection_info,
            BooleanVariable::SpeakSystemWindowTitles => self.verbosity.speak_system_window_titles,
            BooleanVariable::SpeakElementIds => self.verbosity.speak_element_ids,
        }
    }

    fn integer(&self, variable: IntegerVariable) -> i32 {
        let collection = self.navigation.collection();
        let table = collection.table_item();
        let pager = collection.pager_item();
        match variable {
            IntegerVariable::TableItemRowIndex => {
                index_or_sentinel(table.and_then(|t| t.row_index))
            }
            IntegerVariable::TableItemColumnIndex => {
                index_or_sentinel(table.and_then(|t| t.column_index))
            }
            IntegerVariable::PagerItemRowIndex => {
                index_or_sentinel(pager.and_then(|p| p.row_index))
            }
            IntegerVariable::PagerItemColumnIndex => {
                index_or_sentinel(pager.and_then(|p| p.column_index))
            }
            IntegerVariable::LastWindowId => self.navigation.last_window_id(),
        }
    }

    fn number(&self, variable: NumberVariable) -> f64 {
        match variable {
            NumberVariable::SpeechRate => f64::from(self.navigation.speech_rate()),
        }
    }

    fn string(&self, variable: StringVariable) -> String {
        let collection = self.navigation.collection();
        match variable {
            StringVariable::SeekbarHint => self.seekbar_hint(),
            StringVariable::CollectionName => collection.name.clone().unwrap_or_default(),
            StringVariable::CollectionTransition => self.composer().transition_phrase(collection),
            StringVariable::TableItemRowName => collection
                .table_item()
                .and_then(|item| item.row_name.clone())
                .unwrap_or_default(),
            StringVariable::TableItemColumnName => collection
                .table_item()
                .and_then(|item| item.column_name.clone())
                .unwrap_or_default(),
            StringVariable::ListItemPositionDescription => {
                self.composer().list_item_position(collection)
            }
            StringVariable::StringRepresentationForClick => {
                self.key_combo_text(KeyComboAction::PerformClick)
            }
            StringVariable::StringRepresentationForLongClick => {
                self.key_combo_text(KeyComboAction::PerformLongClick)
            }
            StringVariable::MagnificationStateChanged => self.magnification_text(),
            StringVariable::NodeMenuShortcut => self.node_menu_shortcut(),
        }
    }

    fn enumeration(&self, variable: EnumVariable) -> i32 {
        match variable {
            EnumVariable::InputMode => self.input_mode().ordinal(),
            EnumVariable::CollectionRole => self.navigation.collection().role.ordinal(),
            EnumVariable::TableItemHeadingType => self
                .navigation
                .collection()
                .table_item()
                .map_or(HeadingType::None, |item| item.heading_type)
                .ordinal(),
            EnumVariable::DescriptionOrder => self.verbosity.description_order.ordinal(),
        }
    }

    fn input_mode(&self) -> InputMode {
        self.collaborators
            .input_mode
            .map_or(InputMode::Unknown, InputModeProvider::input_mode)
    }

    fn key_combo_code(&self, action: KeyComboAction) -> Option<KeyComboCode> {
        self.collaborators.key_combos?.code_for(action)
    }

    /// Spoken shortcut for `action`, including the trigger modifier.
    fn key_combo_text(&self, action: KeyComboAction) -> String {
        let Some(key_combos) = self.collaborators.key_combos else {
            return String::new();
        };
        key_combos
            .code_for(action)
            .and_then(|code| {
                key_combos.text_for(code.with_modifiers(key_combos.trigger_modifier()))
            })
            .unwrap_or_default()
    }

    fn node_menu_shortcut(&self) -> String {
        if self.input_mode() == InputMode::Keyboard {
            let key_combo = self.key_combo_text(KeyComboAction::OpenContextMenu);
            if !key_combo.is_empty() {
                return key_combo;
            }
        }
        self.collaborators
            .gestures
            .map(GestureShortcutProvider::menu_shortcut_text)
            .unwrap_or_default()
    }

    fn seekbar_hint(&self) -> String {
        if let Some(text) = self
            .collaborators
            .gestures
            .and_then(GestureShortcutProvider::seek_bar_shortcut_text)
        {
            return text;
        }
        if self.navigation.platform().is_watch {
            String::new()
        } else {
            self.collaborators.strings.get(StringId::SeekControlHint, &[])
        }
    }

    fn magnification_text(&self) -> String {
        let magnification = self.navigation.magnification();
        let id = match (magnification.state, magnification.mode) {
            (MagnificationState::Off, _) => {
                return self.collaborators.strings.get(StringId::MagnificationOff, &[]);
            }
            (MagnificationState::On, None) => StringId::MagnificationOn,
            (MagnificationState::On, Some(MagnificationMode::FullScreen)) => {
                StringId::FullScreenMagnificationOn
            }
            (MagnificationState::On, Some(MagnificationMode::Window)) => {
                StringId::PartialMagnificationOn
            }
            (MagnificationState::ScaleChanged, None) => StringId::MagnificationScaleChanged,
            (MagnificationState::ScaleChanged, Some(MagnificationMode::FullScreen)) => {
                StringId::FullScreenMagnificationScaleChanged
            }
            (MagnificationState::ScaleChanged, Some(MagnificationMode::Window)) => {
                StringId::PartialMagnificationScaleChanged
            }
        };
        self.collaborators
            .strings
            .get(id, &[Value::from(magnification.percent())])
    }

    fn lookup(&self, id: VariableId, expected: &'static str) -> Option<Variable> {
        let variable = self.namespace.lookup(id);
        if variable.is_none() {
            tracing::trace!(%id, expected, "resolving undeclared variable");
        }
        variable
    }
}

impl VariableSource for VariableResolver<'_> {
    fn get_boolean(&self, id: VariableId) -> bool {
        match self.lookup(id, "bool") {
            Some(Variable::Boolean(variable)) => self.boolean(variable),
            _ => false,
        }
    }

    fn get_integer(&self, id: VariableId) -> i32 {
        match self.lookup(id, "int") {
            Some(Variable::Integer(variable)) => self.integer(variable),
            _ => 0,
        }
    }

    fn get_number(&self, id: VariableId) -> f64 {
        match self.lookup(id, "number") {
            Some(Variable::Number(variable)) => self.number(variable),
            _ => 0.0,
        }
    }

    fn get_string(&self, id: VariableId) -> String {
        match self.lookup(id, "string") {
            Some(Variable::String(variable)) => self.string(variable),
            _ => String::new(),
        }
    }

    fn get_enum(&self, id: VariableId) -> i32 {
        match self.lookup(id, "enum") {
            Some(Variable::Enum(variable)) => self.enumeration(variable),
            _ => 0,
        }
    }
}

/// The integer form of an optional index: -1 when unknown.
fn index_or_sentinel(index: Option<u32>) -> i32 {
    index.and_then(|i| i32::try_from(i).ok()).unwrap_or(-1)
}
