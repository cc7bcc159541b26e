//! Resolving declared variables through the typed getters.

mod common;

use common::{FixedCollection, Gestures, Input, KeyCombos, Nodes, Windows, node};
use compositor::providers::{FixedSecureSettings, PassthroughNormalizer};
use compositor::strings::EnglishStrings;
use compositor::{
    AccessibilityEvent, Alignment, Collaborators, CollectionState, CollectionTransition,
    DeclaredEnum, DescriptionOrder, EventFlag, FunctionRegistry, HeadingType, InputMode, ItemState,
    ListItemState, Magnification, MagnificationMode, MagnificationState, NavigationState,
    PagerItemState, PlatformCapabilities, Role, TableItemState, TimedFlagRegistry, Value,
    VariableId, VariableNamespace, VariableResolver, VariableSource, VerbosityPreferences, args,
};

fn id(name: &str) -> VariableId {
    VariableId::from_name(name)
}

/// Session state plus collaborators, borrowed by each resolver.
struct Session {
    namespace: VariableNamespace,
    navigation: NavigationState,
    flags: TimedFlagRegistry,
    verbosity: VerbosityPreferences,
    strings: EnglishStrings,
    secure_settings: FixedSecureSettings,
}

impl Session {
    fn new() -> Self {
        Self::with_platform(PlatformCapabilities::default())
    }

    fn with_platform(platform: PlatformCapabilities) -> Self {
        Self {
            namespace: VariableNamespace::declare().unwrap(),
            navigation: NavigationState::new(platform),
            flags: TimedFlagRegistry::new(),
            verbosity: VerbosityPreferences::default(),
            strings: EnglishStrings::new(),
            secure_settings: FixedSecureSettings::default(),
        }
    }

    fn focus(&mut self, state: CollectionState) {
        self.navigation.update(
            &AccessibilityEvent::focused(node(1, 3), 0),
            &FixedCollection(state),
            &Nodes::default(),
        );
    }

    fn collaborators(&self) -> Collaborators<'_> {
        Collaborators::builder()
            .strings(&self.strings)
            .normalizer(&PassthroughNormalizer)
            .secure_settings(&self.secure_settings)
            .build()
    }

    fn resolver(&self) -> VariableResolver<'_> {
        self.resolver_with(self.collaborators())
    }

    fn resolver_with<'a>(&'a self, collaborators: Collaborators<'a>) -> VariableResolver<'a> {
        VariableResolver::builder()
            .namespace(&self.namespace)
            .navigation(&self.navigation)
            .flags(&self.flags)
            .verbosity(&self.verbosity)
            .collaborators(collaborators)
            .build()
    }
}

// =========================================================================
// Zero values
// =========================================================================

#[test]
fn unknown_ids_resolve_to_zero_values() {
    let session = Session::new();
    let resolver = session.resolver();
    let unknown = id("global.doesNotExist");

    assert!(!resolver.get_boolean(unknown));
    assert_eq!(resolver.get_integer(unknown), 0);
    assert!(resolver.get_number(unknown).abs() < f64::EPSILON);
    assert_eq!(resolver.get_string(unknown), "");
    assert_eq!(resolver.get_enum(unknown), 0);
    assert!(resolver.get_reference(unknown).is_none());
    assert_eq!(resolver.get_array_length(unknown), 0);
    assert_eq!(resolver.get_array_string_element(unknown, 0), "");
    assert!(resolver.get_array_child_element(unknown, 0).is_none());
}

#[test]
fn ids_of_another_type_resolve_to_zero_values() {
    let mut session = Session::new();
    session.focus(
        CollectionState::builder()
            .role(Role::List)
            .name("Fruits".to_string())
            .build(),
    );
    let resolver = session.resolver();

    assert_eq!(resolver.get_string(id("collection.name")), "Fruits");
    assert!(!resolver.get_boolean(id("collection.name")));
    assert_eq!(resolver.get_integer(id("collection.exists")), 0);
    assert_eq!(resolver.get_enum(id("global.speechRate")), 0);
}

// =========================================================================
// Globals
// =========================================================================

#[test]
fn synced_focus_latch_is_observed_once() {
    let session = Session::new();
    let resolver = session.resolver();
    let latch = id("global.syncedAccessibilityFocusLatch");

    assert!(!resolver.get_boolean(latch));
    session.flags.raise(EventFlag::SyncedAccessibilityFocus);
    assert!(resolver.get_boolean(latch));
    assert!(!resolver.get_boolean(latch));
}

#[test]
fn password_field_content_needs_system_setting() {
    let mut session = Session::new();
    session.secure_settings = FixedSecureSettings {
        speak_passwords: true,
    };
    assert!(session.resolver().get_boolean(id("global.speakPasswordFieldContent")));

    let mut service = Session::with_platform(
        PlatformCapabilities::builder()
            .speak_passwords_service_pref(true)
            .build(),
    );
    service.secure_settings = FixedSecureSettings {
        speak_passwords: true,
    };
    service.navigation.set_speak_passwords(true);
    let resolver = service.resolver();
    assert!(!resolver.get_boolean(id("global.speakPasswordFieldContent")));
    assert!(resolver.get_boolean(id("global.speakPasswordsServicePolicy")));
}

#[test]
fn navigation_toggles() {
    let mut session = Session::new();
    session.navigation.set_use_single_tap(true);
    session.navigation.set_speech_rate(1.5);
    session.navigation.set_usage_hint_enabled(false);
    session.navigation.set_interpret_as_entry_key(true);
    let resolver = session.resolver();

    assert!(resolver.get_boolean(id("global.useSingleTap")));
    assert!((resolver.get_number(id("global.speechRate")) - 1.5).abs() < f64::EPSILON);
    assert!(!resolver.get_boolean(id("global.enableUsageHint")));
    assert!(resolver.get_boolean(id("global.isInterpretAsEntryKey")));
    assert!(!resolver.get_boolean(id("global.useAudioFocus")));
}

#[test]
fn input_mode_without_provider_is_unknown() {
    let session = Session::new();
    let resolver = session.resolver();
    assert_eq!(resolver.get_enum(id("global.inputMode")), InputMode::Unknown.ordinal());
    assert!(!resolver.get_boolean(id("global.isKeyboardActive")));
}

#[test]
fn input_mode_from_provider() {
    let session = Session::new();
    let input = Input(InputMode::Keyboard);
    let collaborators = Collaborators::builder()
        .strings(&session.strings)
        .normalizer(&PassthroughNormalizer)
        .secure_settings(&session.secure_settings)
        .input_mode(&input)
        .build();
    let resolver = session.resolver_with(collaborators);
    assert_eq!(resolver.get_enum(id("global.inputMode")), 1);
    assert!(resolver.get_boolean(id("global.isKeyboardActive")));
}

#[test]
fn seekbar_hint_sources() {
    let session = Session::new();
    assert_eq!(
        session.resolver().get_string(id("global.seekbarHint")),
        "swipe up or down to adjust"
    );

    let watch = Session::with_platform(PlatformCapabilities::builder().is_watch(true).build());
    assert_eq!(watch.resolver().get_string(id("global.seekbarHint")), "");

    let gestures = Gestures {
        seek_bar: Some("swipe left or right".to_string()),
    };
    let collaborators = Collaborators::builder()
        .strings(&watch.strings)
        .normalizer(&PassthroughNormalizer)
        .secure_settings(&watch.secure_settings)
        .gestures(&gestures)
        .build();
    assert_eq!(
        watch.resolver_with(collaborators).get_string(id("global.seekbarHint")),
        "swipe left or right"
    );
}

// =========================================================================
// Collections
// =========================================================================

#[test]
fn collection_transition_is_composed() {
    let mut session = Session::new();
    session.focus(
        CollectionState::builder()
            .transition(CollectionTransition::Enter)
            .role(Role::List)
            .name("Fruits".to_string())
            .level(1)
            .row_count(5)
            .alignment(Alignment::Vertical)
            .build(),
    );
    let resolver = session.resolver();

    assert_eq!(
        resolver.get_string(id("collection.transition")),
        "in list Fruits, level 2, 5 items"
    );
    assert!(resolver.get_boolean(id("collection.exists")));
    assert_eq!(resolver.get_enum(id("collection.role")), Role::List.ordinal());
}

#[test]
fn table_item_variables() {
    let mut session = Session::new();
    session.focus(
        CollectionState::builder()
            .role(Role::Grid)
            .item(ItemState::Table(
                TableItemState::builder()
                    .heading_type(HeadingType::Column)
                    .column_name("Price".to_string())
                    .row_index(4)
                    .build(),
            ))
            .build(),
    );
    let resolver = session.resolver();

    assert_eq!(resolver.get_integer(id("collection.tableItem.rowIndex")), 4);
    assert_eq!(resolver.get_integer(id("collection.tableItem.columnIndex")), -1);
    assert_eq!(resolver.get_string(id("collection.tableItem.columnName")), "Price");
    assert_eq!(resolver.get_string(id("collection.tableItem.rowName")), "");
    assert_eq!(
        resolver.get_enum(id("collection.tableItem.headingType")),
        HeadingType::Column.ordinal()
    );
    assert_eq!(resolver.get_integer(id("collection.pagerItem.rowIndex")), -1);
}

#[test]
fn missing_items_give_sentinels() {
    let session = Session::new();
    let resolver = session.resolver();
    assert_eq!(resolver.get_integer(id("collection.tableItem.rowIndex")), -1);
    assert_eq!(resolver.get_integer(id("collection.pagerItem.columnIndex")), -1);
    assert_eq!(resolver.get_enum(id("collection.tableItem.headingType")), 0);
    assert!(!resolver.get_boolean(id("collection.listItem.isHeading")));
    assert!(!resolver.get_boolean(id("collection.exists")));
}

#[test]
fn pager_and_list_items() {
    let mut session = Session::new();
    session.focus(
        CollectionState::builder()
            .role(Role::Pager)
            .item(ItemState::Pager(
                PagerItemState::builder().column_index(2).is_heading(true).build(),
            ))
            .build(),
    );
    let resolver = session.resolver();
    assert_eq!(resolver.get_integer(id("collection.pagerItem.columnIndex")), 2);
    assert!(resolver.get_boolean(id("collection.pagerItem.isHeading")));

    session.focus(
        CollectionState::builder()
            .role(Role::List)
            .row_count(9)
            .column_count(1)
            .item(ItemState::List(ListItemState::builder().index(0).is_heading(true).build()))
            .build(),
    );
    let resolver = session.resolver();
    assert!(resolver.get_boolean(id("collection.listItem.isHeading")));
    assert_eq!(
        resolver.get_string(id("collection.listItem.positionDescription")),
        "item 1 of 9"
    );
}

// =========================================================================
// Windows, focus, key combos, gestures
// =========================================================================

#[test]
fn window_and_focus_variables() {
    let mut session = Session::new();
    session.focus(CollectionState::default());
    session.navigation.update(
        &AccessibilityEvent::focused(node(2, 8), 0),
        &FixedCollection(CollectionState::default()),
        &Nodes {
            scrollable: vec![2],
            child_of_scrollable: Vec::new(),
        },
    );

    let collaborators = Collaborators::builder()
        .strings(&session.strings)
        .normalizer(&PassthroughNormalizer)
        .secure_settings(&session.secure_settings)
        .windows(&Windows)
        .build();
    let resolver = session.resolver_with(collaborators);

    assert_eq!(resolver.get_integer(id("windows.lastWindowId")), 3);
    assert!(resolver.get_boolean(id("windows.isSplitScreenMode")));
    assert!(resolver.get_boolean(id("focus.isCurrentFocusInScrollableNode")));
    assert!(!resolver.get_boolean(id("focus.isLastFocusInScrollableNode")));

    assert!(!session.resolver().get_boolean(id("windows.isSplitScreenMode")));
}

#[test]
fn key_combo_text_includes_trigger_modifier() {
    let session = Session::new();
    let key_combos = KeyCombos { trigger_modifier: 2 };
    let collaborators = Collaborators::builder()
        .strings(&session.strings)
        .normalizer(&PassthroughNormalizer)
        .secure_settings(&session.secure_settings)
        .key_combos(&key_combos)
        .build();
    let resolver = session.resolver_with(collaborators);

    assert!(resolver.get_boolean(id("keyCombo.hasKeyForClick")));
    assert!(!resolver.get_boolean(id("keyCombo.hasKeyForLongClick")));
    assert_eq!(resolver.get_string(id("keyCombo.stringRepresentationForClick")), "2+66");
    assert_eq!(resolver.get_string(id("keyCombo.stringRepresentationForLongClick")), "");

    let without = session.resolver();
    assert!(!without.get_boolean(id("keyCombo.hasKeyForClick")));
    assert_eq!(without.get_string(id("keyCombo.stringRepresentationForClick")), "");
}

fn menu_collaborators<'a>(
    session: &'a Session,
    key_combos: &'a KeyCombos,
    gestures: &'a Gestures,
    input: &'a Input,
) -> Collaborators<'a> {
    Collaborators::builder()
        .strings(&session.strings)
        .normalizer(&PassthroughNormalizer)
        .secure_settings(&session.secure_settings)
        .key_combos(key_combos)
        .gestures(gestures)
        .input_mode(input)
        .build()
}

#[test]
fn node_menu_shortcut_prefers_keyboard_combo_in_keyboard_mode() {
    let session = Session::new();
    let key_combos = KeyCombos { trigger_modifier: 0 };
    let gestures = Gestures { seek_bar: None };
    let keyboard = Input(InputMode::Keyboard);
    let touch = Input(InputMode::Touch);
    let shortcut = id("gesture.nodeMenuShortcut");

    let in_keyboard_mode = menu_collaborators(&session, &key_combos, &gestures, &keyboard);
    assert_eq!(session.resolver_with(in_keyboard_mode).get_string(shortcut), "1+82");

    let in_touch_mode = menu_collaborators(&session, &key_combos, &gestures, &touch);
    assert_eq!(
        session.resolver_with(in_touch_mode).get_string(shortcut),
        "swipe up then right"
    );

    assert_eq!(session.resolver().get_string(shortcut), "");
}

// =========================================================================
// Magnification and verbosity
// =========================================================================

#[test]
fn magnification_text_by_state_and_mode() {
    let mut session = Session::new();
    let changed = id("magnification.stateChanged");
    assert_eq!(session.resolver().get_string(changed), "magnification off");

    session.navigation.update_magnification_state(Magnification {
        mode: Some(MagnificationMode::FullScreen),
        scale: 2.0,
        state: MagnificationState::On,
    });
    assert_eq!(
        session.resolver().get_string(changed),
        "full screen magnification on, 200 percent"
    );

    session.navigation.update_magnification_state(Magnification {
        mode: Some(MagnificationMode::Window),
        scale: 2.5,
        state: MagnificationState::ScaleChanged,
    });
    assert_eq!(
        session.resolver().get_string(changed),
        "partial screen magnification 250 percent"
    );

    session.navigation.update_magnification_state(Magnification {
        mode: None,
        scale: 1.5,
        state: MagnificationState::On,
    });
    assert_eq!(session.resolver().get_string(changed), "magnification on, 150 percent");
}

#[test]
fn verbosity_variables() {
    let mut session = Session::new();
    session.verbosity = VerbosityPreferences::builder()
        .speak_roles(false)
        .speak_element_ids(true)
        .description_order(DescriptionOrder::NameRoleStatePosition)
        .build();
    let resolver = session.resolver();

    assert!(!resolver.get_boolean(id("verbosity.speakRole")));
    assert!(resolver.get_boolean(id("verbosity.speakCollectionInfo")));
    assert!(resolver.get_boolean(id("verbosity.speakElementIds")));
    assert!(resolver.get_boolean(id("verbosity.speakSystemWindowTitles")));
    assert_eq!(resolver.get_enum(id("verbosity.descriptionOrder")), 2);
}

// =========================================================================
// Functions and names
// =========================================================================

#[test]
fn function_context_carries_say_capital() {
    let mut session = Session::new();
    session.navigation.set_say_capital(true);
    let resolver = session.resolver();
    let registry = FunctionRegistry::new();

    let value = registry
        .call("prependCapital", &resolver.function_context(), &args!["B"])
        .unwrap();
    assert_eq!(value.to_string(), "capital B");
}

#[test]
fn resolve_by_name() {
    let mut session = Session::new();
    session.navigation.set_speech_rate(2.0);
    let resolver = session.resolver();

    assert_eq!(resolver.resolve_name("global.speechRate"), Some(Value::Number(2.0)));
    assert_eq!(resolver.resolve_name("collection.name"), Some(Value::from("")));
    assert_eq!(resolver.resolve_name("collection.nmae"), None);
}
