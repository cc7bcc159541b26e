use serde::{Deserialize, Serialize};

use super::declared::declared_enum;

declared_enum! {
    /// Widget role of a node, as reported by node introspection.
    ///
    /// Only `List`, `Grid`, and `Pager` produce collection transition text;
    /// the rest exist so `collection.role` can be compared in templates.
    #[derive(Default)]
    pub enum Role as "role" {
        #[default]
        None = 0 => "none",
        Button = 1 => "button",
        CheckBox = 2 => "check_box",
        DropDownList = 3 => "drop_down_list",
        EditText = 4 => "edit_text",
        Grid = 5 => "grid",
        Image = 6 => "image",
        ImageButton = 7 => "image_button",
        List = 8 => "list",
        RadioButton = 9 => "radio_button",
        SeekControl = 10 => "seek_control",
        Switch = 11 => "switch",
        TabBar = 12 => "tab_bar",
        ToggleButton = 13 => "toggle_button",
        ViewGroup = 14 => "view_group",
        WebView = 15 => "web_view",
        Pager = 16 => "pager",
        CheckedTextView = 17 => "checked_text_view",
        ProgressBar = 18 => "progress_bar",
        ActionBarTab = 19 => "action_bar_tab",
        DrawerLayout = 20 => "drawer_layout",
        SlidingDrawer = 21 => "sliding_drawer",
        IconMenu = 22 => "icon_menu",
        Toast = 23 => "toast",
        AlertDialog = 24 => "alert_dialog",
        DatePickerDialog = 25 => "date_picker_dialog",
        TimePickerDialog = 26 => "time_picker_dialog",
        DatePicker = 27 => "date_picker",
        TimePicker = 28 => "time_picker",
        NumberPicker = 29 => "number_picker",
        ScrollView = 30 => "scroll_view",
        HorizontalScrollView = 31 => "horizontal_scroll_view",
        TextEntryKey = 32 => "text_entry_key",
        StaggeredGrid = 33 => "staggered_grid",
    }
}

declared_enum! {
    /// Whether a table cell is a row header, a column header, or neither.
    #[derive(Default)]
    pub enum HeadingType as "heading_type" {
        #[default]
        None = 0 => "none",
        Row = 1 => "row",
        Column = 2 => "column",
        Indeterminate = 3 => "indeterminate",
    }
}

declared_enum! {
    /// How the user is currently driving the device.
    #[derive(Default)]
    pub enum InputMode as "input_mode" {
        #[default]
        Unknown = -1 => "unknown",
        Touch = 0 => "touch",
        Keyboard = 1 => "keyboard",
        TvRemote = 2 => "tv_remote",
        NonAlphabeticKeyboard = 3 => "non_alphabetic_keyboard",
    }
}

declared_enum! {
    /// Order in which a node's role, name, state, and position are spoken.
    #[derive(Default)]
    pub enum DescriptionOrder as "description_order" {
        #[default]
        RoleNameStatePosition = 0 => "role_name_state_position",
        StateNameRolePosition = 1 => "state_name_role_position",
        NameRoleStatePosition = 2 => "name_role_state_position",
    }
}

/// Which magnifier is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagnificationMode {
    FullScreen,
    Window,
}

/// The last magnification change reported by the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagnificationState {
    #[default]
    Off,
    On,
    ScaleChanged,
}

/// Magnification mode, scale, and state as of the last update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Magnification {
    /// `None` when the platform does not report a mode.
    #[serde(default)]
    pub mode: Option<MagnificationMode>,
    /// Scale factor, where 1.0 is unmagnified.
    pub scale: f32,
    #[serde(default)]
    pub state: MagnificationState,
}

impl Magnification {
    /// Scale as a whole percentage, truncated.
    pub fn percent(&self) -> i32 {
        (self.scale * 100.0) as i32
    }
}

impl Default for Magnification {
    fn default() -> Self {
        Magnification {
            mode: None,
            scale: -1.0,
            state: MagnificationState::Off,
        }
    }
}
