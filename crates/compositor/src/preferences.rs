use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::DescriptionOrder;

/// Verbosity settings read by templates through the `verbosity.*` variables.
///
/// ```
/// use compositor::{DescriptionOrder, VerbosityPreferences};
///
/// let defaults = VerbosityPreferences::default();
/// assert!(defaults.speak_roles);
/// assert!(!defaults.speak_element_ids);
///
/// let terse = VerbosityPreferences::builder()
///     .speak_roles(false)
///     .description_order(DescriptionOrder::NameRoleStatePosition)
///     .build();
/// assert!(!terse.speak_roles);
/// assert!(terse.speak_collection_info);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct VerbosityPreferences {
    #[builder(default = true)]
    pub speak_roles: bool,
    #[builder(default = true)]
    pub speak_collection_info: bool,
    #[builder(default)]
    pub description_order: DescriptionOrder,
    #[builder(default)]
    pub speak_element_ids: bool,
    #[builder(default = true)]
    pub speak_system_window_titles: bool,
}

impl Default for VerbosityPreferences {
    fn default() -> Self {
        VerbosityPreferences::builder().build()
    }
}
