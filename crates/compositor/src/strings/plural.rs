//! CLDR plural category selection for quantity strings.
//!
//! English has "one" and "other"; Russian adds "few" and "many"; Arabic
//! uses all six categories. A `PluralSelector` holds the cardinal rules for
//! one language so quantity strings can pick the matching form.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use icu_locale_core::{Locale, locale};
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

use crate::error::StringsError;

/// Cardinal plural rules for a single language.
pub struct PluralSelector {
    language: String,
    rules: PluralRules,
}

impl PluralSelector {
    /// Build the rules for a BCP-47 language tag such as `"en"` or `"ru"`.
    pub fn new(language: &str) -> Result<Self, StringsError> {
        let loc: Locale = language
            .parse()
            .map_err(|_| StringsError::InvalidLanguage {
                language: language.to_string(),
            })?;
        let rules = PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into()).map_err(
            |_| StringsError::UnsupportedLanguage {
                language: language.to_string(),
            },
        )?;
        Ok(Self {
            language: language.to_string(),
            rules,
        })
    }

    /// Rules for English, which are always compiled in.
    pub fn english() -> Self {
        let rules = PluralRules::try_new(locale!("en").into(), PluralRuleType::Cardinal.into())
            .expect("english plural rules should be compiled in");
        Self {
            language: "en".to_string(),
            rules,
        }
    }

    /// CLDR category for `n`: "zero", "one", "two", "few", "many", or "other".
    ///
    /// ```
    /// use compositor::strings::PluralSelector;
    ///
    /// let en = PluralSelector::english();
    /// assert_eq!(en.category(1), "one");
    /// assert_eq!(en.category(5), "other");
    ///
    /// let ru = PluralSelector::new("ru").unwrap();
    /// assert_eq!(ru.category(2), "few");
    /// assert_eq!(ru.category(5), "many");
    /// ```
    pub fn category(&self, n: i64) -> &'static str {
        category_str(self.rules.category_for(n))
    }
}

impl Debug for PluralSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PluralSelector")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}
