use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Range;

/// A piece of announcement text produced by a text function.
///
/// Besides the text itself a fragment records which byte ranges are
/// separators inserted by a combinator (the `", "` between two joined
/// values). Speech output reads those ranges as pauses rather than words, so
/// they are kept apart from the text that came from resolved variables.
///
/// # Example
///
/// ```
/// use compositor::Fragment;
///
/// let mut fragment = Fragment::from("Inbox");
/// fragment.push_separator(", ");
/// fragment.push_str("3 unread");
///
/// assert_eq!(fragment.to_string(), "Inbox, 3 unread");
/// assert_eq!(fragment.separators(), &[5..7]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    text: String,
    separators: Vec<Range<usize>>,
}

impl Fragment {
    /// Returns an empty fragment.
    pub fn empty() -> Fragment {
        Fragment::default()
    }

    /// The announced text, separators included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte ranges of `text()` that are non-announced separators.
    pub fn separators(&self) -> &[Range<usize>] {
        &self.separators
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append announced text.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Append another fragment, shifting its separator ranges.
    pub fn push_fragment(&mut self, other: &Fragment) {
        let offset = self.text.len();
        self.text.push_str(&other.text);
        self.separators
            .extend(other.separators.iter().map(|r| r.start + offset..r.end + offset));
    }

    /// Append a separator and record its range.
    pub fn push_separator(&mut self, separator: &str) {
        let start = self.text.len();
        self.text.push_str(separator);
        self.separators.push(start..self.text.len());
    }

    /// Joins fragments with a marked separator, skipping empty ones.
    pub fn join<'a>(
        fragments: impl IntoIterator<Item = &'a Fragment>,
        separator: &str,
    ) -> Fragment {
        let mut result = Fragment::empty();
        for fragment in fragments.into_iter().filter(|f| !f.is_empty()) {
            if !result.is_empty() {
                result.push_separator(separator);
            }
            result.push_fragment(fragment);
        }
        result
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.text)
    }
}

impl From<Fragment> for String {
    fn from(fragment: Fragment) -> Self {
        fragment.text
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment {
            text,
            separators: Vec::new(),
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::from(text.to_string())
    }
}
