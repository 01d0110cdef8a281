//! In-memory SubStation document
//!
//! Owns the script info entries, named styles, the ordered event list and
//! the raw lines of sections this crate does not interpret. Both dialects
//! read into and write out of this one model.

use core::str::FromStr;

use super::{Event, Style};
use crate::{parser::errors::FormatError, utils::OrderedMap, Dialect};

/// Info entries every new document starts with, in output order
pub const DEFAULT_INFO: [(&str, &str); 3] = [
    ("WrapStyle", "0"),
    ("ScaledBorderAndShadow", "yes"),
    ("Collisions", "Normal"),
];

/// Info keys that carry the script version and are regenerated on output
pub const VERSION_TAG_KEYS: [&str; 2] = ["ScriptInfo", "ScriptType"];

/// Name of the style every new document starts with
pub const DEFAULT_STYLE_NAME: &str = "Default";

/// Check whether an info key is a version tag
#[must_use]
pub fn is_version_tag(key: &str) -> bool {
    VERSION_TAG_KEYS.contains(&key)
}

/// Subtitle document shared by the SSA v4 and ASS v4+ dialects
///
/// A new document holds the default info entries and a `Default` style.
/// Setting an existing info key or style name replaces the value without
/// moving it.
///
/// # Examples
///
/// ```rust
/// use substation::{Dialect, Document, Event, Style};
///
/// let mut doc = Document::new();
/// doc.set_info("Title", "Example");
/// doc.set_style("top", Style { alignment: 8, ..Style::default() });
/// doc.push_event(Event { text: "Hello".into(), ..Event::default() });
///
/// let text = doc.to_dialect_string(Dialect::Extended);
/// let reparsed: Document = text.parse()?;
/// assert!(doc.equals(&reparsed));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// `[Script Info]` key-value entries
    info: OrderedMap<String>,
    /// Styles keyed by name, in output order
    styles: OrderedMap<Style>,
    /// Events in file order
    events: Vec<Event>,
    /// Raw lines of unrecognized sections keyed by section name
    extensions: OrderedMap<Vec<String>>,
}

impl Document {
    /// Create a document with the default info entries and `Default` style
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self::without_styles();
        doc.styles.insert(DEFAULT_STYLE_NAME, Style::default());
        doc
    }

    /// Default info entries only; parsing fills styles from the file
    pub(crate) fn without_styles() -> Self {
        let info = DEFAULT_INFO
            .iter()
            .map(|&(key, value)| (key, value.to_string()))
            .collect();

        Self {
            info,
            styles: OrderedMap::new(),
            events: Vec::new(),
            extensions: OrderedMap::new(),
        }
    }

    /// Parse text in either dialect
    ///
    /// # Errors
    ///
    /// Returns an error on the first malformed line.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        crate::parser::parse(text, None)
    }

    /// Parse text, using `hint` when a section's columns do not reveal the dialect
    ///
    /// # Errors
    ///
    /// Returns an error on the first malformed line.
    pub fn parse_with_hint(text: &str, hint: Dialect) -> Result<Self, FormatError> {
        crate::parser::parse(text, Some(hint))
    }

    /// Render the document in the given dialect
    #[must_use]
    pub fn to_dialect_string(&self, dialect: Dialect) -> String {
        crate::serializer::serialize(self, dialect)
    }

    /// Set an info entry, replacing any existing value in place
    pub fn set_info(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.info.insert(key, value.into());
    }

    /// Look up an info value
    #[must_use]
    pub fn info(&self, key: &str) -> Option<&str> {
        self.info.get(key).map(String::as_str)
    }

    /// Remove an info entry
    pub fn remove_info(&mut self, key: &str) -> Option<String> {
        self.info.remove(key)
    }

    /// All info entries in output order
    #[must_use]
    pub const fn info_entries(&self) -> &OrderedMap<String> {
        &self.info
    }

    /// Add or replace a style
    ///
    /// A replaced style keeps its position. Returns the previous definition.
    pub fn set_style(&mut self, name: impl Into<String>, style: Style) -> Option<Style> {
        self.styles.insert(name, style)
    }

    /// Look up a style by name (case-sensitive)
    #[must_use]
    pub fn style(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Look up a style for modification
    pub fn style_mut(&mut self, name: &str) -> Option<&mut Style> {
        self.styles.get_mut(name)
    }

    /// Remove a style; events referring to it are left untouched
    pub fn remove_style(&mut self, name: &str) -> Option<Style> {
        self.styles.remove(name)
    }

    /// Rename a style in place and update events that reference it
    ///
    /// Returns `false` if `from` does not exist or `to` is already taken.
    pub fn rename_style(&mut self, from: &str, to: &str) -> bool {
        if !self.styles.rename(from, to) {
            return false;
        }
        for event in self.events.iter_mut().filter(|e| e.style == from) {
            event.style = to.to_string();
        }
        true
    }

    /// All styles in output order
    #[must_use]
    pub const fn styles(&self) -> &OrderedMap<Style> {
        &self.styles
    }

    /// Append an event
    pub fn push_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Insert an event at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index > events().len()`.
    pub fn insert_event(&mut self, index: usize, event: Event) {
        self.events.insert(index, event);
    }

    /// Remove the event at `index`, if any
    pub fn remove_event(&mut self, index: usize) -> Option<Event> {
        (index < self.events.len()).then(|| self.events.remove(index))
    }

    /// Events in order
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events in order, for in-place edits such as retiming
    pub fn events_mut(&mut self) -> &mut [Event] {
        &mut self.events
    }

    /// Store the raw lines of an unrecognized section, replacing any previous lines
    pub fn set_extension_section(&mut self, name: impl Into<String>, lines: Vec<String>) {
        self.extensions.insert(name, lines);
    }

    /// Append one raw line to an unrecognized section, creating it if needed
    pub(crate) fn push_extension_line(&mut self, name: &str, line: &str) {
        if let Some(lines) = self.extensions.get_mut(name) {
            lines.push(line.to_string());
        } else {
            self.extensions.insert(name, vec![line.to_string()]);
        }
    }

    /// Make sure an unrecognized section exists even if it has no lines
    pub(crate) fn ensure_extension_section(&mut self, name: &str) {
        if !self.extensions.contains_key(name) {
            self.extensions.insert(name, Vec::new());
        }
    }

    /// Raw lines of an unrecognized section
    #[must_use]
    pub fn extension_section(&self, name: &str) -> Option<&[String]> {
        self.extensions.get(name).map(Vec::as_slice)
    }

    /// Remove an unrecognized section
    pub fn remove_extension_section(&mut self, name: &str) -> Option<Vec<String>> {
        self.extensions.remove(name)
    }

    /// All unrecognized sections in output order
    #[must_use]
    pub const fn extension_sections(&self) -> &OrderedMap<Vec<String>> {
        &self.extensions
    }

    /// Info entries other than seeded defaults and version tags, sorted
    fn custom_info(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .info
            .iter()
            .filter(|(key, _)| !is_version_tag(key) && !DEFAULT_INFO.iter().any(|(d, _)| d == key))
            .map(|(key, value)| (key, value.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }

    /// Compare document content the way a read-write cycle preserves it
    ///
    /// Info entries are compared as a set, ignoring the seeded defaults and
    /// version tags (both are regenerated on output). Styles are compared by
    /// name, events in order, extension sections by name.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        let same_styles = self.styles.len() == other.styles.len()
            && self
                .styles
                .iter()
                .all(|(name, style)| other.styles.get(name) == Some(style));

        let same_extensions = self.extensions.len() == other.extensions.len()
            && self
                .extensions
                .iter()
                .all(|(name, lines)| other.extensions.get(name) == Some(lines));

        self.custom_info() == other.custom_info()
            && same_styles
            && self.events == other.events
            && same_extensions
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Document {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
