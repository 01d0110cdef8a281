//! Event AST node for `[Events]` dialogue and comment lines

/// Kind of event line
///
/// Comments are never displayed but are round-tripped exactly like
/// dialogue, including their position in the event sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// Displayed subtitle line
    #[default]
    Dialogue,

    /// Hidden line kept for authoring notes
    Comment,
}

impl EventKind {
    /// Parse the keyword that starts an event line
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use substation::EventKind;
    /// assert_eq!(EventKind::from_keyword("Dialogue"), Some(EventKind::Dialogue));
    /// assert_eq!(EventKind::from_keyword("Comment"), Some(EventKind::Comment));
    /// assert_eq!(EventKind::from_keyword("Picture"), None);
    /// ```
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim() {
            "Dialogue" => Some(Self::Dialogue),
            "Comment" => Some(Self::Comment),
            _ => None,
        }
    }

    /// Keyword written at the start of the line
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Dialogue => "Dialogue",
            Self::Comment => "Comment",
        }
    }
}

/// One subtitle cue
///
/// Times are milliseconds. `end >= start` is expected by players but not
/// enforced here, and `style` is carried verbatim even if the document has
/// no style of that name.
///
/// # Examples
///
/// ```rust
/// use substation::{Event, EventKind};
///
/// let event = Event {
///     start: 0,
///     end: 60_000,
///     text: "An, example, subtitle.".to_string(),
///     ..Event::default()
/// };
///
/// assert!(event.is_dialogue());
/// assert_eq!(event.duration(), 60_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Dialogue or comment
    pub kind: EventKind,

    /// Z-order; written as `Marked=<layer>` in SSA v4
    pub layer: i32,

    /// Start time in milliseconds
    pub start: i64,

    /// End time in milliseconds
    pub end: i64,

    /// Name of the style to render with
    pub style: String,

    /// Actor or speaker name
    pub name: String,

    /// Left margin override (0 = use style)
    pub margin_l: i32,

    /// Right margin override (0 = use style)
    pub margin_r: i32,

    /// Vertical margin override (0 = use style)
    pub margin_v: i32,

    /// Transition effect specification
    pub effect: String,

    /// Text with override blocks, kept as opaque content
    pub text: String,
}

impl Event {
    /// Check if this is a dialogue event
    #[must_use]
    pub const fn is_dialogue(&self) -> bool {
        matches!(self.kind, EventKind::Dialogue)
    }

    /// Check if this is a comment event
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self.kind, EventKind::Comment)
    }

    /// Duration in milliseconds, zero when `end` precedes `start`
    #[must_use]
    pub fn duration(&self) -> i64 {
        self.end.saturating_sub(self.start).max(0)
    }
}

impl Default for Event {
    /// Ten-second dialogue line in the `Default` style
    fn default() -> Self {
        Self {
            kind: EventKind::Dialogue,
            layer: 0,
            start: 0,
            end: 10_000,
            style: "Default".to_string(),
            name: String::new(),
            margin_l: 0,
            margin_r: 0,
            margin_v: 0,
            effect: String::new(),
            text: String::new(),
        }
    }
}
