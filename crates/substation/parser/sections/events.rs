//! Events section parser for SubStation scripts.
//!
//! Handles the `[Events]` section. A `Format:` line declares the columns
//! (its first column, `Layer` or `Marked`, also tells the dialect apart).
//! `Dialogue:` and `Comment:` lines are split into exactly as many fields
//! as declared; the final column takes the rest of the line, commas and all.

use log::{trace, warn};

use crate::{
    parser::{
        ast::{Document, Event, EventKind},
        errors::{FormatError, FormatErrorKind},
        schema::{EventField, FormatLine},
        sections::{is_comment, split_keyword, FORMAT_KEYWORD},
    },
    Dialect,
};

/// Parser for `[Events]` lines
///
/// # Example
///
/// ```rust
/// use substation::{parser::sections::EventsParser, Document, EventKind};
///
/// let mut doc = Document::new();
/// let mut events = EventsParser::new();
/// events.parse_line("Format: Marked, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text", None, &mut doc)?;
/// events.parse_line("Comment: Marked=1,0:00:01.00,0:00:02.00,Default,,0,0,0,,a, b", None, &mut doc)?;
///
/// let event = &doc.events()[0];
/// assert_eq!(event.kind, EventKind::Comment);
/// assert_eq!(event.layer, 1);
/// assert_eq!(event.text, "a, b");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct EventsParser {
    /// Active column mapping for the current section
    format: Option<FormatLine<EventField>>,
    /// Events appended so far
    count: usize,
}

impl EventsParser {
    /// Create a parser with no section entered
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new `[Events]` section
    pub fn enter(&mut self) {
        self.format = None;
    }

    /// Number of events appended so far
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Apply one non-blank line
    ///
    /// `fallback` is used when the column names do not decide the dialect.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown line keyword, an event before any
    /// `Format:` line, or an event that does not decode.
    pub fn parse_line(
        &mut self,
        line: &str,
        fallback: Option<Dialect>,
        doc: &mut Document,
    ) -> Result<(), FormatError> {
        if is_comment(line) {
            return Ok(());
        }

        let (keyword, rest) = split_keyword(line).ok_or_else(|| FormatErrorKind::UnexpectedLine {
            reason: "expected 'Format:', 'Dialogue:' or 'Comment:'".to_string(),
        })?;

        if keyword == FORMAT_KEYWORD {
            return self.set_format(rest, fallback);
        }

        let kind = EventKind::from_keyword(keyword).ok_or_else(|| {
            FormatErrorKind::UnknownEventType {
                keyword: keyword.to_string(),
            }
        })?;
        let event = self.decode(kind, rest)?;
        trace!("{} at {} ms", kind.keyword(), event.start);
        doc.push_event(event);
        self.count += 1;
        Ok(())
    }

    /// Install a new column mapping
    fn set_format(&mut self, columns: &str, fallback: Option<Dialect>) -> Result<(), FormatError> {
        let format = FormatLine::parse(columns, fallback)?;
        for unknown in format.unknown_columns() {
            warn!("ignoring unknown event column '{unknown}'");
        }
        if self.format.is_some() {
            warn!("events Format line redeclared; later events use the new columns");
        }
        self.format = Some(format);
        Ok(())
    }

    /// Decode the columns of an event line
    fn decode(&self, kind: EventKind, data: &str) -> Result<Event, FormatError> {
        let format = self.format.as_ref().ok_or(FormatErrorKind::MissingFormat)?;
        let values: Vec<&str> = data.trim_start().splitn(format.len(), ',').collect();

        let mut event = Event {
            kind,
            ..Event::default()
        };
        for (field, value) in format.decode(&values)? {
            let stored = field.write(&mut event, value);
            debug_assert!(stored, "codec and slot disagree for {field:?}");
        }
        Ok(event)
    }
}
