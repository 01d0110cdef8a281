//! Section-specific line handlers for SubStation scripts.
//!
//! Each region kind of a script has its own handler that keeps whatever
//! state the region needs (the active `Format:` columns, the version tag
//! seen so far) and applies one line at a time to the [`Document`] being
//! built. The state machine in the parent module decides which handler a
//! line goes to and attaches the line number and section to any error.
//!
//! # Example
//!
//! ```rust
//! use substation::{parser::sections::EventsParser, Document};
//!
//! let mut doc = Document::new();
//! let mut events = EventsParser::new();
//! events.parse_line("Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text", None, &mut doc)?;
//! events.parse_line("Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,Hi, there", None, &mut doc)?;
//! assert_eq!(doc.events()[0].text, "Hi, there");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod events;
pub mod extension;
pub mod script_info;
pub mod styles;

pub use events::EventsParser;
pub use extension::ExtensionParser;
pub use script_info::ScriptInfoParser;
pub use styles::StylesParser;

/// Keyword that introduces a column list in Styles and Events
pub const FORMAT_KEYWORD: &str = "Format";

/// Whether a line is a `;` comment
#[must_use]
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with(';')
}

/// Split `Keyword: rest` at the first `:`
///
/// The keyword is trimmed; the rest is returned untouched.
#[must_use]
pub fn split_keyword(line: &str) -> Option<(&str, &str)> {
    line.split_once(':')
        .map(|(keyword, rest)| (keyword.trim(), rest))
}
