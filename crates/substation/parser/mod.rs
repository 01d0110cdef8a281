//! SubStation script parser module
//!
//! Builds a [`Document`] from SSA v4 or ASS v4+ text. Parsing is a single
//! pass over the lines of the input; the first malformed line aborts with a
//! [`FormatError`] naming the line and section.
//!
//! # Example
//!
//! ```rust
//! use substation::parser::parse;
//!
//! let script_text = r"
//! [Script Info]
//! Title: Example
//! ScriptType: v4.00+
//!
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Hello World!
//! ";
//!
//! let doc = parse(script_text, None)?;
//! assert_eq!(doc.info("Title"), Some("Example"));
//! assert_eq!(doc.events().len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ast;
pub mod errors;
pub mod schema;
pub mod sections;

mod main;

pub use ast::{Color, Document, Event, EventKind, Style};
pub use errors::{FormatError, FormatErrorKind};

use crate::Dialect;

/// Parse SubStation text in either dialect
///
/// `hint` is consulted only when a section's `Format:` columns and header do
/// not reveal its dialect; it outranks the script's own version tag.
///
/// # Errors
///
/// Returns a [`FormatError`] carrying the line number and section of the
/// first line that cannot be parsed.
pub fn parse(text: &str, hint: Option<Dialect>) -> Result<Document, FormatError> {
    main::Parser::new(text, hint).parse()
}
