//! Document model for SubStation scripts
//!
//! Owned, typed representation that both dialects read into and write out
//! of. Fields the model does not interpret (extra info keys, unknown
//! sections) are carried as plain strings so nothing is lost on output.
//!
//! # Example
//!
//! ```rust
//! use substation::parser::ast::{Color, Document, Event, EventKind, Style};
//!
//! let mut doc = Document::new();
//! doc.set_style("Sign", Style { primary_color: Color::rgb(255, 255, 0), ..Style::default() });
//! doc.push_event(Event { kind: EventKind::Comment, ..Event::default() });
//!
//! assert_eq!(doc.styles().len(), 2);
//! assert!(doc.events()[0].is_comment());
//! ```

mod color;
mod document;
mod event;
mod style;

pub use color::Color;
pub use document::{
    is_version_tag, Document, DEFAULT_INFO, DEFAULT_STYLE_NAME, VERSION_TAG_KEYS,
};
pub use event::{Event, EventKind};
pub use style::{ass_to_ssa_alignment, ssa_to_ass_alignment, Style};
