//! Error types for SubStation parsing
//!
//! A single [`FormatError`] is the only failure surfaced by this crate. It
//! pairs a [`FormatErrorKind`] describing what went wrong with the location
//! (line number and section) where the parser encountered it.

mod format_error;

pub use format_error::{FormatError, FormatErrorKind};
