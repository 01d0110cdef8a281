//! Primary error type for SubStation parsing
//!
//! Contains [`FormatError`], raised for malformed section structure,
//! column-count mismatches, undecodable field values, and unknown event
//! keywords. There is no partial recovery: one error aborts the whole parse.

use core::fmt;
use thiserror::Error;

/// Cause of a [`FormatError`]
///
/// # Error Categories
///
/// - **Structure errors**: content outside sections, missing or empty format lines
/// - **Column errors**: required column absent, mismatched field counts
/// - **Content errors**: invalid color, time or numeric values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// Color text does not match the dialect's encoding
    #[error("invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    /// Timestamp text does not match `H:MM:SS.cc`
    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTime { value: String, reason: String },

    /// Integer, float or boolean field failed to parse
    #[error("invalid numeric value '{value}': {reason}")]
    InvalidNumeric { value: String, reason: String },

    /// Data line appeared before the section's `Format:` line
    #[error("data line before any Format line")]
    MissingFormat,

    /// `Format:` line declares no columns
    #[error("Format line declares no columns")]
    EmptyFormat,

    /// Column needed to populate a field is absent from the `Format:` line
    #[error("Format line has no '{column}' column")]
    MissingColumn { column: &'static str },

    /// Data line splits into a different number of fields than declared
    #[error("expected {expected} fields, found {found}")]
    FieldCountMismatch { expected: usize, found: usize },

    /// Line inside `[Events]` starts with something other than `Dialogue:` or `Comment:`
    #[error("unknown event type '{keyword}'")]
    UnknownEventType { keyword: String },

    /// Line that has no meaning at its position
    #[error("unexpected line: {reason}")]
    UnexpectedLine { reason: String },
}

/// Error raised while decoding SubStation text
///
/// Codec helpers produce errors without a location; the section parser
/// attaches the offending line number and section name via [`FormatError::at`].
///
/// # Examples
///
/// ```rust
/// use substation::parser::errors::{FormatError, FormatErrorKind};
///
/// let err = FormatError::new(FormatErrorKind::MissingFormat).at(12, "Events");
/// assert_eq!(err.line(), Some(12));
/// assert_eq!(err.to_string(), "line 12 in [Events]: data line before any Format line");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// What went wrong
    kind: FormatErrorKind,
    /// 1-based line number of the offending line
    line: Option<usize>,
    /// Name of the section the offending line belongs to
    section: Option<String>,
}

impl FormatError {
    /// Create an error without location information
    #[must_use]
    pub const fn new(kind: FormatErrorKind) -> Self {
        Self {
            kind,
            line: None,
            section: None,
        }
    }

    /// Attach the line number and section name where the error occurred
    #[must_use]
    pub fn at(mut self, line: usize, section: impl Into<String>) -> Self {
        self.line = Some(line);
        self.section = Some(section.into());
        self
    }

    /// Attach only a line number (used for content before the first section)
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Cause of this error
    #[must_use]
    pub const fn kind(&self) -> &FormatErrorKind {
        &self.kind
    }

    /// 1-based line number, if known
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        self.line
    }

    /// Section name, if known
    #[must_use]
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    /// Invalid color shorthand
    pub fn invalid_color<T: fmt::Display>(value: T, reason: &str) -> Self {
        Self::new(FormatErrorKind::InvalidColor {
            value: value.to_string(),
            reason: reason.to_string(),
        })
    }

    /// Invalid timestamp shorthand
    pub fn invalid_time<T: fmt::Display>(value: T, reason: &str) -> Self {
        Self::new(FormatErrorKind::InvalidTime {
            value: value.to_string(),
            reason: reason.to_string(),
        })
    }

    /// Invalid numeric shorthand
    pub fn invalid_numeric<T: fmt::Display>(value: T, reason: &str) -> Self {
        Self::new(FormatErrorKind::InvalidNumeric {
            value: value.to_string(),
            reason: reason.to_string(),
        })
    }
}

impl From<FormatErrorKind> for FormatError {
    fn from(kind: FormatErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.section.as_deref()) {
            (Some(line), Some(section)) => write!(f, "line {line} in [{section}]: {}", self.kind),
            (Some(line), None) => write!(f, "line {line}: {}", self.kind),
            (None, Some(section)) => write!(f, "[{section}]: {}", self.kind),
            (None, None) => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
