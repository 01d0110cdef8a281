//! # Substation
//!
//! Lossless reader and writer for SubStation Alpha subtitles in both of its
//! dialects: legacy SSA v4 and extended ASS v4+. Files in either dialect
//! parse into one [`Document`], and a document can be written back out in
//! either dialect.
//!
//! ## Features
//!
//! - **Two dialects, one model**: colors, alignment and layer columns are
//!   converted on the way in and out
//! - **Exact output**: section order, column order and number formatting
//!   match what common authoring tools write
//! - **Nothing dropped**: unknown sections such as `[Aegisub Project Garbage]`
//!   and unknown info keys are carried through verbatim
//! - **Typed errors**: every failure is a [`FormatError`] with line and section
//!
//! ## Quick Start
//!
//! ```rust
//! use substation::{Dialect, Document};
//!
//! let script_text = r"
//! [Script Info]
//! Title: Example
//! ScriptType: v4.00+
//!
//! [V4+ Styles]
//! Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
//! Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1
//!
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Hello, World!
//! ";
//!
//! let doc = Document::parse(script_text)?;
//! assert_eq!(doc.events()[0].text, "Hello, World!");
//!
//! let ssa = doc.to_dialect_string(Dialect::Legacy);
//! assert!(ssa.contains("[V4 Styles]"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod parser;
pub mod serializer;
pub mod utils;

pub use parser::{
    ast::{Color, Document, Event, EventKind, Style},
    errors::{FormatError, FormatErrorKind},
    parse,
};
pub use serializer::serialize;

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// SubStation dialects this crate reads and writes.
///
/// The dialect decides the styles section header, the style and event
/// column sets, the color encoding and the version tag.
///
/// # Examples
///
/// ```rust
/// use substation::Dialect;
///
/// assert_eq!(Dialect::from_version_tag("v4.00"), Some(Dialect::Legacy));
/// assert_eq!(Dialect::from_version_tag("v4.00+"), Some(Dialect::Extended));
/// assert_eq!(Dialect::Extended.styles_section(), "V4+ Styles");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialect {
    /// SSA v4 (SubStation Alpha legacy format).
    ///
    /// Decimal `BBGGRR` colors, `TertiaryColour`, `AlphaLevel`, and a
    /// `Marked` event column.
    Legacy,
    /// ASS v4+ (Advanced SubStation Alpha).
    ///
    /// `&HAABBGGRR` colors with alpha, underline/strikeout/scale/spacing/angle
    /// style columns, and a `Layer` event column.
    #[default]
    Extended,
}

impl Dialect {
    /// Parse a `ScriptType`/`ScriptInfo` version value.
    ///
    /// Returns `None` for unrecognized values.
    #[must_use]
    pub fn from_version_tag(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("v4.00") {
            Some(Self::Legacy)
        } else if value.eq_ignore_ascii_case("v4.00+") || value.eq_ignore_ascii_case("v4.00++") {
            Some(Self::Extended)
        } else {
            None
        }
    }

    /// Dialect implied by a styles section name, matched case-insensitively
    #[must_use]
    pub fn from_styles_section(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("V4 Styles") {
            Some(Self::Legacy)
        } else if name.eq_ignore_ascii_case("V4+ Styles") {
            Some(Self::Extended)
        } else {
            None
        }
    }

    /// Guess the dialect of a text blob from its styles section header.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use substation::Dialect;
    ///
    /// assert_eq!(Dialect::detect("[Script Info]\n\n[V4 Styles]\n"), Some(Dialect::Legacy));
    /// assert_eq!(Dialect::detect("[v4+ styles]"), Some(Dialect::Extended));
    /// assert_eq!(Dialect::detect("1\n00:00:01,000 --> 00:00:02,000\n"), None);
    /// ```
    #[must_use]
    pub fn detect(text: &str) -> Option<Self> {
        text.lines().find_map(|line| {
            line.trim()
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
                .and_then(Self::from_styles_section)
        })
    }

    /// Version value written on output
    #[must_use]
    pub const fn version_tag(self) -> &'static str {
        match self {
            Self::Legacy => "v4.00",
            Self::Extended => "v4.00+",
        }
    }

    /// Styles section name written on output, without brackets
    #[must_use]
    pub const fn styles_section(self) -> &'static str {
        match self {
            Self::Legacy => "V4 Styles",
            Self::Extended => "V4+ Styles",
        }
    }
}

/// Result type for codec operations, using the crate's [`FormatError`].
///
/// # Examples
///
/// ```rust
/// use substation::{Document, Result};
///
/// fn load(input: &str) -> Result<Document> {
///     Document::parse(input)
/// }
/// ```
pub type Result<T> = core::result::Result<T, FormatError>;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn version_tags() {
        assert_eq!(Dialect::from_version_tag(" v4.00 "), Some(Dialect::Legacy));
        assert_eq!(Dialect::from_version_tag("V4.00+"), Some(Dialect::Extended));
        assert_eq!(Dialect::from_version_tag("v4.00++"), Some(Dialect::Extended));
        assert_eq!(Dialect::from_version_tag("v3"), None);
        assert_eq!(Dialect::Legacy.version_tag(), "v4.00");
        assert_eq!(Dialect::Extended.version_tag(), "v4.00+");
    }

    #[test]
    fn styles_sections() {
        assert_eq!(Dialect::from_styles_section("v4 styles"), Some(Dialect::Legacy));
        assert_eq!(Dialect::from_styles_section("Events"), None);
        for dialect in [Dialect::Legacy, Dialect::Extended] {
            assert_eq!(
                Dialect::from_styles_section(dialect.styles_section()),
                Some(dialect)
            );
        }
    }

    #[test]
    fn detect_ignores_other_headers() {
        assert_eq!(Dialect::detect("[Script Info]\n[Events]\n"), None);
        assert_eq!(Dialect::detect(""), None);
    }

    #[test]
    fn core_functionality_integration() {
        let mut doc = Document::new();
        doc.set_info("Title", "Integration");
        doc.push_event(Event {
            text: "Hello, World!".into(),
            ..Event::default()
        });

        for dialect in [Dialect::Legacy, Dialect::Extended] {
            let text = doc.to_dialect_string(dialect);
            assert_eq!(Dialect::detect(&text), Some(dialect));
            let reparsed = parse(&text, None).unwrap();
            assert!(doc.equals(&reparsed));
            assert_eq!(serialize(&reparsed, dialect), text);
        }
    }

    #[test]
    fn empty_input_has_no_styles() {
        let doc = parse("", None).unwrap();
        assert_eq!(doc.info("WrapStyle"), Some("0"));
        assert!(doc.styles().is_empty());
        assert!(doc.events().is_empty());

        let mut expected = Document::new();
        expected.remove_style("Default");
        assert!(doc.equals(&expected));
    }
}
