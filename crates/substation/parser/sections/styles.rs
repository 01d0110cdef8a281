//! Style section parser for SubStation scripts.
//!
//! Handles `[V4 Styles]` and `[V4+ Styles]`. A `Format:` line declares the
//! columns; each `Style:` line is split on every comma and decoded through
//! the column mapping into a [`Style`] stored under its `Name` value.

use ahash::AHashSet;
use log::{trace, warn};

use crate::{
    parser::{
        ast::{Document, Style},
        errors::{FormatError, FormatErrorKind},
        schema::{FormatLine, StyleField},
        sections::{is_comment, split_keyword, FORMAT_KEYWORD},
    },
    Dialect,
};

/// Keyword of a style data line
pub const STYLE_KEYWORD: &str = "Style";

/// Parser for styles section lines
///
/// # Example
///
/// ```rust
/// use substation::{parser::sections::StylesParser, Dialect, Document};
///
/// let mut doc = Document::new();
/// let mut styles = StylesParser::new();
/// styles.enter(Some(Dialect::Legacy));
/// styles.parse_line("Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, TertiaryColour, BackColour, Bold, Italic, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, AlphaLevel, Encoding", None, &mut doc)?;
/// styles.parse_line("Style: top,Arial,20,16777215,255,0,0,0,0,1,2,2,6,10,10,10,0,1", None, &mut doc)?;
/// assert_eq!(doc.style("top").map(|s| s.alignment), Some(8));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct StylesParser {
    /// Dialect named by the current section header
    header: Option<Dialect>,
    /// Active column mapping for the current section
    format: Option<FormatLine<StyleField>>,
    /// Dialect of the most recent `Format:` line in any styles section
    dialect: Option<Dialect>,
    /// Names defined by this file so far
    seen: AHashSet<String>,
}

impl StylesParser {
    /// Create a parser with no section entered
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new styles section
    ///
    /// The column list of a previous section does not carry over.
    pub fn enter(&mut self, header: Option<Dialect>) {
        self.header = header;
        self.format = None;
    }

    /// Dialect resolved from the styles columns, if a `Format:` line was seen
    #[must_use]
    pub const fn dialect(&self) -> Option<Dialect> {
        self.dialect
    }

    /// Number of distinct styles defined by the file
    #[must_use]
    pub fn count(&self) -> usize {
        self.seen.len()
    }

    /// Apply one non-blank line
    ///
    /// `fallback` is used when neither the column names nor the section
    /// header decide the dialect.
    ///
    /// # Errors
    ///
    /// Returns an error for a line that is neither `Format:` nor `Style:`, a
    /// style before any `Format:` line, or a style that does not decode.
    pub fn parse_line(
        &mut self,
        line: &str,
        fallback: Option<Dialect>,
        doc: &mut Document,
    ) -> Result<(), FormatError> {
        if is_comment(line) {
            return Ok(());
        }

        match split_keyword(line) {
            Some((FORMAT_KEYWORD, columns)) => self.set_format(columns, fallback),
            Some((STYLE_KEYWORD, data)) => {
                let (name, style) = self.decode(data)?;
                trace!("style {name}");
                if !self.seen.insert(name.clone()) {
                    warn!("style '{name}' defined more than once; keeping the last definition");
                }
                doc.set_style(name, style);
                Ok(())
            }
            _ => Err(FormatErrorKind::UnexpectedLine {
                reason: "expected 'Format:' or 'Style:'".to_string(),
            }
            .into()),
        }
    }

    /// Install a new column mapping
    fn set_format(&mut self, columns: &str, fallback: Option<Dialect>) -> Result<(), FormatError> {
        let format = FormatLine::parse(columns, self.header.or(fallback))?;
        for unknown in format.unknown_columns() {
            warn!("ignoring unknown style column '{unknown}'");
        }
        if self.format.is_some() {
            warn!("styles Format line redeclared; later styles use the new columns");
        }
        self.dialect = Some(format.dialect());
        self.format = Some(format);
        Ok(())
    }

    /// Decode the comma-separated values of a `Style:` line
    fn decode(&self, data: &str) -> Result<(String, Style), FormatError> {
        let format = self.format.as_ref().ok_or(FormatErrorKind::MissingFormat)?;
        let values: Vec<&str> = data.split(',').map(str::trim).collect();

        let mut name = String::new();
        let mut style = Style::default();
        for (field, value) in format.decode(&values)? {
            if field == StyleField::Name {
                name = value.to_string();
            } else {
                let stored = field.write(&mut style, value);
                debug_assert!(stored, "codec and slot disagree for {field:?}");
            }
        }
        Ok((name, style))
    }
}
