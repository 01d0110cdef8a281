//! Main parser coordination and dispatch logic
//!
//! Contains the `Parser` state machine that walks the input line by line,
//! tracks which region it is in and hands each line to the matching
//! section handler.

use log::{debug, trace};

use crate::{
    parser::{
        ast::Document,
        errors::{FormatError, FormatErrorKind},
        sections::{EventsParser, ExtensionParser, ScriptInfoParser, StylesParser},
    },
    utils::strip_bom,
    Dialect,
};

/// Section name of the metadata block
const SCRIPT_INFO_SECTION: &str = "Script Info";

/// Section name of the event block
const EVENTS_SECTION: &str = "Events";

/// Region of the input the parser is currently in
#[derive(Debug)]
enum Region {
    /// Before the first section header
    Preamble,
    /// `[Script Info]`
    ScriptInfo,
    /// `[V4 Styles]` or `[V4+ Styles]`
    Styles,
    /// `[Events]`
    Events,
    /// Any other section, stored verbatim
    Extension(ExtensionParser),
}

/// Extract the name from a `[Name]` header line
fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

/// Internal parser state for coordinating section parsing
pub(super) struct Parser<'a> {
    /// Source text being parsed
    source: &'a str,
    /// Caller's dialect hint
    hint: Option<Dialect>,
    /// Document built so far
    doc: Document,
    /// Current region
    region: Region,
    /// Current section name as written, for error locations
    section: Option<String>,
    /// `[Script Info]` state
    info: ScriptInfoParser,
    /// Styles state
    styles: StylesParser,
    /// `[Events]` state
    events: EventsParser,
}

impl<'a> Parser<'a> {
    /// Create new parser for source text
    pub fn new(source: &'a str, hint: Option<Dialect>) -> Self {
        Self {
            source,
            hint,
            doc: Document::without_styles(),
            region: Region::Preamble,
            section: None,
            info: ScriptInfoParser::new(),
            styles: StylesParser::new(),
            events: EventsParser::new(),
        }
    }

    /// Parse the complete script, stopping at the first malformed line
    pub fn parse(mut self) -> Result<Document, FormatError> {
        let (text, had_bom) = strip_bom(self.source);
        if had_bom {
            trace!("skipped byte order mark");
        }

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            if let Err(err) = self.parse_line(line) {
                return Err(match &self.section {
                    Some(section) => err.at(line_number, section.clone()),
                    None => err.at_line(line_number),
                });
            }
        }

        debug!(
            "parsed {} info entries, {} styles, {} events, {} extension sections",
            self.info.entries(),
            self.styles.count(),
            self.events.count(),
            self.doc.extension_sections().len()
        );
        Ok(self.doc)
    }

    /// Route one line to the handler for the current region
    fn parse_line(&mut self, line: &str) -> Result<(), FormatError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        if let Some(name) = section_header(trimmed) {
            self.enter_section(name);
            return Ok(());
        }

        match &self.region {
            Region::Preamble => Err(FormatErrorKind::UnexpectedLine {
                reason: "content before the first section header".to_string(),
            }
            .into()),
            Region::ScriptInfo => {
                self.info.parse_line(line, &mut self.doc);
                Ok(())
            }
            Region::Styles => {
                let fallback = self.hint.or(self.info.version());
                self.styles.parse_line(line, fallback, &mut self.doc)
            }
            Region::Events => {
                let fallback = self
                    .hint
                    .or(self.styles.dialect())
                    .or(self.info.version());
                self.events.parse_line(line, fallback, &mut self.doc)
            }
            Region::Extension(section) => {
                section.parse_line(line, &mut self.doc);
                Ok(())
            }
        }
    }

    /// Switch region on a section header
    fn enter_section(&mut self, name: &str) {
        debug!("entering [{name}]");
        let key = name.trim();

        self.region = if key.eq_ignore_ascii_case(SCRIPT_INFO_SECTION) {
            Region::ScriptInfo
        } else if let Some(dialect) = Dialect::from_styles_section(key) {
            self.styles.enter(Some(dialect));
            Region::Styles
        } else if key.eq_ignore_ascii_case(EVENTS_SECTION) {
            self.events.enter();
            Region::Events
        } else {
            Region::Extension(ExtensionParser::enter(name, &mut self.doc))
        };
        self.section = Some(name.to_string());
    }
}
