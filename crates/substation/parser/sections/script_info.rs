//! Script Info section parser for SubStation scripts.
//!
//! Handles the `[Script Info]` section, which holds free-form `key: value`
//! metadata. Version tag keys are not stored; they are regenerated on output
//! but their value is remembered as a dialect hint.

use log::{trace, warn};

use crate::{
    parser::{
        ast::{is_version_tag, Document},
        sections::is_comment,
    },
    Dialect,
};

/// Parser for `[Script Info]` lines
///
/// State survives across repeated `[Script Info]` sections so the version
/// tag is remembered for the rest of the file.
#[derive(Debug, Default)]
pub struct ScriptInfoParser {
    /// Dialect named by the last recognized version tag
    version: Option<Dialect>,
    /// Entries stored so far
    entries: usize,
}

impl ScriptInfoParser {
    /// Create a parser with no version tag seen
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dialect named by a `ScriptType`/`ScriptInfo` tag, if one was seen
    #[must_use]
    pub const fn version(&self) -> Option<Dialect> {
        self.version
    }

    /// Number of info entries stored so far
    #[must_use]
    pub const fn entries(&self) -> usize {
        self.entries
    }

    /// Apply one non-blank line
    ///
    /// The line is split at its first `:`. The key is trimmed and exactly
    /// one leading space is removed from the value; the rest of the value,
    /// including further colons, is kept verbatim.
    ///
    /// Lines without a `:` carry no entry and are skipped.
    pub fn parse_line(&mut self, line: &str, doc: &mut Document) {
        if is_comment(line) {
            return;
        }

        let Some((key, value)) = line.split_once(':') else {
            warn!("skipping script info line without ':': {line}");
            return;
        };
        let key = key.trim();
        let value = value.strip_prefix(' ').unwrap_or(value);

        if is_version_tag(key) {
            trace!("version tag {key}: {value}");
            if let Some(dialect) = Dialect::from_version_tag(value) {
                self.version = Some(dialect);
            }
            return;
        }

        trace!("info {key}");
        doc.set_info(key, value);
        self.entries += 1;
    }
}
