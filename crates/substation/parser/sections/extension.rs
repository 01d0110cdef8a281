//! Pass-through handler for sections this crate does not interpret.
//!
//! Sections such as `[Aegisub Project Garbage]`, `[Fonts]` or `[Graphics]`
//! are stored as raw lines under their header name, exactly as written, so
//! they can be written back unchanged.

use log::trace;

use crate::parser::ast::Document;

/// Handler for one unrecognized section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionParser {
    /// Section name as written between the brackets
    name: String,
}

impl ExtensionParser {
    /// Enter the section `name`, registering it even if it stays empty
    ///
    /// A name seen before keeps its earlier lines; new lines are appended.
    #[must_use]
    pub fn enter(name: &str, doc: &mut Document) -> Self {
        doc.ensure_extension_section(name);
        Self {
            name: name.to_string(),
        }
    }

    /// Section name as written in the file
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store one non-blank line verbatim
    pub fn parse_line(&self, line: &str, doc: &mut Document) {
        trace!("[{}] raw line", self.name);
        doc.push_extension_line(&self.name, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_stored_verbatim() {
        let mut doc = Document::new();
        let section = ExtensionParser::enter("Aegisub Project Garbage", &mut doc);
        section.parse_line("Last Style Storage: Default", &mut doc);
        section.parse_line("  ; kept as written", &mut doc);
        assert_eq!(
            doc.extension_section("Aegisub Project Garbage"),
            Some(
                &[
                    "Last Style Storage: Default".to_string(),
                    "  ; kept as written".to_string()
                ][..]
            )
        );
    }

    #[test]
    fn repeated_section_appends() {
        let mut doc = Document::new();
        ExtensionParser::enter("Fonts", &mut doc).parse_line("a", &mut doc);
        ExtensionParser::enter("Fonts", &mut doc).parse_line("b", &mut doc);
        assert_eq!(doc.extension_section("Fonts").map(<[String]>::len), Some(2));
        assert_eq!(doc.extension_sections().len(), 1);
    }

    #[test]
    fn empty_section_is_registered() {
        let mut doc = Document::new();
        let section = ExtensionParser::enter("Graphics", &mut doc);
        assert_eq!(section.name(), "Graphics");
        assert_eq!(doc.extension_section("Graphics"), Some(&[][..]));
    }
}
