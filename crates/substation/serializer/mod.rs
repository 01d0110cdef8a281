//! SubStation script serializer
//!
//! Renders a [`Document`] in either dialect. Output order is fixed:
//! `[Script Info]` (generator comments, default keys, other keys, version
//! tag), unrecognized sections, styles, then events. Column values go
//! through the same dialect tables the parser reads with.
//!
//! # Example
//!
//! ```rust
//! use substation::{serialize, Dialect, Document};
//!
//! let text = serialize(&Document::new(), Dialect::Extended);
//! assert!(text.starts_with("[Script Info]\n; Script generated by substation\n"));
//! assert!(text.contains("\nScriptInfo: v4.00+\n"));
//! ```

use core::fmt::Write;

use log::debug;

use crate::{
    parser::{
        ast::{is_version_tag, Document, Event, Style, DEFAULT_INFO},
        schema::{format_list, EventField, SchemaField, StyleField},
    },
    Dialect,
};

/// Comment lines opening every `[Script Info]` section written by this crate
pub const GENERATOR_COMMENTS: [&str; 2] = [
    "; Script generated by substation",
    "; https://docs.rs/substation",
];

/// Info key the version tag is written under
pub const VERSION_TAG_KEY: &str = "ScriptInfo";

/// Render a document in the target dialect
///
/// Every line ends with `\n`, and sections are separated by one blank line.
#[must_use]
pub fn serialize(doc: &Document, dialect: Dialect) -> String {
    let mut out = String::new();

    write_script_info(&mut out, doc, dialect);
    out.push('\n');

    for (name, lines) in doc.extension_sections().iter() {
        let _ = writeln!(out, "[{name}]");
        for line in lines {
            let _ = writeln!(out, "{line}");
        }
        out.push('\n');
    }

    let _ = writeln!(out, "[{}]", dialect.styles_section());
    let _ = writeln!(out, "Format: {}", format_list::<StyleField>(dialect));
    for (name, style) in doc.styles().iter() {
        let _ = writeln!(out, "Style: {}", style_line(name, style, dialect));
    }
    out.push('\n');

    out.push_str("[Events]\n");
    let _ = writeln!(out, "Format: {}", format_list::<EventField>(dialect));
    for event in doc.events() {
        let _ = writeln!(out, "{}: {}", event.kind.keyword(), event_line(event, dialect));
    }

    debug!(
        "serialized {} info entries, {} styles, {} events, {} extension sections as {:?}",
        doc.info_entries().len(),
        doc.styles().len(),
        doc.events().len(),
        doc.extension_sections().len(),
        dialect
    );
    out
}

/// Write `[Script Info]` through the version tag line
fn write_script_info(out: &mut String, doc: &Document, dialect: Dialect) {
    out.push_str("[Script Info]\n");
    for comment in GENERATOR_COMMENTS {
        let _ = writeln!(out, "{comment}");
    }

    for (key, _) in DEFAULT_INFO {
        if let Some(value) = doc.info(key) {
            let _ = writeln!(out, "{key}: {value}");
        }
    }

    let custom = doc
        .info_entries()
        .iter()
        .filter(|(key, _)| !is_version_tag(key) && !DEFAULT_INFO.iter().any(|(d, _)| d == key));
    for (key, value) in custom {
        let _ = writeln!(out, "{key}: {value}");
    }

    let _ = writeln!(out, "{VERSION_TAG_KEY}: {}", dialect.version_tag());
}

/// Column values of a `Style:` line, without the keyword
#[must_use]
pub fn style_line(name: &str, style: &Style, dialect: Dialect) -> String {
    StyleField::columns(dialect)
        .iter()
        .map(|column| column.codec.encode(&column.field.read(name, style)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Column values of an event line, without the keyword
#[must_use]
pub fn event_line(event: &Event, dialect: Dialect) -> String {
    EventField::columns(dialect)
        .iter()
        .map(|column| column.codec.encode(&column.field.read(event)))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{Color, EventKind};

    #[test]
    fn default_style_lines() {
        let style = Style::default();
        assert_eq!(
            style_line("Default", &style, Dialect::Extended),
            "Default,Arial,20.0,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100.0,100.0,0.0,0.0,1,2.0,2.0,2,10,10,10,1"
        );
        assert_eq!(
            style_line("Default", &style, Dialect::Legacy),
            "Default,Arial,20.0,16777215,255,0,0,0,0,1,2.0,2.0,2,10,10,10,0,1"
        );
    }

    #[test]
    fn legacy_alignment_and_flags() {
        let style = Style {
            bold: true,
            underline: true,
            alignment: 7,
            back_color: Color::new(1, 2, 3, 0x40),
            ..Style::default()
        };
        assert_eq!(
            style_line("left", &style, Dialect::Legacy),
            "left,Arial,20.0,16777215,255,0,197121,-1,0,1,2.0,2.0,5,10,10,10,0,1"
        );
        assert!(style_line("left", &style, Dialect::Extended).contains(",&H40030201,-1,0,-1,0,"));
    }

    #[test]
    fn event_lines() {
        let event = Event {
            kind: EventKind::Comment,
            layer: 3,
            start: 1_500,
            end: 62_340,
            name: "Alice".into(),
            text: "a, b".into(),
            ..Event::default()
        };
        assert_eq!(
            event_line(&event, Dialect::Extended),
            "3,0:00:01.50,0:01:02.34,Default,Alice,0,0,0,,a, b"
        );
        assert_eq!(
            event_line(&event, Dialect::Legacy),
            "Marked=3,0:00:01.50,0:01:02.34,Default,Alice,0,0,0,,a, b"
        );
    }

    #[test]
    fn info_order() {
        let mut doc = Document::new();
        doc.set_info("ScriptType", "v4.00");
        doc.set_info("Title", "t");
        doc.remove_info("Collisions");
        let text = serialize(&doc, Dialect::Extended);
        let info: Vec<&str> = text.lines().take_while(|l| !l.is_empty()).collect();
        assert_eq!(
            info,
            [
                "[Script Info]",
                "; Script generated by substation",
                "; https://docs.rs/substation",
                "WrapStyle: 0",
                "ScaledBorderAndShadow: yes",
                "Title: t",
                "ScriptInfo: v4.00+",
            ]
        );
    }

    #[test]
    fn extension_sections_follow_script_info() {
        let mut doc = Document::new();
        doc.set_extension_section("Fonts", vec!["fontname: a.ttf".into()]);
        let text = serialize(&doc, Dialect::Legacy);
        assert!(text.contains("ScriptInfo: v4.00\n\n[Fonts]\nfontname: a.ttf\n\n[V4 Styles]\n"));
    }

    #[test]
    fn no_events_ends_with_format() {
        let text = serialize(&Document::new(), Dialect::Extended);
        assert!(text.ends_with(
            "[Events]\nFormat: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n"
        ));
    }
}
