//! Property-based tests for the SubStation codec
//!
//! Uses proptest to check that colors, timestamps and whole documents
//! survive a write-then-read cycle in both dialects.

use proptest::prelude::*;
use substation::{
    parser::ast::{is_version_tag, DEFAULT_INFO},
    utils::{
        ass_rgba_to_color, color_to_ass_rgba, color_to_ssa_rgb, ms_to_timestamp,
        ssa_rgb_to_color, timestamp_to_ms,
    },
    Color, Dialect, Document, Event, EventKind, Style,
};

/// Generate an arbitrary color
fn arb_color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b, a)| Color::new(r, g, b, a))
}

/// Generate a color without alpha, the only kind SSA v4 can carry
fn arb_opaque_color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::rgb(r, g, b))
}

/// Generate a float that prints and parses back exactly
fn arb_float() -> impl Strategy<Value = f64> {
    (-4_000i32..4_000).prop_map(|quarter| f64::from(quarter) / 4.0)
}

/// Generate a non-negative time on a centisecond boundary
fn arb_time() -> impl Strategy<Value = i64> {
    (0i64..36_000_000).prop_map(|cs| cs * 10)
}

/// Generate a column value, separators and line breaks included
fn arb_field_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[A-Za-z0-9_]([A-Za-z0-9 _.]{0,10}[A-Za-z0-9_])?",
        "[A-Za-z0-9 ,;\r\n]{0,12}",
    ]
}

/// Generate free event text, including separators and override blocks
fn arb_event_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ,.:;!?']{0,40}",
        "\\{\\\\[a-z0-9]+\\}[a-zA-Z ,]{0,30}",
        "[a-z]{1,10}\\\\N[a-z, ]{0,10}",
        "[\u{0020}-\u{007E}\u{00A0}-\u{00FF}]{0,40}",
        "[a-z ,]{0,10}(\r?\n|\r)[a-z ,]{0,10}",
    ]
}

/// Generate a style both dialects can carry
fn arb_portable_style() -> impl Strategy<Value = Style> {
    (
        (
            "[A-Za-z]([A-Za-z ]{0,10}[a-z])?",
            arb_float(),
            arb_opaque_color(),
            arb_opaque_color(),
            arb_opaque_color(),
            arb_opaque_color(),
        ),
        (
            any::<bool>(),
            any::<bool>(),
            any::<i32>(),
            arb_float(),
            arb_float(),
            1..=9i32,
        ),
        (any::<i32>(), any::<i32>(), any::<i32>(), any::<i32>()),
    )
        .prop_map(
            |(
                (fontname, fontsize, primary, secondary, outline_color, back),
                (bold, italic, border_style, outline, shadow, alignment),
                (margin_l, margin_r, margin_v, encoding),
            )| Style {
                fontname,
                fontsize,
                primary_color: primary,
                secondary_color: secondary,
                outline_color,
                back_color: back,
                bold,
                italic,
                border_style,
                outline,
                shadow,
                alignment,
                margin_l,
                margin_r,
                margin_v,
                encoding,
                ..Style::default()
            },
        )
}

/// Generate a style using ASS v4+ only attributes as well
fn arb_extended_style() -> impl Strategy<Value = Style> {
    (
        arb_portable_style(),
        (arb_color(), arb_color()),
        (any::<bool>(), any::<bool>()),
        (arb_float(), arb_float(), arb_float(), arb_float()),
    )
        .prop_map(
            |(base, (primary, back), (underline, strikeout), (scale_x, scale_y, spacing, angle))| {
                Style {
                    primary_color: primary,
                    back_color: back,
                    underline,
                    strikeout,
                    scale_x,
                    scale_y,
                    spacing,
                    angle,
                    ..base
                }
            },
        )
}

/// Generate an arbitrary event
fn arb_event() -> impl Strategy<Value = Event> {
    (
        (any::<bool>(), any::<i32>(), arb_time(), arb_time()),
        (arb_field_text(), arb_field_text(), arb_field_text()),
        (any::<i32>(), any::<i32>(), any::<i32>()),
        arb_event_text(),
    )
        .prop_map(
            |((comment, layer, start, end), (style, name, effect), (margin_l, margin_r, margin_v), text)| {
                Event {
                    kind: if comment {
                        EventKind::Comment
                    } else {
                        EventKind::Dialogue
                    },
                    layer,
                    start,
                    end,
                    style,
                    name,
                    margin_l,
                    margin_r,
                    margin_v,
                    effect,
                    text,
                }
            },
        )
}

/// Generate an info entry that is neither a seeded default nor a version tag
fn arb_info() -> impl Strategy<Value = (String, String)> {
    (
        "[A-Za-z]([A-Za-z0-9 ]{0,14}[A-Za-z0-9])?",
        "[ -~]{0,30}",
    )
        .prop_filter("reserved key", |(key, _)| {
            !is_version_tag(key) && !DEFAULT_INFO.iter().any(|(d, _)| *d == key.as_str())
        })
}

/// The document a reader sees after the writer has made every event fit on one line
fn as_written(doc: &Document) -> Document {
    let column = |value: &str| {
        value
            .replace("\r\n", " ")
            .replace(['\r', '\n'], " ")
            .replace(',', ";")
            .trim()
            .to_string()
    };
    let mut written = doc.clone();
    for event in written.events_mut() {
        event.style = column(&event.style);
        event.name = column(&event.name);
        event.effect = column(&event.effect);
        event.text = event.text.replace("\r\n", "\\N").replace(['\r', '\n'], "\\N");
    }
    written
}

/// Assemble a document from generated parts
fn arb_document(style: impl Strategy<Value = Style>) -> impl Strategy<Value = Document> {
    (
        prop::collection::vec(arb_info(), 0..5),
        prop::collection::vec(("[A-Za-z][A-Za-z0-9_]{0,12}", style), 0..5),
        prop::collection::vec(arb_event(), 0..10),
    )
        .prop_map(|(info, styles, events)| {
            let mut doc = Document::new();
            for (key, value) in info {
                doc.set_info(key, value);
            }
            for (name, style) in styles {
                doc.set_style(name, style);
            }
            for event in events {
                doc.push_event(event);
            }
            doc
        })
}

proptest! {
    #[test]
    fn ass_color_round_trip(color in arb_color()) {
        prop_assert_eq!(ass_rgba_to_color(&color_to_ass_rgba(color)).unwrap(), color);
    }

    #[test]
    fn ssa_color_round_trip(color in arb_opaque_color()) {
        prop_assert_eq!(ssa_rgb_to_color(&color_to_ssa_rgb(color).to_string()).unwrap(), color);
    }

    #[test]
    fn timestamp_round_trip(ms in arb_time()) {
        prop_assert_eq!(timestamp_to_ms(&ms_to_timestamp(ms)).unwrap(), ms);
    }

    #[test]
    fn timestamp_truncates_to_centiseconds(ms in 0i64..360_000_000) {
        prop_assert_eq!(timestamp_to_ms(&ms_to_timestamp(ms)).unwrap(), ms - ms % 10);
    }

    #[test]
    fn portable_document_round_trip(doc in arb_document(arb_portable_style())) {
        for dialect in [Dialect::Legacy, Dialect::Extended] {
            let text = doc.to_dialect_string(dialect);
            let reparsed = Document::parse(&text).unwrap();
            prop_assert!(as_written(&doc).equals(&reparsed), "{:?} output did not read back:\n{}", dialect, text);
        }
    }

    #[test]
    fn extended_document_round_trip(doc in arb_document(arb_extended_style())) {
        let text = doc.to_dialect_string(Dialect::Extended);
        let reparsed = Document::parse(&text).unwrap();
        prop_assert!(as_written(&doc).equals(&reparsed));
        prop_assert_eq!(reparsed.to_dialect_string(Dialect::Extended), text);
    }

    #[test]
    fn plain_columns_survive_unchanged(
        event in arb_event(),
        field in "[A-Za-z0-9_]([A-Za-z0-9 _.]{0,10}[A-Za-z0-9_])?",
        text in "[a-zA-Z0-9 ,.:;!?']{0,40}",
    ) {
        let mut doc = Document::new();
        doc.push_event(Event {
            style: field.clone(),
            name: field.clone(),
            effect: field,
            text,
            ..event
        });
        let reparsed = Document::parse(&doc.to_dialect_string(Dialect::Extended)).unwrap();
        prop_assert!(doc.equals(&reparsed));
    }

    #[test]
    fn parsing_arbitrary_text_never_panics(text in "[\\[\\]A-Za-z0-9:;,. \n]{0,200}") {
        let _ = Document::parse(&text);
    }
}
