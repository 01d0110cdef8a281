//! Column schemas for the two SubStation dialects
//!
//! Each dialect declares, for styles and for events, the ordered list of
//! columns it writes together with the codec used for each column. The
//! parser matches these tables against a file's `Format:` line to build a
//! per-file column mapping, and the serializer walks them to produce output,
//! so both directions go through the same codecs.
//!
//! # Example
//!
//! ```rust
//! use substation::{Dialect, parser::schema::{EventField, FormatLine}};
//!
//! let format = FormatLine::<EventField>::parse("Marked, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text", None)?;
//! assert_eq!(format.dialect(), Dialect::Legacy);
//! assert_eq!(format.position(EventField::Text), Some(9));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use core::fmt;
use std::borrow::Cow;

use crate::{
    parser::{
        ast::{ass_to_ssa_alignment, ssa_to_ass_alignment, Color, Event, Style},
        errors::{FormatError, FormatErrorKind},
    },
    utils::{
        ass_rgba_to_color, color_to_ass_rgba, color_to_ssa_rgb, format_bool, format_float,
        ms_to_timestamp, parse_bool, parse_float, parse_int, ssa_rgb_to_color, timestamp_to_ms,
    },
    Dialect,
};

/// Prefix of the SSA v4 `Marked` column value
const MARKED_PREFIX: &str = "Marked=";

/// Decoded value of a single column
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Free text, carried verbatim
    Text(Cow<'a, str>),
    /// Integer column
    Integer(i32),
    /// Float column
    Float(f64),
    /// `-1`/`0` flag column
    Boolean(bool),
    /// Color column in either packing
    Color(Color),
    /// Timestamp in milliseconds
    Time(i64),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => f.write_str(&format_float(*value)),
            Self::Boolean(value) => f.write_str(format_bool(*value)),
            Self::Color(color) => f.write_str(&color_to_ass_rgba(*color)),
            Self::Time(ms) => f.write_str(&ms_to_timestamp(*ms)),
        }
    }
}

/// Text encoding of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    /// String in a column followed by others
    ///
    /// Commas are written as `;` and line breaks as spaces, since either
    /// would shift or split the columns after it.
    Text,
    /// String in the final column, which may hold commas
    ///
    /// Line breaks are written as the `\N` hard break.
    FinalText,
    /// Decimal integer
    Integer,
    /// Float rendered with at least one decimal digit
    Float,
    /// `-1` for true, `0` for false
    Boolean,
    /// SSA v4 decimal `BBGGRR` integer
    PackedRgb,
    /// ASS v4+ `&HAABBGGRR`
    PackedArgb,
    /// `H:MM:SS.cc`
    Time,
    /// SSA v4 `Marked=<n>` carrying the event layer
    Marked,
    /// SSA v4 alignment numbering, converted to and from numpad layout
    LegacyAlignment,
    /// Always written as the given text, ignored on read
    Fixed(&'static str),
}

impl Codec {
    /// Decode raw column text
    ///
    /// Returns `Ok(None)` for [`Codec::Fixed`] columns, which carry no data.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid for this codec.
    pub fn decode(self, raw: &str) -> Result<Option<FieldValue<'_>>, FormatError> {
        let value = match self {
            Self::Text | Self::FinalText => FieldValue::Text(Cow::Borrowed(raw)),
            Self::Integer => FieldValue::Integer(parse_int(raw)?),
            Self::Float => FieldValue::Float(parse_float(raw)?),
            Self::Boolean => FieldValue::Boolean(parse_bool(raw)?),
            Self::PackedRgb => FieldValue::Color(ssa_rgb_to_color(raw)?),
            Self::PackedArgb => FieldValue::Color(ass_rgba_to_color(raw)?),
            Self::Time => FieldValue::Time(timestamp_to_ms(raw)?),
            Self::Marked => {
                let trimmed = raw.trim();
                let number = trimmed.strip_prefix(MARKED_PREFIX).unwrap_or(trimmed);
                FieldValue::Integer(parse_int(number)?)
            }
            Self::LegacyAlignment => FieldValue::Integer(ssa_to_ass_alignment(parse_int(raw)?)),
            Self::Fixed(_) => return Ok(None),
        };
        Ok(Some(value))
    }

    /// Encode a value as column text
    ///
    /// Total over all inputs: values that do not match the codec fall back
    /// to their natural rendering.
    #[must_use]
    pub fn encode(self, value: &FieldValue<'_>) -> String {
        match (self, value) {
            (Self::Fixed(text), _) => text.to_string(),
            (Self::Text, FieldValue::Text(text)) => text
                .replace("\r\n", " ")
                .replace(['\r', '\n'], " ")
                .replace(',', ";"),
            (Self::FinalText, FieldValue::Text(text)) => escape_line_breaks(text),
            (Self::Marked, FieldValue::Integer(layer)) => format!("{MARKED_PREFIX}{layer}"),
            (Self::LegacyAlignment, FieldValue::Integer(alignment)) => {
                ass_to_ssa_alignment(*alignment).to_string()
            }
            (Self::PackedRgb, FieldValue::Color(color)) => color_to_ssa_rgb(*color).to_string(),
            (_, value) => value.to_string(),
        }
    }
}

/// Replace each `\r\n`, `\r` or `\n` with the `\N` hard break
fn escape_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\\N").replace(['\r', '\n'], "\\N")
}

/// One column of a dialect table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<F> {
    /// Column name as written in `Format:` lines
    pub name: &'static str,
    /// Model slot this column fills
    pub field: F,
    /// How the column is encoded
    pub codec: Codec,
}

/// Shorthand for table entries
const fn col<F>(name: &'static str, field: F, codec: Codec) -> Column<F> {
    Column { name, field, codec }
}

/// Model slots addressable from a style line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleField {
    Name,
    Fontname,
    Fontsize,
    PrimaryColour,
    SecondaryColour,
    OutlineColour,
    BackColour,
    Bold,
    Italic,
    Underline,
    StrikeOut,
    ScaleX,
    ScaleY,
    Spacing,
    Angle,
    BorderStyle,
    Outline,
    Shadow,
    Alignment,
    MarginL,
    MarginR,
    MarginV,
    AlphaLevel,
    Encoding,
}

/// Model slots addressable from an event line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    Layer,
    Start,
    End,
    Style,
    Name,
    MarginL,
    MarginR,
    MarginV,
    Effect,
    Text,
}

/// `[V4 Styles]` columns
pub const LEGACY_STYLE_COLUMNS: [Column<StyleField>; 18] = [
    col("Name", StyleField::Name, Codec::Text),
    col("Fontname", StyleField::Fontname, Codec::Text),
    col("Fontsize", StyleField::Fontsize, Codec::Float),
    col("PrimaryColour", StyleField::PrimaryColour, Codec::PackedRgb),
    col("SecondaryColour", StyleField::SecondaryColour, Codec::PackedRgb),
    col("TertiaryColour", StyleField::OutlineColour, Codec::PackedRgb),
    col("BackColour", StyleField::BackColour, Codec::PackedRgb),
    col("Bold", StyleField::Bold, Codec::Boolean),
    col("Italic", StyleField::Italic, Codec::Boolean),
    col("BorderStyle", StyleField::BorderStyle, Codec::Integer),
    col("Outline", StyleField::Outline, Codec::Float),
    col("Shadow", StyleField::Shadow, Codec::Float),
    col("Alignment", StyleField::Alignment, Codec::LegacyAlignment),
    col("MarginL", StyleField::MarginL, Codec::Integer),
    col("MarginR", StyleField::MarginR, Codec::Integer),
    col("MarginV", StyleField::MarginV, Codec::Integer),
    col("AlphaLevel", StyleField::AlphaLevel, Codec::Fixed("0")),
    col("Encoding", StyleField::Encoding, Codec::Integer),
];

/// `[V4+ Styles]` columns
pub const EXTENDED_STYLE_COLUMNS: [Column<StyleField>; 23] = [
    col("Name", StyleField::Name, Codec::Text),
    col("Fontname", StyleField::Fontname, Codec::Text),
    col("Fontsize", StyleField::Fontsize, Codec::Float),
    col("PrimaryColour", StyleField::PrimaryColour, Codec::PackedArgb),
    col("SecondaryColour", StyleField::SecondaryColour, Codec::PackedArgb),
    col("OutlineColour", StyleField::OutlineColour, Codec::PackedArgb),
    col("BackColour", StyleField::BackColour, Codec::PackedArgb),
    col("Bold", StyleField::Bold, Codec::Boolean),
    col("Italic", StyleField::Italic, Codec::Boolean),
    col("Underline", StyleField::Underline, Codec::Boolean),
    col("StrikeOut", StyleField::StrikeOut, Codec::Boolean),
    col("ScaleX", StyleField::ScaleX, Codec::Float),
    col("ScaleY", StyleField::ScaleY, Codec::Float),
    col("Spacing", StyleField::Spacing, Codec::Float),
    col("Angle", StyleField::Angle, Codec::Float),
    col("BorderStyle", StyleField::BorderStyle, Codec::Integer),
    col("Outline", StyleField::Outline, Codec::Float),
    col("Shadow", StyleField::Shadow, Codec::Float),
    col("Alignment", StyleField::Alignment, Codec::Integer),
    col("MarginL", StyleField::MarginL, Codec::Integer),
    col("MarginR", StyleField::MarginR, Codec::Integer),
    col("MarginV", StyleField::MarginV, Codec::Integer),
    col("Encoding", StyleField::Encoding, Codec::Integer),
];

/// SSA v4 `[Events]` columns
pub const LEGACY_EVENT_COLUMNS: [Column<EventField>; 10] = [
    col("Marked", EventField::Layer, Codec::Marked),
    col("Start", EventField::Start, Codec::Time),
    col("End", EventField::End, Codec::Time),
    col("Style", EventField::Style, Codec::Text),
    col("Name", EventField::Name, Codec::Text),
    col("MarginL", EventField::MarginL, Codec::Integer),
    col("MarginR", EventField::MarginR, Codec::Integer),
    col("MarginV", EventField::MarginV, Codec::Integer),
    col("Effect", EventField::Effect, Codec::Text),
    col("Text", EventField::Text, Codec::FinalText),
];

/// ASS v4+ `[Events]` columns
pub const EXTENDED_EVENT_COLUMNS: [Column<EventField>; 10] = [
    col("Layer", EventField::Layer, Codec::Integer),
    col("Start", EventField::Start, Codec::Time),
    col("End", EventField::End, Codec::Time),
    col("Style", EventField::Style, Codec::Text),
    col("Name", EventField::Name, Codec::Text),
    col("MarginL", EventField::MarginL, Codec::Integer),
    col("MarginR", EventField::MarginR, Codec::Integer),
    col("MarginV", EventField::MarginV, Codec::Integer),
    col("Effect", EventField::Effect, Codec::Text),
    col("Text", EventField::Text, Codec::FinalText),
];

/// A field type with per-dialect column tables
pub trait SchemaField: Copy + Eq + fmt::Debug + 'static {
    /// Ordered column table for `dialect`
    fn columns(dialect: Dialect) -> &'static [Column<Self>];

    /// Dialect implied by a dialect-specific column name, if any
    fn dialect_of_column(name: &str) -> Option<Dialect>;
}

impl SchemaField for StyleField {
    fn columns(dialect: Dialect) -> &'static [Column<Self>] {
        match dialect {
            Dialect::Legacy => &LEGACY_STYLE_COLUMNS,
            Dialect::Extended => &EXTENDED_STYLE_COLUMNS,
        }
    }

    fn dialect_of_column(name: &str) -> Option<Dialect> {
        if name.eq_ignore_ascii_case("TertiaryColour") {
            Some(Dialect::Legacy)
        } else if name.eq_ignore_ascii_case("OutlineColour") {
            Some(Dialect::Extended)
        } else {
            None
        }
    }
}

impl SchemaField for EventField {
    fn columns(dialect: Dialect) -> &'static [Column<Self>] {
        match dialect {
            Dialect::Legacy => &LEGACY_EVENT_COLUMNS,
            Dialect::Extended => &EXTENDED_EVENT_COLUMNS,
        }
    }

    fn dialect_of_column(name: &str) -> Option<Dialect> {
        if name.eq_ignore_ascii_case("Marked") {
            Some(Dialect::Legacy)
        } else if name.eq_ignore_ascii_case("Layer") {
            Some(Dialect::Extended)
        } else {
            None
        }
    }
}

/// Look up a column by name in both dialect tables
///
/// Both tables are searched so that, for example, an `Underline` column in
/// an SSA v4 file still fills the underline flag. Matching ignores ASCII case.
fn lookup_column<F: SchemaField>(name: &str, dialect: Dialect) -> Option<Column<F>> {
    let other = match dialect {
        Dialect::Legacy => Dialect::Extended,
        Dialect::Extended => Dialect::Legacy,
    };
    F::columns(dialect)
        .iter()
        .chain(F::columns(other))
        .find(|column| column.name.eq_ignore_ascii_case(name))
        .copied()
}

/// Column mapping declared by one `Format:` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatLine<F: 'static> {
    /// Column names as written in the file
    names: Vec<String>,
    /// Known column at each position, `None` for unknown columns
    columns: Vec<Option<Column<F>>>,
    /// Dialect resolved for this section
    dialect: Dialect,
    /// First table column required for decoding that the file lacks
    missing: Option<&'static str>,
}

impl<F: SchemaField> FormatLine<F> {
    /// Parse the comma-separated column list following `Format:`
    ///
    /// The dialect comes from dialect-specific column names, else from
    /// `fallback`, else defaults to [`Dialect::Extended`].
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty.
    pub fn parse(list: &str, fallback: Option<Dialect>) -> Result<Self, FormatError> {
        let names: Vec<String> = list.split(',').map(|n| n.trim().to_string()).collect();
        if names.iter().all(String::is_empty) {
            return Err(FormatErrorKind::EmptyFormat.into());
        }

        let dialect = names
            .iter()
            .find_map(|name| F::dialect_of_column(name))
            .or(fallback)
            .unwrap_or_default();

        let columns: Vec<Option<Column<F>>> = names
            .iter()
            .map(|name| lookup_column(name, dialect))
            .collect();

        let missing = F::columns(dialect)
            .iter()
            .filter(|column| !matches!(column.codec, Codec::Fixed(_)))
            .find(|column| {
                !columns
                    .iter()
                    .flatten()
                    .any(|present| present.field == column.field)
            })
            .map(|column| column.name);

        Ok(Self {
            names,
            columns,
            dialect,
            missing,
        })
    }

    /// Dialect this section is decoded with
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Number of declared columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no columns are declared (never true for a parsed line)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column names as written in the file
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Names of columns this crate does not know
    pub fn unknown_columns(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .zip(&self.columns)
            .filter(|(_, column)| column.is_none())
            .map(|(name, _)| name.as_str())
    }

    /// Position of the first column filling `field`
    #[must_use]
    pub fn position(&self, field: F) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.is_some_and(|c| c.field == field))
    }

    /// Fail if a column needed to decode data lines is absent
    ///
    /// # Errors
    ///
    /// Returns [`FormatErrorKind::MissingColumn`] naming the absent column.
    pub fn ensure_complete(&self) -> Result<(), FormatError> {
        match self.missing {
            Some(column) => Err(FormatErrorKind::MissingColumn { column }.into()),
            None => Ok(()),
        }
    }

    /// Decode split field values, yielding each known column's value
    ///
    /// `values` must have exactly [`FormatLine::len`] entries. Non-final
    /// values are trimmed; the final value is passed through verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error on a field count mismatch, a missing required
    /// column, or an undecodable value.
    pub fn decode<'v>(&self, values: &[&'v str]) -> Result<Vec<(F, FieldValue<'v>)>, FormatError> {
        if values.len() != self.names.len() {
            return Err(FormatErrorKind::FieldCountMismatch {
                expected: self.names.len(),
                found: values.len(),
            }
            .into());
        }
        self.ensure_complete()?;

        let last = values.len() - 1;
        let mut decoded = Vec::with_capacity(values.len());
        for (idx, (raw, column)) in values.iter().copied().zip(&self.columns).enumerate() {
            let Some(column) = column else { continue };
            let raw = if idx == last { raw } else { raw.trim() };
            if let Some(value) = column.codec.decode(raw)? {
                decoded.push((column.field, value));
            }
        }
        Ok(decoded)
    }
}

/// Render the `Format:` column list for a dialect table
#[must_use]
pub fn format_list<F: SchemaField>(dialect: Dialect) -> String {
    F::columns(dialect)
        .iter()
        .map(|column| column.name)
        .collect::<Vec<_>>()
        .join(", ")
}

impl StyleField {
    /// Read this slot from a named style
    #[must_use]
    pub fn read<'a>(self, name: &'a str, style: &'a Style) -> FieldValue<'a> {
        match self {
            Self::Name => FieldValue::Text(Cow::Borrowed(name)),
            Self::Fontname => FieldValue::Text(Cow::Borrowed(&style.fontname)),
            Self::Fontsize => FieldValue::Float(style.fontsize),
            Self::PrimaryColour => FieldValue::Color(style.primary_color),
            Self::SecondaryColour => FieldValue::Color(style.secondary_color),
            Self::OutlineColour => FieldValue::Color(style.outline_color),
            Self::BackColour => FieldValue::Color(style.back_color),
            Self::Bold => FieldValue::Boolean(style.bold),
            Self::Italic => FieldValue::Boolean(style.italic),
            Self::Underline => FieldValue::Boolean(style.underline),
            Self::StrikeOut => FieldValue::Boolean(style.strikeout),
            Self::ScaleX => FieldValue::Float(style.scale_x),
            Self::ScaleY => FieldValue::Float(style.scale_y),
            Self::Spacing => FieldValue::Float(style.spacing),
            Self::Angle => FieldValue::Float(style.angle),
            Self::BorderStyle => FieldValue::Integer(style.border_style),
            Self::Outline => FieldValue::Float(style.outline),
            Self::Shadow => FieldValue::Float(style.shadow),
            Self::Alignment => FieldValue::Integer(style.alignment),
            Self::MarginL => FieldValue::Integer(style.margin_l),
            Self::MarginR => FieldValue::Integer(style.margin_r),
            Self::MarginV => FieldValue::Integer(style.margin_v),
            Self::AlphaLevel => FieldValue::Integer(0),
            Self::Encoding => FieldValue::Integer(style.encoding),
        }
    }

    /// Store a decoded value into this slot
    ///
    /// `Name` and `AlphaLevel` are not stored on the style. Returns `false`
    /// if the value kind does not fit the slot.
    pub fn write(self, style: &mut Style, value: FieldValue<'_>) -> bool {
        use FieldValue::{Boolean, Color, Float, Integer, Text};
        match (self, value) {
            (Self::Name | Self::AlphaLevel, _) => return true,
            (Self::Fontname, Text(v)) => style.fontname = v.into_owned(),
            (Self::Fontsize, Float(v)) => style.fontsize = v,
            (Self::PrimaryColour, Color(v)) => style.primary_color = v,
            (Self::SecondaryColour, Color(v)) => style.secondary_color = v,
            (Self::OutlineColour, Color(v)) => style.outline_color = v,
            (Self::BackColour, Color(v)) => style.back_color = v,
            (Self::Bold, Boolean(v)) => style.bold = v,
            (Self::Italic, Boolean(v)) => style.italic = v,
            (Self::Underline, Boolean(v)) => style.underline = v,
            (Self::StrikeOut, Boolean(v)) => style.strikeout = v,
            (Self::ScaleX, Float(v)) => style.scale_x = v,
            (Self::ScaleY, Float(v)) => style.scale_y = v,
            (Self::Spacing, Float(v)) => style.spacing = v,
            (Self::Angle, Float(v)) => style.angle = v,
            (Self::BorderStyle, Integer(v)) => style.border_style = v,
            (Self::Outline, Float(v)) => style.outline = v,
            (Self::Shadow, Float(v)) => style.shadow = v,
            (Self::Alignment, Integer(v)) => style.alignment = v,
            (Self::MarginL, Integer(v)) => style.margin_l = v,
            (Self::MarginR, Integer(v)) => style.margin_r = v,
            (Self::MarginV, Integer(v)) => style.margin_v = v,
            (Self::Encoding, Integer(v)) => style.encoding = v,
            _ => return false,
        }
        true
    }
}

impl EventField {
    /// Read this slot from an event
    #[must_use]
    pub fn read(self, event: &Event) -> FieldValue<'_> {
        match self {
            Self::Layer => FieldValue::Integer(event.layer),
            Self::Start => FieldValue::Time(event.start),
            Self::End => FieldValue::Time(event.end),
            Self::Style => FieldValue::Text(Cow::Borrowed(&event.style)),
            Self::Name => FieldValue::Text(Cow::Borrowed(&event.name)),
            Self::MarginL => FieldValue::Integer(event.margin_l),
            Self::MarginR => FieldValue::Integer(event.margin_r),
            Self::MarginV => FieldValue::Integer(event.margin_v),
            Self::Effect => FieldValue::Text(Cow::Borrowed(&event.effect)),
            Self::Text => FieldValue::Text(Cow::Borrowed(&event.text)),
        }
    }

    /// Store a decoded value into this slot
    ///
    /// Returns `false` if the value kind does not fit the slot.
    pub fn write(self, event: &mut Event, value: FieldValue<'_>) -> bool {
        use FieldValue::{Integer, Text, Time};
        match (self, value) {
            (Self::Layer, Integer(v)) => event.layer = v,
            (Self::Start, Time(v)) => event.start = v,
            (Self::End, Time(v)) => event.end = v,
            (Self::Style, Text(v)) => event.style = v.into_owned(),
            (Self::Name, Text(v)) => event.name = v.into_owned(),
            (Self::MarginL, Integer(v)) => event.margin_l = v,
            (Self::MarginR, Integer(v)) => event.margin_r = v,
            (Self::MarginV, Integer(v)) => event.margin_v = v,
            (Self::Effect, Text(v)) => event.effect = v.into_owned(),
            (Self::Text, Text(v)) => event.text = v.into_owned(),
            _ => return false,
        }
        true
    }
}
