//! Utility functions and shared types for the SubStation codec
//!
//! Contains the field-level codecs shared by the parser and serializer:
//! colors, timestamps, numbers and booleans, plus the ordered map used by
//! the document model.
//!
//! # Example
//!
//! ```rust
//! use substation::utils::{format_float, parse_float, ms_to_timestamp};
//!
//! assert_eq!(format_float(parse_float("2")?), "2.0");
//! assert_eq!(ms_to_timestamp(90_500), "0:01:30.50");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use core::{fmt, str::FromStr};

use crate::parser::errors::FormatError;

pub mod color;
pub mod ordered_map;
pub mod time;

pub use color::{ass_rgba_to_color, color_to_ass_rgba, color_to_ssa_rgb, ssa_rgb_to_color};
pub use ordered_map::OrderedMap;
pub use time::{make_time, ms_to_timestamp, timestamp_to_ms};

/// UTF-8 byte order mark as it appears after decoding
const BOM: char = '\u{FEFF}';

/// Parse a numeric field value with a descriptive error
///
/// # Errors
///
/// Returns an error if the trimmed text cannot be parsed as `T`.
pub fn parse_numeric<T>(value: &str) -> Result<T, FormatError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| FormatError::invalid_numeric(value, &e.to_string()))
}

/// Parse an integer column
///
/// # Errors
///
/// Returns an error if the text is not a valid `i32`.
pub fn parse_int(value: &str) -> Result<i32, FormatError> {
    parse_numeric(value)
}

/// Parse a float column
///
/// # Errors
///
/// Returns an error if the text is not a valid `f64`.
pub fn parse_float(value: &str) -> Result<f64, FormatError> {
    parse_numeric(value)
}

/// Parse a boolean column
///
/// Any integer is accepted; non-zero is true. `-1` is what writers emit.
///
/// # Errors
///
/// Returns an error if the text is not an integer.
pub fn parse_bool(value: &str) -> Result<bool, FormatError> {
    parse_numeric::<i64>(value).map(|v| v != 0)
}

/// Render a boolean column as `-1` or `0`
#[must_use]
pub const fn format_bool(value: bool) -> &'static str {
    if value {
        "-1"
    } else {
        "0"
    }
}

/// Render a float with at least one decimal digit
///
/// Whole numbers get a trailing `.0`; others use the shortest text that
/// parses back to the same value.
///
/// # Example
///
/// ```rust
/// # use substation::utils::format_float;
/// assert_eq!(format_float(2.0), "2.0");
/// assert_eq!(format_float(1.5), "1.5");
/// assert_eq!(format_float(-0.25), "-0.25");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Strip a leading byte order mark
///
/// Returns the remaining text and whether a BOM was present.
#[must_use]
pub fn strip_bom(text: &str) -> (&str, bool) {
    text.strip_prefix(BOM)
        .map_or((text, false), |stripped| (stripped, true))
}
