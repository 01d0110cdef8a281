//! Timestamp codec for `H:MM:SS.cc` event times
//!
//! Times are held as integer milliseconds. The text form has centisecond
//! resolution, so encoding truncates the last millisecond digit.

use crate::parser::errors::FormatError;

/// Milliseconds per hour
const MS_PER_HOUR: i64 = 3_600_000;
/// Milliseconds per minute
const MS_PER_MINUTE: i64 = 60_000;
/// Milliseconds per second
const MS_PER_SECOND: i64 = 1_000;

/// Build a millisecond total from clock components
///
/// Components are not range checked, so `make_time(0, 90, 0, 0)` is simply
/// 90 minutes. Totals beyond the `i64` range saturate instead of wrapping.
///
/// # Example
///
/// ```rust
/// # use substation::utils::make_time;
/// assert_eq!(make_time(0, 1, 0, 0), 60_000);
/// assert_eq!(make_time(1, 2, 3, 450), 3_723_450);
/// ```
#[must_use]
pub const fn make_time(hours: i64, minutes: i64, seconds: i64, milliseconds: i64) -> i64 {
    hours
        .saturating_mul(MS_PER_HOUR)
        .saturating_add(minutes.saturating_mul(MS_PER_MINUTE))
        .saturating_add(seconds.saturating_mul(MS_PER_SECOND))
        .saturating_add(milliseconds)
}

/// Format milliseconds as `H:MM:SS.cc`
///
/// Negative values clamp to zero. Hours are unpadded, everything else is
/// two digits wide; centiseconds are truncated, not rounded.
///
/// # Example
///
/// ```rust
/// # use substation::utils::ms_to_timestamp;
/// assert_eq!(ms_to_timestamp(60_000), "0:01:00.00");
/// assert_eq!(ms_to_timestamp(3_723_459), "1:02:03.45");
/// ```
#[must_use]
pub fn ms_to_timestamp(ms: i64) -> String {
    let ms = ms.max(0);
    let hours = ms / MS_PER_HOUR;
    let remainder = ms % MS_PER_HOUR;
    let minutes = remainder / MS_PER_MINUTE;
    let remainder = remainder % MS_PER_MINUTE;
    let seconds = remainder / MS_PER_SECOND;
    let centiseconds = (remainder % MS_PER_SECOND) / 10;

    format!("{hours}:{minutes:02}:{seconds:02}.{centiseconds:02}")
}

/// Parse `H:MM:SS.cc` (or `H:MM:SS.mmm`) into milliseconds
///
/// # Example
///
/// ```rust
/// # use substation::utils::timestamp_to_ms;
/// assert_eq!(timestamp_to_ms("0:01:30.50")?, 90_500);
/// assert_eq!(timestamp_to_ms("10:00:00.00")?, 36_000_000);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns an error if the text does not have the timestamp shape, or if
/// minutes or seconds are 60 or more.
pub fn timestamp_to_ms(text: &str) -> Result<i64, FormatError> {
    let trimmed = text.trim();
    let mut parts = trimmed.split(':');
    let (Some(hours), Some(minutes), Some(rest), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(FormatError::invalid_time(text, "expected H:MM:SS.cc"));
    };
    let Some((seconds, fraction)) = rest.split_once('.') else {
        return Err(FormatError::invalid_time(text, "missing fractional seconds"));
    };

    let hours = digits(hours, 1..=usize::MAX)
        .ok_or_else(|| FormatError::invalid_time(text, "invalid hours"))?;
    let minutes = digits(minutes, 2..=2)
        .ok_or_else(|| FormatError::invalid_time(text, "minutes must be two digits"))?;
    let seconds = digits(seconds, 2..=2)
        .ok_or_else(|| FormatError::invalid_time(text, "seconds must be two digits"))?;
    let fraction_ms = match fraction.len() {
        2 => digits(fraction, 2..=2).map(|cs| cs * 10),
        3 => digits(fraction, 3..=3),
        _ => None,
    }
    .ok_or_else(|| FormatError::invalid_time(text, "expected two centisecond digits"))?;

    if minutes >= 60 {
        return Err(FormatError::invalid_time(text, "minutes must be < 60"));
    }
    if seconds >= 60 {
        return Err(FormatError::invalid_time(text, "seconds must be < 60"));
    }

    hours
        .checked_mul(MS_PER_HOUR)
        .and_then(|ms| ms.checked_add(make_time(0, minutes, seconds, fraction_ms)))
        .ok_or_else(|| FormatError::invalid_time(text, "hours out of range"))
}

/// Parse an all-digit field whose length falls within `len`
fn digits(text: &str, len: core::ops::RangeInclusive<usize>) -> Option<i64> {
    if !len.contains(&text.len()) || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
