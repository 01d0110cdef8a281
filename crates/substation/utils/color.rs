//! Color codecs for both SubStation dialects
//!
//! SSA v4 stores colors as a decimal integer packing `(b << 16) | (g << 8) | r`
//! with no alpha channel. ASS v4+ stores them as `&HAABBGGRR` hex text.
//! The two encodings are never mixed within a section.
//!
//! # Example
//!
//! ```rust
//! use substation::{Color, utils::{ass_rgba_to_color, color_to_ass_rgba}};
//!
//! let color = ass_rgba_to_color("&HAABBCCDD")?;
//! assert_eq!(color, Color::new(0xDD, 0xCC, 0xBB, 0xAA));
//! assert_eq!(color_to_ass_rgba(color), "&HAABBCCDD");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::parser::{ast::Color, errors::FormatError};

/// Encode a color as the SSA v4 packed integer
///
/// Alpha is not representable in this encoding and is dropped.
///
/// # Example
///
/// ```rust
/// # use substation::{Color, utils::color_to_ssa_rgb};
/// assert_eq!(color_to_ssa_rgb(Color::rgb(255, 0, 0)), 255);
/// assert_eq!(color_to_ssa_rgb(Color::rgb(255, 255, 255)), 16_777_215);
/// ```
#[must_use]
pub fn color_to_ssa_rgb(color: Color) -> u32 {
    (u32::from(color.b) << 16) | (u32::from(color.g) << 8) | u32::from(color.r)
}

/// Decode an SSA v4 packed integer color
///
/// Bits above the 24th are ignored; alpha is always 0.
///
/// # Errors
///
/// Returns an error if the text is not a non-negative decimal integer.
pub fn ssa_rgb_to_color(text: &str) -> Result<Color, FormatError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::invalid_color(
            text,
            "expected a non-negative decimal integer",
        ));
    }

    let value: u64 = trimmed
        .parse()
        .map_err(|_| FormatError::invalid_color(text, "integer out of range"))?;

    let [r, g, b, ..] = value.to_le_bytes();
    Ok(Color::rgb(r, g, b))
}

/// Encode a color as ASS v4+ `&HAABBGGRR` text with uppercase hex digits
#[must_use]
pub fn color_to_ass_rgba(color: Color) -> String {
    format!(
        "&H{:02X}{:02X}{:02X}{:02X}",
        color.a, color.b, color.g, color.r
    )
}

/// Decode ASS v4+ `&HAABBGGRR` color text
///
/// The `&H` prefix and hex digits are matched case-insensitively.
///
/// # Errors
///
/// Returns an error if the prefix is missing, the hex part is not exactly
/// eight digits long, or it contains non-hex characters.
pub fn ass_rgba_to_color(text: &str) -> Result<Color, FormatError> {
    let trimmed = text.trim();
    let hex = trimmed
        .strip_prefix("&H")
        .or_else(|| trimmed.strip_prefix("&h"))
        .ok_or_else(|| FormatError::invalid_color(text, "missing '&H' prefix"))?;

    if hex.len() != 8 {
        return Err(FormatError::invalid_color(
            text,
            "expected exactly 8 hex digits",
        ));
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(FormatError::invalid_color(text, "non-hex digit"));
    }

    let value = u32::from_str_radix(hex, 16)
        .map_err(|_| FormatError::invalid_color(text, "invalid hex value"))?;
    let [r, g, b, a] = value.to_le_bytes();
    Ok(Color::new(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::errors::FormatErrorKind;

    #[test]
    fn ssa_packs_bgr() {
        assert_eq!(color_to_ssa_rgb(Color::rgb(1, 2, 3)), 0x0003_0201);
        assert_eq!(color_to_ssa_rgb(Color::new(1, 2, 3, 200)), 0x0003_0201);
    }

    #[test]
    fn ssa_decodes_reference_values() {
        assert_eq!(
            ssa_rgb_to_color("16777215").unwrap(),
            Color::rgb(255, 255, 255)
        );
        assert_eq!(ssa_rgb_to_color("255").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(ssa_rgb_to_color("0").unwrap(), Color::rgb(0, 0, 0));
    }

    #[test]
    fn ssa_ignores_high_bits() {
        assert_eq!(
            ssa_rgb_to_color("4278190335").unwrap(),
            Color::rgb(255, 0, 0)
        );
    }

    #[test]
    fn ssa_rejects_non_integers() {
        for bad in ["", "-1", "&HFFFFFF", "12.5", "abc"] {
            let err = ssa_rgb_to_color(bad).unwrap_err();
            assert!(
                matches!(err.kind(), FormatErrorKind::InvalidColor { .. }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn ass_exact_layout() {
        assert_eq!(
            ass_rgba_to_color("&HAABBCCDD").unwrap(),
            Color::new(0xDD, 0xCC, 0xBB, 0xAA)
        );
        assert_eq!(
            color_to_ass_rgba(Color::new(0xDD, 0xCC, 0xBB, 0xAA)),
            "&HAABBCCDD"
        );
    }

    #[test]
    fn ass_case_insensitive() {
        assert_eq!(
            ass_rgba_to_color("&h00ffffff").unwrap(),
            Color::rgb(255, 255, 255)
        );
    }

    #[test]
    fn ass_renders_uppercase_padded() {
        assert_eq!(color_to_ass_rgba(Color::rgb(255, 0, 0)), "&H000000FF");
        assert_eq!(color_to_ass_rgba(Color::rgb(10, 11, 12)), "&H000C0B0A");
    }

    #[test]
    fn ass_rejects_malformed() {
        for bad in ["00FFFFFF", "&HFFFFFF", "&H00FFFFFF00", "&H00GGFFFF", "&H00FFFFFF&", ""] {
            assert!(ass_rgba_to_color(bad).is_err(), "{bad:?} should be rejected");
        }
    }
}
