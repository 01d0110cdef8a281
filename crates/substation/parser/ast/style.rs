//! Style definition shared by the `[V4 Styles]` and `[V4+ Styles]` sections
//!
//! A style carries no name of its own; the document keys styles by name.

use super::Color;

/// Typed style definition
///
/// Legacy (SSA v4) files have no underline, strikeout, scale, spacing or
/// angle columns; styles read from them keep the defaults for those fields.
///
/// # Examples
///
/// ```rust
/// use substation::Style;
///
/// let style = Style {
///     alignment: 7,
///     bold: true,
///     ..Style::default()
/// };
///
/// assert_eq!(style.fontname, "Arial");
/// assert!((style.fontsize - 20.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Font family name
    pub fontname: String,

    /// Font size in points
    pub fontsize: f64,

    /// Fill color
    pub primary_color: Color,

    /// Karaoke pre-highlight color
    pub secondary_color: Color,

    /// Outline color (`TertiaryColour` in SSA v4)
    pub outline_color: Color,

    /// Shadow/background color
    pub back_color: Color,

    /// Bold flag
    pub bold: bool,

    /// Italic flag
    pub italic: bool,

    /// Underline flag (ASS only)
    pub underline: bool,

    /// Strikeout flag (ASS only)
    pub strikeout: bool,

    /// Horizontal scale percentage (ASS only)
    pub scale_x: f64,

    /// Vertical scale percentage (ASS only)
    pub scale_y: f64,

    /// Extra character spacing in pixels (ASS only)
    pub spacing: f64,

    /// Rotation angle in degrees (ASS only)
    pub angle: f64,

    /// Border style (1 = outline and shadow, 3 = opaque box)
    pub border_style: i32,

    /// Outline width in pixels
    pub outline: f64,

    /// Shadow depth in pixels
    pub shadow: f64,

    /// Numpad alignment: 1-3 bottom, 4-6 middle, 7-9 top
    pub alignment: i32,

    /// Left margin in pixels
    pub margin_l: i32,

    /// Right margin in pixels
    pub margin_r: i32,

    /// Vertical margin in pixels
    pub margin_v: i32,

    /// Font charset identifier
    pub encoding: i32,
}

impl Default for Style {
    /// White 20pt Arial, bottom-center, 2px outline and shadow
    fn default() -> Self {
        Self {
            fontname: "Arial".to_string(),
            fontsize: 20.0,
            primary_color: Color::WHITE,
            secondary_color: Color::RED,
            outline_color: Color::BLACK,
            back_color: Color::BLACK,
            bold: false,
            italic: false,
            underline: false,
            strikeout: false,
            scale_x: 100.0,
            scale_y: 100.0,
            spacing: 0.0,
            angle: 0.0,
            border_style: 1,
            outline: 2.0,
            shadow: 2.0,
            alignment: 2,
            margin_l: 10,
            margin_r: 10,
            margin_v: 10,
            encoding: 1,
        }
    }
}

/// Legacy alignment value for each ASS numpad alignment 1-9
const LEGACY_ALIGNMENT: [i32; 9] = [1, 2, 3, 9, 10, 11, 5, 6, 7];

/// Convert a numpad alignment to the SSA v4 numbering
///
/// Values outside 1-9 are returned unchanged.
///
/// # Examples
///
/// ```rust
/// # use substation::parser::ast::ass_to_ssa_alignment;
/// assert_eq!(ass_to_ssa_alignment(2), 2);
/// assert_eq!(ass_to_ssa_alignment(7), 5);
/// assert_eq!(ass_to_ssa_alignment(42), 42);
/// ```
#[must_use]
pub fn ass_to_ssa_alignment(alignment: i32) -> i32 {
    alignment
        .checked_sub(1)
        .and_then(|idx| usize::try_from(idx).ok())
        .and_then(|idx| LEGACY_ALIGNMENT.get(idx))
        .copied()
        .unwrap_or(alignment)
}

/// Convert an SSA v4 alignment to the numpad numbering
///
/// Values without a numpad equivalent are returned unchanged.
#[must_use]
pub fn ssa_to_ass_alignment(alignment: i32) -> i32 {
    LEGACY_ALIGNMENT
        .iter()
        .position(|&legacy| legacy == alignment)
        .and_then(|idx| i32::try_from(idx + 1).ok())
        .unwrap_or(alignment)
}
