//! Four-channel color value shared by both dialects

/// RGBA color with 8-bit channels
///
/// Alpha follows the SubStation convention: `0` is fully opaque and `255`
/// fully transparent. The legacy dialect cannot store alpha at all.
///
/// # Examples
///
/// ```rust
/// use substation::Color;
///
/// let red = Color::rgb(255, 0, 0);
/// assert_eq!(red.a, 0);
/// assert_eq!(red, Color::new(255, 0, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (0 = opaque)
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque red
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Create a color from all four channels
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0)
    }

    /// Same color with a different alpha
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}
