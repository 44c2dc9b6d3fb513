//! RGB colors and the named desktop palette

use serde::{Deserialize, Serialize};

/// Opaque RGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Accent teal
    pub const PRIMARY: Color = Color::rgb(48, 213, 200);
    /// Default button and menu bar fill
    pub const SECONDARY: Color = Color::rgb(10, 186, 181);
    /// Hover/pressed fill and titlebars
    pub const TERTIARY: Color = Color::rgb(0, 139, 139);

    /// Create a color from RGB components
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_values() {
        assert_eq!(Color::PRIMARY, Color::rgb(48, 213, 200));
        assert_eq!(Color::SECONDARY, Color::rgb(10, 186, 181));
        assert_eq!(Color::TERTIARY, Color::rgb(0, 139, 139));
        assert_eq!(Color::from((255, 255, 255)), Color::WHITE);
    }
}
