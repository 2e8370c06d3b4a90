//! Interface colors. Swatches carry their own colors; everything around
//! them stays grayscale so the palette is the only thing in color.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct UiColors {
    pub bg_primary: Color,
    pub bg_highlight: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
}

impl UiColors {
    pub const MONO: Self = Self {
        bg_primary: Color::Rgb(0, 0, 0),
        bg_highlight: Color::Rgb(48, 48, 48),
        fg_primary: Color::Rgb(255, 255, 255),
        fg_secondary: Color::Rgb(136, 136, 136),
        accent: Color::Rgb(255, 255, 255),
        accent_alt: Color::Rgb(200, 200, 200),
        border: Color::Rgb(64, 64, 64),
        success: Color::Rgb(200, 200, 200),
        // Errors read through the toast icon, not the color.
        error: Color::Rgb(255, 255, 255),
    };
}

impl Default for UiColors {
    fn default() -> Self {
        Self::MONO
    }
}
